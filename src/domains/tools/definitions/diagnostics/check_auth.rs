//! Authentication self-check tool definition.
//!
//! Inspects a caller-supplied bearer token or `Authorization` header and
//! reports formatting problems. It never contacts the backend and cannot tell
//! whether a well-formed token is actually accepted.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{optional_string_list, to_payload};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

const BEARER_PREFIX: &str = "Bearer ";
const MIN_TOKEN_LEN: usize = 20;

// ============================================================================
// Output Structure
// ============================================================================

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct AuthAssessment {
    valid: bool,
    issues: Vec<&'static str>,
    suggestions: Vec<String>,
    scope_info: String,
    message: &'static str,
    tip: &'static str,
}

impl AuthAssessment {
    fn issue(&mut self, issue: &'static str, suggestion: &str) {
        self.valid = false;
        self.issues.push(issue);
        self.suggestions.push(suggestion.to_string());
    }
}

/// Assess the supplied credentials.
fn assess(token: Option<&str>, auth_header: Option<&str>, scopes: &[String]) -> AuthAssessment {
    let mut report = AuthAssessment {
        valid: true,
        issues: Vec::new(),
        suggestions: Vec::new(),
        scope_info: "Unknown - cannot verify without token validation".to_string(),
        message: "",
        tip: "OAuth2 tokens expire after 1 hour. Request a new token if yours has expired.",
    };

    if token.is_none() && auth_header.is_none() {
        report.issue(
            "No authentication provided",
            "Obtain an OAuth2 token from the /auth/token endpoint",
        );
        report
            .suggestions
            .push("Include token in Authorization header: Bearer {token}".to_string());
    }

    if let Some(header) = auth_header {
        match header.strip_prefix(BEARER_PREFIX) {
            None => report.issue(
                "Invalid Authorization header format",
                "Use format: Bearer {your_token}",
            ),
            Some(t) if t.trim().is_empty() => report.issue(
                "Token is empty",
                "Provide a valid OAuth2 token after 'Bearer '",
            ),
            Some(t) if t.chars().count() < MIN_TOKEN_LEN => report.issue(
                "Token seems too short - may be invalid",
                "Verify you're using a complete, valid token",
            ),
            Some(_) => {}
        }
    }

    if token.is_some_and(|t| t.trim().is_empty()) {
        report.issue("Token is empty", "Provide a valid OAuth2 access token");
    }

    if !scopes.is_empty() {
        let joined = scopes.join(", ");
        report.scope_info = format!("Required scopes: {joined}");
        report
            .suggestions
            .push(format!("Ensure your token has these scopes: {joined}"));
    }

    report.message = if report.valid {
        "✓ Authentication appears to be configured correctly"
    } else {
        "✗ Authentication has issues that need to be fixed"
    };
    report
}

/// String argument where blank is meaningful and kept.
fn raw_str<'a>(args: &'a Arguments, name: &str) -> Result<Option<&'a str>, ToolError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ToolError::wrong_type(name, "a string")),
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

pub struct CheckAuthenticationTool;

impl CheckAuthenticationTool {
    pub const NAME: &'static str = "check_authentication";

    pub const DESCRIPTION: &'static str = "Check if your authentication is properly configured. \
         Validates OAuth2 tokens, checks required scopes, and verifies header format. \
         Use this if you're getting 401 Unauthorized errors.";

    #[instrument(skip_all)]
    fn run(args: &Arguments) -> Result<Value, ToolError> {
        let token = raw_str(args, "token")?;
        let auth_header = raw_str(args, "authHeader")?;
        let scopes = optional_string_list(args, "requiredScopes")?.unwrap_or_default();
        info!("Checking authentication configuration");

        let report = assess(token, auth_header, &scopes);
        info!("Authentication check: {} issue(s)", report.issues.len());
        to_payload(&report)
    }
}

#[async_trait]
impl ToolHandler for CheckAuthenticationTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object()
            .property(
                "token",
                SchemaBuilder::string().description("OAuth2 access token to validate"),
            )
            .property(
                "authHeader",
                SchemaBuilder::string().description("Complete Authorization header value"),
            )
            .property(
                "requiredScopes",
                SchemaBuilder::array()
                    .description("Scopes required for the API endpoint")
                    .items(SchemaBuilder::string()),
            )
            .build()
    }

    fn tags(&self) -> &[&str] {
        &["authentication", "security", "debugging"]
    }

    async fn execute(&self, arguments: &Arguments) -> ToolResult {
        ToolResult::from_outcome(Self::run(arguments))
    }
}
