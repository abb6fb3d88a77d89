//! Argument narrowing shared by the ECM tools.
//!
//! Each helper reads one field from the loosely-typed argument map and either
//! returns a typed value or the `ToolError` a client should see. Tools call
//! them before touching the backend.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::core::backend::Metadata;
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError};

/// Result cap applied when the caller does not pass `maxResults`.
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Field value, treating an explicit JSON `null` as absent.
fn field<'a>(args: &'a Arguments, name: &str) -> Option<&'a Value> {
    args.get(name).filter(|v| !v.is_null())
}

/// Required non-blank string.
pub fn required_str<'a>(args: &'a Arguments, name: &str) -> Result<&'a str, ToolError> {
    optional_str(args, name)?.ok_or_else(|| ToolError::missing(name))
}

/// Optional string; blank counts as absent.
pub fn optional_str<'a>(args: &'a Arguments, name: &str) -> Result<Option<&'a str>, ToolError> {
    match field(args, name) {
        None => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ToolError::wrong_type(name, "a string")),
    }
}

/// Optional boolean flag. `"true"`/`"false"` strings are accepted as well.
pub fn optional_bool(args: &Arguments, name: &str, default: bool) -> Result<bool, ToolError> {
    match field(args, name) {
        None => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(true),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(false),
        Some(_) => Err(ToolError::wrong_type(name, "a boolean")),
    }
}

/// `maxResults`, defaulting to [`DEFAULT_MAX_RESULTS`].
pub fn optional_max_results(args: &Arguments) -> Result<u32, ToolError> {
    const NAME: &str = "maxResults";
    let Some(value) = field(args, NAME) else {
        return Ok(DEFAULT_MAX_RESULTS);
    };
    let invalid = || ToolError::wrong_type(NAME, "a positive integer");

    let n = match value {
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(n), _) => n,
            (None, Some(f)) if f.fract() == 0.0 && f >= 1.0 => f as u64,
            _ => return Err(invalid()),
        },
        _ => return Err(invalid()),
    };
    if n == 0 {
        return Err(invalid());
    }
    Ok(u32::try_from(n).unwrap_or(u32::MAX))
}

/// Optional JSON object.
pub fn optional_object<'a>(
    args: &'a Arguments,
    name: &str,
) -> Result<Option<&'a Metadata>, ToolError> {
    match field(args, name) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ToolError::wrong_type(name, "an object")),
    }
}

/// Required non-empty JSON object.
pub fn required_object<'a>(args: &'a Arguments, name: &str) -> Result<&'a Metadata, ToolError> {
    optional_object(args, name)?
        .filter(|map| !map.is_empty())
        .ok_or_else(|| ToolError::missing(name))
}

/// Optional list of strings. Blank entries are dropped; an empty list is absent.
pub fn optional_string_list(
    args: &Arguments,
    name: &str,
) -> Result<Option<Vec<String>>, ToolError> {
    let Some(value) = field(args, name) else {
        return Ok(None);
    };
    let Value::Array(items) = value else {
        return Err(ToolError::wrong_type(name, "an array of strings"));
    };

    let mut list = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) if s.trim().is_empty() => {}
            Value::String(s) => list.push(s.clone()),
            _ => return Err(ToolError::wrong_type(name, "an array of strings")),
        }
    }
    Ok((!list.is_empty()).then_some(list))
}

/// Optional calendar date in `YYYY-MM-DD` form.
pub fn optional_date(args: &Arguments, name: &str) -> Result<Option<NaiveDate>, ToolError> {
    match optional_str(args, name)? {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ToolError::wrong_type(name, "an ISO date (YYYY-MM-DD)")),
    }
}

/// Serialize a tool-built response into a payload.
pub fn to_payload<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value)
        .map_err(|e| ToolError::internal(format!("failed to encode response: {e}")))
}

/// The `documentId` property most tools share.
pub fn document_id_property() -> SchemaBuilder {
    SchemaBuilder::string()
        .description("The unique identifier of the document")
        .required(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Arguments {
        match value {
            Value::Object(map) => map,
            _ => panic!("test arguments must be an object"),
        }
    }

    #[test]
    fn test_required_str() {
        let a = args(json!({"id": "doc1", "blank": "  ", "num": 7, "nil": null}));
        assert_eq!(required_str(&a, "id").unwrap(), "doc1");
        assert_eq!(
            required_str(&a, "blank").unwrap_err().to_string(),
            "blank is required"
        );
        assert_eq!(
            required_str(&a, "nil").unwrap_err().to_string(),
            "nil is required"
        );
        assert_eq!(
            required_str(&a, "absent").unwrap_err().to_string(),
            "absent is required"
        );
        assert_eq!(
            required_str(&a, "num").unwrap_err().to_string(),
            "num must be a string"
        );
    }

    #[test]
    fn test_optional_bool() {
        let a = args(json!({"yes": true, "text": "FALSE", "bad": 1}));
        assert!(optional_bool(&a, "yes", false).unwrap());
        assert!(!optional_bool(&a, "text", true).unwrap());
        assert!(optional_bool(&a, "missing", true).unwrap());
        assert!(optional_bool(&a, "bad", true).is_err());
    }

    #[test]
    fn test_max_results() {
        assert_eq!(optional_max_results(&Arguments::new()).unwrap(), 50);
        assert_eq!(
            optional_max_results(&args(json!({"maxResults": 10}))).unwrap(),
            10
        );
        assert_eq!(
            optional_max_results(&args(json!({"maxResults": 25.0}))).unwrap(),
            25
        );
        for bad in [json!(0), json!(-3), json!(2.5), json!("10")] {
            let err = optional_max_results(&args(json!({"maxResults": bad}))).unwrap_err();
            assert_eq!(err.to_string(), "maxResults must be a positive integer");
        }
    }

    #[test]
    fn test_required_object_rejects_empty() {
        let a = args(json!({"metadata": {}, "full": {"k": "v"}, "list": [1]}));
        assert_eq!(
            required_object(&a, "metadata").unwrap_err().to_string(),
            "metadata is required"
        );
        assert_eq!(required_object(&a, "full").unwrap()["k"], "v");
        assert!(matches!(
            required_object(&a, "list"),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_string_list() {
        let a = args(json!({"tags": ["a", " ", "b"], "empty": [], "mixed": ["a", 1]}));
        assert_eq!(
            optional_string_list(&a, "tags").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(optional_string_list(&a, "empty").unwrap(), None);
        assert!(optional_string_list(&a, "mixed").is_err());
    }

    #[test]
    fn test_optional_date() {
        let a = args(json!({"from": "2024-02-29", "bad": "29/02/2024"}));
        assert_eq!(
            optional_date(&a, "from").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            optional_date(&a, "bad").unwrap_err().to_string(),
            "bad must be an ISO date (YYYY-MM-DD)"
        );
        assert_eq!(optional_date(&a, "none").unwrap(), None);
    }
}
