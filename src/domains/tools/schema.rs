//! Fluent builder for JSON-Schema shaped tool input descriptors.
//!
//! ```
//! use ecm_mcp_server::domains::tools::SchemaBuilder;
//!
//! let schema = SchemaBuilder::object()
//!     .property(
//!         "documentId",
//!         SchemaBuilder::string()
//!             .description("The unique identifier of the document")
//!             .required(true),
//!     )
//!     .property("maxResults", SchemaBuilder::integer().minimum(1).default_value(50))
//!     .build();
//!
//! assert_eq!(schema["required"], serde_json::json!(["documentId"]));
//! ```
//!
//! Required-ness is a flag on the child builder that the parent reads when
//! `property` attaches it. Facets that do not apply to a node's kind (for
//! example `items` on a string) are ignored.

use serde_json::{Map, Value};

/// A materialized schema node.
pub type SchemaNode = Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemaKind {
    Object,
    String,
    Number,
    Integer,
    Boolean,
    Array,
}

impl SchemaKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

/// Builder for one schema node.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    kind: SchemaKind,
    facets: Map<String, Value>,
    properties: Map<String, Value>,
    required_properties: Vec<String>,
    required: bool,
}

impl SchemaBuilder {
    fn of(kind: SchemaKind) -> Self {
        Self {
            kind,
            facets: Map::new(),
            properties: Map::new(),
            required_properties: Vec::new(),
            required: false,
        }
    }

    pub fn object() -> Self {
        Self::of(SchemaKind::Object)
    }

    pub fn string() -> Self {
        Self::of(SchemaKind::String)
    }

    pub fn number() -> Self {
        Self::of(SchemaKind::Number)
    }

    pub fn integer() -> Self {
        Self::of(SchemaKind::Integer)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaKind::Boolean)
    }

    pub fn array() -> Self {
        Self::of(SchemaKind::Array)
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.facets
            .insert("description".to_string(), Value::String(text.into()));
        self
    }

    /// Regex constraint (string nodes only).
    pub fn pattern(mut self, regex: impl Into<String>) -> Self {
        if self.kind == SchemaKind::String {
            self.facets
                .insert("pattern".to_string(), Value::String(regex.into()));
        }
        self
    }

    /// Format hint such as `date` (string nodes only).
    pub fn format(mut self, format: impl Into<String>) -> Self {
        if self.kind == SchemaKind::String {
            self.facets
                .insert("format".to_string(), Value::String(format.into()));
        }
        self
    }

    /// Lower bound (number and integer nodes only).
    pub fn minimum(mut self, min: i64) -> Self {
        if self.kind.is_numeric() {
            self.facets.insert("minimum".to_string(), Value::from(min));
        }
        self
    }

    /// Upper bound (number and integer nodes only).
    pub fn maximum(mut self, max: i64) -> Self {
        if self.kind.is_numeric() {
            self.facets.insert("maximum".to_string(), Value::from(max));
        }
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.facets.insert("default".to_string(), value.into());
        self
    }

    pub fn enum_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.facets.insert("enum".to_string(), Value::Array(values));
        self
    }

    /// Item schema (array nodes only).
    pub fn items(mut self, item: SchemaBuilder) -> Self {
        if self.kind == SchemaKind::Array {
            self.facets.insert("items".to_string(), item.build());
        }
        self
    }

    /// Mark this node as required once it is attached to a parent object.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Attach a named child (object nodes only).
    pub fn property(mut self, name: impl Into<String>, child: SchemaBuilder) -> Self {
        if self.kind != SchemaKind::Object {
            return self;
        }
        let name = name.into();
        let child_required = child.required;
        self.properties.insert(name.clone(), child.build());
        if child_required && !self.required_properties.contains(&name) {
            self.required_properties.push(name);
        }
        self
    }

    pub fn build(self) -> SchemaNode {
        let mut schema = self.facets;
        schema.insert(
            "type".to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        if self.kind == SchemaKind::Object {
            schema.insert("properties".to_string(), Value::Object(self.properties));
            if !self.required_properties.is_empty() {
                let required = self
                    .required_properties
                    .into_iter()
                    .map(Value::String)
                    .collect();
                schema.insert("required".to_string(), Value::Array(required));
            }
        }
        Value::Object(schema)
    }
}
