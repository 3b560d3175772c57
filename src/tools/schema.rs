//! Typed input schemas for tools.
//!
//! Each tool declares an explicit structural contract: named parameters with
//! a primitive type, a required/optional marker, and a description. The
//! dispatcher checks raw arguments against this contract before a handler
//! ever runs, so handlers never see a missing or mistyped field. The same
//! contract renders to a JSON Schema object for `tools/list`.

use serde_json::{json, Map, Value};

use crate::error::ToolError;

/// Primitive parameter types supported by tool schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// A JSON string.
    String,
    /// A JSON integer.
    Integer,
    /// A JSON boolean.
    Boolean,
}

impl ParamType {
    /// The JSON Schema type name.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    /// Checks whether a JSON value has this type.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// A single declared parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Expected primitive type.
    pub kind: ParamType,
    /// Whether the parameter must be present.
    pub required: bool,
    /// Human/agent-readable description.
    pub description: String,
}

/// The structural input contract of a tool.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    params: Vec<ParamSpec>,
}

impl InputSchema {
    /// Creates an empty schema (a tool taking no arguments).
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Adds a required string parameter.
    #[must_use]
    pub fn required_string(mut self, name: &str, description: &str) -> Self {
        self.params.push(ParamSpec {
            name: name.to_string(),
            kind: ParamType::String,
            required: true,
            description: description.to_string(),
        });
        self
    }

    /// Adds an arbitrary parameter.
    #[must_use]
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    /// Returns the declared parameters in declaration order.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Validates raw arguments against this schema.
    ///
    /// `Null` is treated as an empty argument object, since clients may omit
    /// the `arguments` field entirely for tools without required parameters.
    /// Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidArguments`] naming every offending field:
    /// required fields that are missing and present fields of the wrong type.
    pub fn validate(&self, args: &Value) -> Result<(), ToolError> {
        let empty;
        let object = match args {
            Value::Null => {
                empty = Map::new();
                &empty
            }
            Value::Object(map) => map,
            other => {
                return Err(ToolError::InvalidArguments(format!(
                    "arguments must be a JSON object, got {}",
                    json_type_name(other)
                )));
            }
        };

        let mut problems = Vec::new();

        for spec in &self.params {
            match object.get(&spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        problems.push(format!("missing required parameter: {}", spec.name));
                    }
                }
                Some(value) if !spec.kind.matches(value) => {
                    problems.push(format!(
                        "parameter '{}' must be a {}, got {}",
                        spec.name,
                        spec.kind.type_name(),
                        json_type_name(value)
                    ));
                }
                Some(_) => {}
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ToolError::InvalidArguments(problems.join("; ")))
        }
    }

    /// Renders this schema as a JSON Schema object for `tools/list`.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for spec in &self.params {
            properties.insert(
                spec.name.clone(),
                json!({
                    "type": spec.kind.type_name(),
                    "description": spec.description,
                }),
            );
            if spec.required {
                required.push(Value::String(spec.name.clone()));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }

        Value::Object(schema)
    }
}

/// A human-readable name for a JSON value's type, for error messages.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_schema() -> InputSchema {
        InputSchema::new().required_string("query", "Search query string")
    }

    #[test]
    fn valid_arguments_pass() {
        let schema = query_schema();
        assert!(schema.validate(&json!({"query": "hello"})).is_ok());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let schema = query_schema();
        assert!(schema
            .validate(&json!({"query": "hello", "extra": 42}))
            .is_ok());
    }

    #[test]
    fn missing_required_field_names_it() {
        let schema = query_schema();
        let err = schema.validate(&json!({})).unwrap_err();
        let ToolError::InvalidArguments(msg) = err else {
            panic!("expected InvalidArguments");
        };
        assert!(msg.contains("missing required parameter: query"));
    }

    #[test]
    fn null_field_counts_as_missing() {
        let schema = query_schema();
        let err = schema.validate(&json!({"query": null})).unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn wrong_type_names_field_and_types() {
        let schema = query_schema();
        let err = schema.validate(&json!({"query": 42})).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("query"));
        assert!(msg.contains("string"));
        assert!(msg.contains("number"));
    }

    #[test]
    fn null_arguments_treated_as_empty_object() {
        let schema = InputSchema::new();
        assert!(schema.validate(&Value::Null).is_ok());

        // But required parameters still fail against Null.
        let err = query_schema().validate(&Value::Null).unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn non_object_arguments_rejected() {
        let schema = query_schema();
        let err = schema.validate(&json!(["a", "b"])).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn multiple_problems_reported_together() {
        let schema = InputSchema::new()
            .required_string("query", "q")
            .required_string("scope", "s");
        let err = schema.validate(&json!({"query": 1})).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("query"));
        assert!(msg.contains("scope"));
    }

    #[test]
    fn json_schema_shape() {
        let schema = query_schema().param(ParamSpec {
            name: "limit".to_string(),
            kind: ParamType::Integer,
            required: false,
            description: "Optional cap".to_string(),
        });

        let rendered = schema.to_json_schema();
        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["properties"]["query"]["type"], "string");
        assert_eq!(rendered["properties"]["limit"]["type"], "integer");
        assert_eq!(rendered["required"], json!(["query"]));
    }

    #[test]
    fn empty_schema_omits_required_list() {
        let rendered = InputSchema::new().to_json_schema();
        assert!(rendered.get("required").is_none());
    }
}
