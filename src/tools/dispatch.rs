//! The invocation dispatcher: the single conversion point between tool
//! handlers and the MCP tool-result envelope.
//!
//! Every `tools/call` goes through [`Dispatcher::invoke`]: the name is
//! resolved in the registry, the raw arguments are validated against the
//! tool's schema, the handler runs, and the outcome — success payload or any
//! [`ToolError`] — is wrapped into a [`ToolCallResult`]. No handler failure
//! ever escapes this boundary unshaped, so the transport layer never sees an
//! unhandled fault and the calling agent can branch on `isError` without
//! parsing free text.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;
use crate::tools::ToolRegistry;

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// The envelope returned for every tool invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the invocation resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires fn(&T) -> bool
const fn is_false(b: &bool) -> bool {
    !*b
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error-marked text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }

    /// Returns the first text block, if any. Convenience for tests and
    /// logging.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|c| {
            let ToolContent::Text { text } = c;
            text.as_str()
        })
    }
}

/// Routes named tool calls to handlers and normalizes their outcomes.
///
/// Stateless per call: the dispatcher holds only a shared reference to the
/// read-only registry, so concurrent invocations need no synchronization.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Creates a dispatcher over a registry.
    #[must_use]
    pub const fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the registry this dispatcher routes into.
    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Invokes a tool by name with raw, unvalidated arguments.
    ///
    /// Always returns an envelope: successes carry the handler's payload as
    /// pretty-printed JSON, failures carry the error message with the
    /// envelope marked as an error outcome.
    #[must_use]
    pub fn invoke(&self, name: &str, args: &Value) -> ToolCallResult {
        match self.run(name, args) {
            Ok(payload) => match serde_json::to_string_pretty(&payload) {
                Ok(text) => ToolCallResult::text(text),
                Err(e) => {
                    tracing::error!(tool = name, error = %e, "failed to serialise tool payload");
                    ToolCallResult::error(ToolError::Internal(e.to_string()).to_string())
                }
            },
            Err(e) => {
                tracing::debug!(tool = name, error = %e, "tool invocation failed");
                ToolCallResult::error(e.to_string())
            }
        }
    }

    /// Resolve, validate, invoke.
    fn run(&self, name: &str, args: &Value) -> Result<Value, ToolError> {
        let tool = self
            .registry
            .resolve(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        tool.descriptor.input.validate(args)?;
        tool.call(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::schema::InputSchema;
    use crate::tools::{ToolDescriptor, ToolHandler};
    use serde_json::json;

    fn dispatcher() -> Dispatcher {
        let mut registry = ToolRegistry::new();

        let echo: ToolHandler = Box::new(|args| {
            let message = args
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default();
            Ok(json!({ "echo": message }))
        });
        registry.register(
            ToolDescriptor {
                name: "echo".to_string(),
                description: "Echoes a message".to_string(),
                input: InputSchema::new().required_string("message", "Message to echo"),
            },
            echo,
        );

        let failing: ToolHandler =
            Box::new(|_| Err(ToolError::NotFound("doc_999".to_string())));
        registry.register(
            ToolDescriptor {
                name: "failing".to_string(),
                description: "Always fails".to_string(),
                input: InputSchema::new(),
            },
            failing,
        );

        Dispatcher::new(Arc::new(registry))
    }

    #[test]
    fn successful_invocation_carries_json_payload() {
        let result = dispatcher().invoke("echo", &json!({"message": "hi"}));
        assert!(!result.is_error);

        let text = result.first_text().unwrap();
        let payload: Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["echo"], "hi");
    }

    #[test]
    fn unknown_tool_is_error_envelope() {
        let result = dispatcher().invoke("nope", &Value::Null);
        assert!(result.is_error);
        assert!(result.first_text().unwrap().contains("unknown tool: nope"));
    }

    #[test]
    fn invalid_arguments_is_error_envelope_naming_field() {
        let result = dispatcher().invoke("echo", &json!({}));
        assert!(result.is_error);
        assert!(result.first_text().unwrap().contains("message"));
    }

    #[test]
    fn domain_failure_is_error_envelope_not_panic() {
        let result = dispatcher().invoke("failing", &Value::Null);
        assert!(result.is_error);
        assert!(result
            .first_text()
            .unwrap()
            .contains("document with id 'doc_999' not found"));
    }

    #[test]
    fn error_envelope_serialises_is_error_flag() {
        let result = ToolCallResult::error("boom");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""isError":true"#));

        let ok = ToolCallResult::text("fine");
        let json = serde_json::to_string(&ok).unwrap();
        assert!(!json.contains("isError"));
    }
}
