//! Tool registration and invocation.
//!
//! A [`ToolRegistry`] is built once at startup: each tool registers a
//! [`ToolDescriptor`] (name, description, input schema) together with its
//! handler. The registry is read-only afterwards and is shared by reference
//! with the dispatcher (which routes `tools/call`) and the server's
//! capability negotiation (which lists descriptors for `tools/list`). There
//! is deliberately no global registry value.
//!
//! # Submodules
//!
//! - [`schema`] — typed input schemas and structural validation
//! - [`dispatch`] — the invocation dispatcher and the tool-result envelope
//! - [`handlers`] — the concrete `search` and `fetch` tools

pub mod dispatch;
pub mod handlers;
pub mod schema;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ToolError;
use crate::tools::schema::InputSchema;

/// A tool handler: validated arguments in, success payload or domain failure
/// out. Handlers never see the wire envelope.
pub type ToolHandler = Box<dyn Fn(&Value) -> Result<Value, ToolError> + Send + Sync>;

/// The advertised contract of a tool.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    /// Unique tool name.
    pub name: String,
    /// Human/agent-readable description, including usage sequencing.
    pub description: String,
    /// Structural input contract.
    pub input: InputSchema,
}

/// A registered tool: its descriptor plus its handler.
pub struct RegisteredTool {
    /// The advertised contract.
    pub descriptor: ToolDescriptor,
    handler: ToolHandler,
}

impl RegisteredTool {
    /// Runs the handler with already-validated arguments.
    ///
    /// # Errors
    ///
    /// Propagates the handler's domain failure.
    pub fn call(&self, args: &Value) -> Result<Value, ToolError> {
        (self.handler)(args)
    }
}

impl std::fmt::Debug for RegisteredTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredTool")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// The process-wide table of tools, insertion-ordered.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, RegisteredTool>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool under its descriptor's name.
    ///
    /// Registering the same name twice replaces the earlier entry; the
    /// registry is only ever populated once at startup, so in practice this
    /// does not happen.
    pub fn register(&mut self, descriptor: ToolDescriptor, handler: ToolHandler) {
        self.tools.insert(
            descriptor.name.clone(),
            RegisteredTool {
                descriptor,
                handler,
            },
        );
    }

    /// Resolves a tool by name.
    ///
    /// `None` means the name is not registered, which the dispatcher reports
    /// distinctly from an argument-validation failure on a known tool.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    /// Iterates over all descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values().map(|tool| &tool.descriptor)
    }

    /// Returns the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns `true` if no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
