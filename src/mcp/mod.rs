//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the document corpus tools to AI-agent clients over JSON-RPC 2.0
//! on a stdio transport. The layering is deliberately thin:
//!
//! ```text
//! stdin/stdout ──▶ transport ──▶ server (lifecycle) ──▶ dispatcher ──▶ tools
//! ```
//!
//! The server owns the lifecycle (initialize → initialized → running) and
//! capability negotiation; everything tool-shaped is delegated to
//! [`crate::tools`].

pub mod protocol;
pub mod server;
pub mod transport;
