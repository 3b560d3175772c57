//! docsearch-mcp: an MCP server exposing a document corpus through ranked
//! `search` and `fetch` tools.
//!
//! # Architecture
//!
//! The corpus and the tool registry are built once at startup and shared
//! read-only; every invocation after that is a pure lookup:
//!
//! - **Document store**: immutable, insertion-ordered, indexed by id
//! - **Ranking engine**: deterministic lexical scorer over titles and bodies
//! - **Tool registry**: name → {input schema, handler}, populated at startup
//! - **Dispatcher**: validates arguments, runs handlers, and normalizes all
//!   outcomes into the MCP tool-result envelope
//! - **MCP server**: JSON-RPC 2.0 lifecycle and capability negotiation over
//!   a stdio transport
//!
//! # Modules
//!
//! - [`config`] — configuration loading and validation
//! - [`corpus`] — documents and the document store
//! - [`error`] — error types
//! - [`mcp`] — MCP protocol implementation
//! - [`rank`] — the ranking engine
//! - [`tools`] — tool registry, schemas, dispatcher, and handlers

pub mod config;
pub mod corpus;
pub mod error;
pub mod mcp;
pub mod rank;
pub mod tools;
