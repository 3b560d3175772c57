//! Error types for docsearch-mcp.
//!
//! Three error families exist, matching the layers of the server:
//!
//! - [`ConfigError`] — configuration file problems, fatal at startup
//! - [`CorpusError`] — corpus loading problems, fatal at startup
//! - [`ToolError`] — per-invocation failures, converted into error-marked
//!   tool envelopes by the dispatcher and never fatal

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while loading a document corpus from disk.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Corpus file could not be read.
    #[error("failed to read corpus file: {path}")]
    ReadError {
        /// Path to the corpus file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Corpus file could not be parsed as a document array.
    #[error("failed to parse corpus file: {path}")]
    ParseError {
        /// Path to the corpus file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A document has an empty id.
    #[error("document at index {index} has an empty id")]
    EmptyId {
        /// Zero-based position of the offending document in the file.
        index: usize,
    },

    /// Two documents share the same id.
    #[error("duplicate document id: {id}")]
    DuplicateId {
        /// The duplicated id.
        id: String,
    },
}

/// Failures produced while invoking a tool.
///
/// All variants are client-visible: the dispatcher renders them into
/// error-marked tool envelopes. None of them should ever crash the process.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The requested tool name is not registered.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments failed structural validation against the tool's schema.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The referenced document does not exist. A client error, not a fault.
    #[error("document with id '{0}' not found")]
    NotFound(String),

    /// An unexpected failure inside a handler.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn corpus_duplicate_id_display() {
        let error = CorpusError::DuplicateId {
            id: "doc_1".to_string(),
        };
        assert_eq!(error.to_string(), "duplicate document id: doc_1");
    }

    #[test]
    fn tool_not_found_display() {
        let error = ToolError::NotFound("doc_999".to_string());
        assert_eq!(error.to_string(), "document with id 'doc_999' not found");
    }

    #[test]
    fn tool_unknown_display() {
        let error = ToolError::UnknownTool("frobnicate".to_string());
        assert_eq!(error.to_string(), "unknown tool: frobnicate");
    }
}
