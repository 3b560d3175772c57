//! The concrete `search` and `fetch` tools.
//!
//! Both handlers are pure reads over the shared [`DocumentStore`]; neither
//! has side effects, so repeated calls with the same arguments return
//! identical payloads.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::corpus::{DocumentMetadata, DocumentStore};
use crate::error::ToolError;
use crate::rank::{rank, truncate_preview, RankPolicy};
use crate::tools::schema::InputSchema;
use crate::tools::{ToolDescriptor, ToolHandler, ToolRegistry};

/// The payload returned by `search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Ranked hits, best first. Possibly empty; that is a success.
    pub results: Vec<SearchResult>,
}

/// A ranked search hit: a projection of a document with a bounded preview.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Document id, usable with `fetch`.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Body preview, truncated per the rank policy.
    pub text: String,
    /// Source reference.
    pub url: String,
}

/// The full payload returned by `fetch`.
#[derive(Debug, Clone, Serialize)]
pub struct FetchResult {
    /// Document id.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Full body text.
    pub text: String,
    /// Source reference.
    pub url: String,
    /// Provenance metadata.
    pub metadata: DocumentMetadata,
}

/// Builds the registry of document tools over a shared store.
///
/// Called once at startup; the resulting registry is immutable thereafter.
#[must_use]
pub fn document_tools(store: Arc<DocumentStore>, policy: RankPolicy) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(
        ToolDescriptor {
            name: "search".to_string(),
            description: "Search for documents using keyword search. This tool searches \
                          through the document store to find relevant matches. Returns a \
                          list of search results with basic information. Use the fetch \
                          tool to get complete document content."
                .to_string(),
            input: InputSchema::new().required_string(
                "query",
                "Search query string. Terms are matched against document titles and bodies.",
            ),
        },
        search_handler(Arc::clone(&store), policy),
    );

    registry.register(
        ToolDescriptor {
            name: "fetch".to_string(),
            description: "Retrieve complete document content by ID for detailed analysis \
                          and citation. This tool fetches the full document content from \
                          the document store. Use this after finding relevant documents \
                          with the search tool to get complete information for analysis \
                          and proper citation."
                .to_string(),
            input: InputSchema::new().required_string(
                "id",
                "Document ID from search results (e.g. doc_1, doc_2, etc.)",
            ),
        },
        fetch_handler(store),
    );

    registry
}

/// Runs the ranking engine and projects the survivors into previews.
///
/// An empty result list is a success, not a failure: a client may
/// legitimately search with a query that matches nothing.
fn search_handler(store: Arc<DocumentStore>, policy: RankPolicy) -> ToolHandler {
    Box::new(move |args| {
        // Presence and type were validated by the dispatcher.
        let query = args.get("query").and_then(Value::as_str).unwrap_or_default();

        let results: Vec<SearchResult> = rank(query, store.iter(), &policy)
            .into_iter()
            .map(|(doc, _score)| SearchResult {
                id: doc.id.clone(),
                title: doc.title.clone(),
                text: truncate_preview(&doc.text, policy.preview_chars),
                url: doc.url.clone(),
            })
            .collect();

        tracing::debug!(query, hits = results.len(), "search completed");

        serde_json::to_value(SearchResponse { results })
            .map_err(|e| ToolError::Internal(e.to_string()))
    })
}

/// Looks up a document by id and returns it in full, with metadata.
fn fetch_handler(store: Arc<DocumentStore>) -> ToolHandler {
    Box::new(move |args| {
        let id = args.get("id").and_then(Value::as_str).unwrap_or_default();

        if id.is_empty() {
            return Err(ToolError::InvalidArguments(
                "parameter 'id' must not be empty".to_string(),
            ));
        }

        let doc = store
            .get(id)
            .ok_or_else(|| ToolError::NotFound(id.to_string()))?;

        let result = FetchResult {
            id: doc.id.clone(),
            title: doc.title.clone(),
            text: doc.text.clone(),
            url: doc.url.clone(),
            metadata: doc
                .metadata
                .clone()
                .unwrap_or_else(|| store.default_metadata().clone()),
        };

        serde_json::to_value(result).map_err(|e| ToolError::Internal(e.to_string()))
    })
}
