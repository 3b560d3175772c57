//! The document corpus: an immutable, in-memory collection of documents.
//!
//! The store is populated exactly once at startup, either from the built-in
//! sample corpus or from a JSON corpus file, and is never mutated afterwards.
//! Because it is read-only, it can be shared across concurrent invocations
//! without any locking.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// Provenance metadata attached to a fetched document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Where the document came from (e.g. "sample_data").
    pub source: String,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last-update timestamp, RFC 3339.
    pub updated_at: String,
}

/// A single document in the corpus.
///
/// Documents are immutable after load. The `id` is opaque and unique within
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique, stable, opaque identifier.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Full body text.
    pub text: String,
    /// Source reference.
    pub url: String,
    /// Optional per-document provenance. When absent, the store's default
    /// metadata is used for fetch responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

/// An immutable, insertion-ordered document store.
///
/// Lookup by id is O(1); full scans iterate in the order documents were
/// loaded, which is the tiebreak order used by the ranking engine.
#[derive(Debug)]
pub struct DocumentStore {
    documents: IndexMap<String, Document>,
    default_metadata: DocumentMetadata,
}

impl DocumentStore {
    /// Builds a store from a sequence of documents.
    ///
    /// # Errors
    ///
    /// Returns an error if any document has an empty id or if two documents
    /// share an id.
    pub fn from_documents(
        documents: Vec<Document>,
        default_metadata: DocumentMetadata,
    ) -> Result<Self, CorpusError> {
        let mut map = IndexMap::with_capacity(documents.len());

        for (index, doc) in documents.into_iter().enumerate() {
            if doc.id.is_empty() {
                return Err(CorpusError::EmptyId { index });
            }
            if map.contains_key(&doc.id) {
                return Err(CorpusError::DuplicateId { id: doc.id });
            }
            map.insert(doc.id.clone(), doc);
        }

        Ok(Self {
            documents: map,
            default_metadata,
        })
    }

    /// Loads a corpus from a JSON file containing an array of documents.
    ///
    /// Documents loaded this way get default metadata stamped with the load
    /// time, so fetch responses stay bit-identical for the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// documents fail id validation.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CorpusError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let documents: Vec<Document> =
            serde_json::from_str(&contents).map_err(|e| CorpusError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let loaded_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        let default_metadata = DocumentMetadata {
            source: "corpus_file".to_string(),
            created_at: loaded_at.clone(),
            updated_at: loaded_at,
        };

        Self::from_documents(documents, default_metadata)
    }

    /// Builds the built-in sample corpus.
    ///
    /// # Panics
    ///
    /// Never panics: the sample documents have hardcoded unique ids.
    #[must_use]
    pub fn sample() -> Self {
        let default_metadata = DocumentMetadata {
            source: "sample_data".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        };

        match Self::from_documents(sample_documents(), default_metadata) {
            Ok(store) => store,
            // Unreachable: sample ids are literal and unique.
            Err(e) => unreachable!("sample corpus is malformed: {e}"),
        }
    }

    /// Looks up a document by id.
    ///
    /// A missing id is a normal outcome (the caller decides whether it is a
    /// domain error), so this returns `Option` rather than `Result`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Iterates over all documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Returns the number of documents in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Returns the metadata used for documents that carry none of their own.
    #[must_use]
    pub const fn default_metadata(&self) -> &DocumentMetadata {
        &self.default_metadata
    }
}

/// The built-in sample documents.
#[allow(clippy::too_many_lines)]
fn sample_documents() -> Vec<Document> {
    let doc = |id: &str, title: &str, text: &str, url: &str| Document {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        url: url.to_string(),
        metadata: None,
    };

    vec![
        doc(
            "doc_1",
            "Next.js Performance Best Practices",
            "Next.js offers several optimization techniques to improve application \
             performance. Key strategies include: Image optimization using next/image \
             component, automatic code splitting for faster page loads, static site \
             generation (SSG) for pre-rendered pages, server-side rendering (SSR) for \
             dynamic content, and implementing proper caching strategies. The framework \
             also provides built-in analytics and Core Web Vitals monitoring to track \
             performance metrics.",
            "https://nextjs.org/docs/performance",
        ),
        doc(
            "doc_2",
            "React Server Components Guide",
            "React Server Components represent a new paradigm in React development, \
             allowing components to render on the server and stream to the client. This \
             approach reduces bundle size, improves initial page load times, and enables \
             better SEO. Server Components can fetch data directly without client-side \
             API calls, reducing network waterfalls. They work seamlessly with Client \
             Components, which handle interactivity and browser-only features like event \
             handlers and state management.",
            "https://react.dev/blog/2023/03/22/react-labs-what-we-have-been-working-on-march-2023#react-server-components",
        ),
        doc(
            "doc_3",
            "TypeScript Advanced Types",
            "TypeScript's advanced type system includes powerful features like \
             conditional types, mapped types, and template literal types. Conditional \
             types allow type selection based on conditions, while mapped types \
             transform existing types by iterating over their properties. Template \
             literal types enable string manipulation at the type level. Utility types \
             like Pick, Omit, and Record provide common type transformations. These \
             features enable creating robust, type-safe APIs and better developer \
             experiences.",
            "https://typescriptlang.org/docs/handbook/2/types-from-types.html",
        ),
        doc(
            "doc_4",
            "Vercel Deployment Strategies",
            "Vercel provides multiple deployment strategies for modern web \
             applications. The platform supports automatic deployments from Git \
             repositories, preview deployments for pull requests, and custom domains \
             with SSL certificates. Edge Functions enable serverless computing at the \
             edge for improved performance. The platform also offers analytics, \
             monitoring, and A/B testing capabilities. Integration with popular \
             frameworks like Next.js, Nuxt, and SvelteKit provides optimized deployment \
             experiences.",
            "https://vercel.com/docs/concepts/deployments/overview",
        ),
        doc(
            "doc_5",
            "Model Context Protocol (MCP) Specification",
            "The Model Context Protocol (MCP) is an open standard that enables secure \
             connections between AI applications and data sources. MCP allows AI models \
             to access external tools, databases, and APIs while maintaining security \
             and user control. The protocol supports various transport mechanisms \
             including HTTP and WebSocket connections. Key features include tool \
             invocation, resource access, and prompt templates. MCP servers can be \
             built in any language and integrated with different AI platforms.",
            "https://spec.modelcontextprotocol.io/",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> DocumentMetadata {
        DocumentMetadata {
            source: "test".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn sample_corpus_has_five_documents() {
        let store = DocumentStore::sample();
        assert_eq!(store.len(), 5);
        assert!(!store.is_empty());
    }

    #[test]
    fn sample_corpus_preserves_order() {
        let store = DocumentStore::sample();
        let ids: Vec<_> = store.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["doc_1", "doc_2", "doc_3", "doc_4", "doc_5"]);
    }

    #[test]
    fn get_known_id() {
        let store = DocumentStore::sample();
        let doc = store.get("doc_5").unwrap();
        assert_eq!(doc.title, "Model Context Protocol (MCP) Specification");
    }

    #[test]
    fn get_unknown_id_is_none_not_panic() {
        let store = DocumentStore::sample();
        assert!(store.get("doc_999").is_none());
    }

    #[test]
    fn reject_duplicate_ids() {
        let docs = vec![
            Document {
                id: "a".to_string(),
                title: String::new(),
                text: String::new(),
                url: String::new(),
                metadata: None,
            },
            Document {
                id: "a".to_string(),
                title: String::new(),
                text: String::new(),
                url: String::new(),
                metadata: None,
            },
        ];
        let err = DocumentStore::from_documents(docs, meta()).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateId { id } if id == "a"));
    }

    #[test]
    fn reject_empty_id() {
        let docs = vec![Document {
            id: String::new(),
            title: String::new(),
            text: String::new(),
            url: String::new(),
            metadata: None,
        }];
        let err = DocumentStore::from_documents(docs, meta()).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyId { index: 0 }));
    }

    #[test]
    fn load_corpus_from_file() {
        use std::io::Write as _;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"id": "d1", "title": "One", "text": "first", "url": "https://example.com/1"}}]"#
        )
        .unwrap();

        let store = DocumentStore::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("d1").unwrap().title, "One");
        assert_eq!(store.default_metadata().source, "corpus_file");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = DocumentStore::load(Path::new("/nonexistent/corpus.json")).unwrap_err();
        assert!(matches!(err, CorpusError::ReadError { .. }));
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        use std::io::Write as _;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "not json").unwrap();

        let err = DocumentStore::load(&path).unwrap_err();
        assert!(matches!(err, CorpusError::ParseError { .. }));
    }
}
