//! Deterministic lexical ranking over the document corpus.
//!
//! The scorer is a pure function of the query and the corpus: no randomness,
//! no external state. For a fixed (query, corpus) pair the output is
//! identical on every call, which makes both the `search` tool and these
//! functions trivially testable.
//!
//! # Scoring
//!
//! The query is lowercased and split on whitespace into a set of terms. Each
//! term contributes +2 if it occurs as a substring of the lowercased title
//! and +1 if it occurs as a substring of the lowercased body. Documents
//! scoring zero are dropped; the rest are ordered by descending score with
//! ties broken by corpus order, and capped at [`RankPolicy::max_results`].

use crate::corpus::Document;

/// Tunable ranking policy.
///
/// The cutoff and preview length are policy, not protocol: clients see only
/// their effect on result counts and preview lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankPolicy {
    /// Maximum number of ranked results returned.
    pub max_results: usize,
    /// Maximum preview length, in characters, before truncation.
    pub preview_chars: usize,
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self {
            max_results: 5,
            preview_chars: 200,
        }
    }
}

/// Marker appended to previews cut short by [`truncate_preview`].
pub const ELLIPSIS: &str = "...";

/// Scores and orders documents against a query.
///
/// Returns at most `policy.max_results` documents with strictly positive
/// scores, descending by score. Ties keep the iteration order of `documents`
/// (the corpus insertion order). An empty or whitespace-only query yields an
/// empty result, not an error.
pub fn rank<'a, I>(query: &str, documents: I, policy: &RankPolicy) -> Vec<(&'a Document, u32)>
where
    I: Iterator<Item = &'a Document>,
{
    let mut terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    terms.sort_unstable();
    terms.dedup();

    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&Document, u32)> = documents
        .filter_map(|doc| {
            let score = score_document(doc, &terms);
            (score > 0).then_some((doc, score))
        })
        .collect();

    // Stable sort: equal scores keep corpus order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(policy.max_results);
    scored
}

/// Computes a single document's score against a set of lowercased terms.
fn score_document(doc: &Document, terms: &[String]) -> u32 {
    let title = doc.title.to_lowercase();
    let text = doc.text.to_lowercase();

    terms
        .iter()
        .map(|term| {
            let mut score = 0;
            if title.contains(term.as_str()) {
                score += 2;
            }
            if text.contains(term.as_str()) {
                score += 1;
            }
            score
        })
        .sum()
}

/// Truncates a body text to a bounded preview.
///
/// Text longer than `preview_chars` characters is cut at that many characters
/// with [`ELLIPSIS`] appended; shorter text is returned verbatim. The cut is
/// on character boundaries, so multi-byte text never splits mid-codepoint.
#[must_use]
pub fn truncate_preview(text: &str, preview_chars: usize) -> String {
    match text.char_indices().nth(preview_chars) {
        Some((byte_offset, _)) => {
            let mut preview = text[..byte_offset].to_string();
            preview.push_str(ELLIPSIS);
            preview
        }
        None => text.to_string(),
    }
}
