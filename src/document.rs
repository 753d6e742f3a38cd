//! Document input model and tag extraction
//!
//! Documents arrive from an external feed or store; the engine never
//! fetches or persists them itself. Fields that a feed can legitimately
//! omit are optional, and builders decide per graph kind whether a
//! missing field makes the document malformed.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern compiles"));

static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("mention pattern compiles"));

/// A short annotated document (e.g. a social-media post), immutable
/// once handed to a graph builder.
///
/// `hashtags` and `mentions` hold normalized (lowercased) tokens in
/// order of first appearance, optionally still carrying their `#`/`@`
/// sigil. Duplicates within one document are allowed; aggregation
/// decides whether to deduplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque document identifier
    pub id: String,
    /// Opaque author identifier; absent on malformed feed records
    #[serde(default)]
    pub author_id: Option<String>,
    /// Hashtag tokens; `None` reproduces a null list in the feed
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
    /// Mention tokens; `None` reproduces a null list in the feed
    #[serde(default)]
    pub mentions: Option<Vec<String>>,
}

impl Document {
    /// Build a document directly from raw text, extracting its tags.
    pub fn from_text(id: impl Into<String>, author_id: impl Into<String>, text: &str) -> Self {
        Document {
            id: id.into(),
            author_id: Some(author_id.into()),
            hashtags: Some(extract_hashtags(text)),
            mentions: Some(extract_mentions(text)),
        }
    }
}

/// Extract hashtag tokens (`#` followed by word characters) from text,
/// case-folded, in order of first appearance. Duplicates pass through.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    HASHTAG_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract mention tokens (`@` followed by word characters) from text,
/// case-folded, in order of first appearance. Duplicates pass through.
pub fn extract_mentions(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    MENTION_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Strip a leading `#` or `@` sigil, leaving the bare token.
pub(crate) fn strip_sigil(token: &str) -> &str {
    token
        .strip_prefix('#')
        .or_else(|| token.strip_prefix('@'))
        .unwrap_or(token)
}
