//! Content resolution: turn a CLI argument into an immutable piece of text.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// A single piece of text under evaluation.
///
/// Immutable once resolved. Derived views (word count, lines, lowercased
/// text) are cheap to recompute, so checks ask for what they need instead
/// of sharing precomputed state.
#[derive(Debug, Clone)]
pub struct Content {
    text: String,
    lower: String,
}

impl Content {
    /// Build content from raw text.
    ///
    /// # Errors
    /// [`Error::EmptyContent`] when the text is empty or all-whitespace.
    pub fn new(text: impl Into<String>, label: &'static str) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::EmptyContent(label));
        }
        let lower = text.to_lowercase();
        Ok(Self { text, lower })
    }

    /// Resolve a CLI argument that is either a filesystem path or inline
    /// text. An existing readable file wins; anything else is treated as
    /// literal content.
    ///
    /// # Errors
    /// [`Error::EmptyContent`] when the resolved content is blank.
    pub fn resolve(arg: &str, label: &'static str) -> Result<Self> {
        let path = Path::new(arg);
        if path.is_file() {
            match std::fs::read_to_string(path) {
                Ok(text) => {
                    debug!(path = %path.display(), bytes = text.len(), "content read from file");
                    return Self::new(text, label);
                }
                Err(err) => {
                    debug!(path = %path.display(), %err, "unreadable file, using argument as inline text");
                }
            }
        }
        Self::new(arg, label)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The full text, lowercased once at construction.
    #[must_use]
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Count of whitespace-delimited tokens.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// The first `n` lines (of the trimmed text) joined and lowercased —
    /// the hook section of persuasive copy.
    #[must_use]
    pub fn opening(&self, n: usize) -> String {
        self.text
            .trim()
            .lines()
            .take(n)
            .collect::<Vec<_>>()
            .join("\n")
            .to_lowercase()
    }

    /// True when the lowercased full text contains any of the given
    /// keywords. Keywords are expected to be lowercase already.
    #[must_use]
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }
}
