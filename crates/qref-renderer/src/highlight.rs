//! Language highlight registry.
//!
//! Fenced code blocks declare a language tag after the opening delimiter.
//! The registry maps those tags (and their common aliases) to highlighting
//! rules keyed by a canonical identifier. Unrecognized tags are not an
//! error: the renderer falls back to emitting the tag as-is, leaving the
//! block unstyled.

use std::collections::HashMap;

/// Highlighting rules for one language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightRules {
    /// Canonical identifier, emitted as the `language-{id}` class.
    pub id: String,
    /// Display label for UI badges (e.g. "C", "Rust").
    pub label: String,
}

/// Registry mapping language-tag strings to [`HighlightRules`].
///
/// Lookup is case-insensitive and alias-aware: `"js"`, `"JS"`, and
/// `"javascript"` all resolve to the same rules.
#[derive(Clone, Debug, Default)]
pub struct HighlightRegistry {
    rules: HashMap<String, HighlightRules>,
}

impl HighlightRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with the languages the catalog uses.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new()
            .with_language("c", "C", &["h"])
            .with_language("cpp", "C++", &["c++", "cc", "hpp"])
            .with_language("rust", "Rust", &["rs"])
            .with_language("python", "Python", &["py"])
            .with_language("javascript", "JavaScript", &["js"])
            .with_language("typescript", "TypeScript", &["ts"])
            .with_language("bash", "Bash", &["sh", "shell"])
            .with_language("go", "Go", &["golang"])
            .with_language("java", "Java", &[])
    }

    /// Register a language under its canonical id and each alias.
    #[must_use]
    pub fn with_language(mut self, id: &str, label: &str, aliases: &[&str]) -> Self {
        let rules = HighlightRules {
            id: id.to_owned(),
            label: label.to_owned(),
        };
        for alias in aliases {
            self.rules.insert(alias.to_lowercase(), rules.clone());
        }
        self.rules.insert(id.to_lowercase(), rules);
        self
    }

    /// Resolve a fence tag to highlighting rules.
    ///
    /// Returns `None` for unrecognized tags; callers treat that as the
    /// no-op fallback, never as a failure.
    #[must_use]
    pub fn resolve(&self, tag: &str) -> Option<&HighlightRules> {
        self.rules.get(&tag.to_lowercase())
    }
}
