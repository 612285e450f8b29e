//! Topic document and menu structure types.

use serde::Serialize;

/// One unit of displayable content, identified by (language, title).
///
/// The body is markdown authored once at build time and never mutated at
/// runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicDocument {
    /// Identifier of the owning language section (e.g. "c").
    pub language: String,
    /// Menu group the topic is filed under (e.g. "Data Structures").
    pub group: String,
    /// Human-readable topic label, unique within a (language, group) pair.
    pub title: String,
    /// Markdown body.
    pub body: String,
}

/// Ordered grouping of topic titles defining sidebar navigation for one
/// language.
///
/// The group order and the title order within each group are the display
/// order. The union of all titles is the set of valid topic selections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    /// Group heading shown in the sidebar.
    pub name: String,
    /// Topic titles in display order.
    pub topics: Vec<String>,
}
