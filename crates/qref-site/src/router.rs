//! Content routing.
//!
//! [`ContentRouter`] maps a [`Selection`] to renderable content. All failure
//! is resolved locally: a miss yields a placeholder variant, never an error,
//! so partially-authored language sections degrade gracefully.

use std::sync::Arc;

use qref_content::ContentLibrary;
use qref_renderer::{HighlightRegistry, MarkdownRenderer, TocEntry};
use serde::Serialize;

use crate::selection::Selection;

/// A topic document rendered for display.
#[derive(Clone, Debug, Serialize)]
pub struct RenderedPage {
    /// Owning language identifier.
    pub language: String,
    /// Menu group the topic is filed under.
    pub group: String,
    /// Topic title.
    pub title: String,
    /// Rendered HTML body.
    pub html: String,
    /// Table of contents entries.
    pub toc: Vec<TocEntry>,
}

/// Result of resolving a selection.
///
/// The three-way split is deliberate: "no selection" and "selected but
/// missing" are distinct display states, and neither is an error.
///
/// Serializes with a `state` discriminant so shells can relay the display
/// state directly.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ResolvedContent {
    /// No topic selected; show the default placeholder.
    Placeholder,
    /// Document found and rendered.
    Page(RenderedPage),
    /// The selected title has no document for the active language.
    Unavailable {
        /// Title that failed to resolve.
        title: String,
    },
}

/// Resolves selections against the content library and renders hits.
///
/// Holds the library and the highlight registry as read-only shared state;
/// resolution is a pure function of the selection.
pub struct ContentRouter {
    library: Arc<ContentLibrary>,
    registry: HighlightRegistry,
}

impl ContentRouter {
    /// Create a router over `library` with the default highlight registry.
    #[must_use]
    pub fn new(library: Arc<ContentLibrary>) -> Self {
        Self {
            library,
            registry: HighlightRegistry::with_defaults(),
        }
    }

    /// Replace the highlight registry.
    #[must_use]
    pub fn with_registry(mut self, registry: HighlightRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The underlying content library.
    #[must_use]
    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    /// Resolve `selection` to displayable content.
    ///
    /// - No active title: [`ResolvedContent::Placeholder`], no lookup made.
    /// - Title found: the document body rendered as a page.
    /// - Title missing: [`ResolvedContent::Unavailable`] — selection and
    ///   document availability are decoupled, so this never escalates.
    #[must_use]
    pub fn resolve(&self, selection: &Selection) -> ResolvedContent {
        let Some(title) = selection.title() else {
            return ResolvedContent::Placeholder;
        };

        match self.library.lookup(selection.language(), title) {
            Some(document) => {
                let result =
                    MarkdownRenderer::new(&self.registry).render_markdown(&document.body);
                ResolvedContent::Page(RenderedPage {
                    language: document.language.clone(),
                    group: document.group.clone(),
                    title: document.title.clone(),
                    html: result.html,
                    toc: result.toc,
                })
            }
            None => {
                tracing::debug!(
                    language = %selection.language(),
                    title = %title,
                    "Selection has no backing document"
                );
                ResolvedContent::Unavailable {
                    title: title.to_owned(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use qref_content::ContentLibrary;

    use super::*;

    fn test_router() -> ContentRouter {
        let library = ContentLibrary::builder()
            .language("c")
            .group("Data Structures")
            .topic(
                "Linked Lists",
                "## Linked Lists\n\n---\n\n```c\nnode *head;\n```\n",
            )
            .planned("Skip Lists")
            .build();
        ContentRouter::new(Arc::new(library))
    }

    #[test]
    fn test_resolve_without_title_is_placeholder() {
        let router = test_router();
        let resolved = router.resolve(&Selection::new("c"));

        assert!(matches!(resolved, ResolvedContent::Placeholder));
    }

    #[test]
    fn test_resolve_placeholder_regardless_of_language() {
        let router = test_router();
        // Even an unknown language yields the placeholder when no title is set.
        let resolved = router.resolve(&Selection::new("cobol"));

        assert!(matches!(resolved, ResolvedContent::Placeholder));
    }

    #[test]
    fn test_resolve_found_renders_page() {
        let router = test_router();
        let selection = Selection::new("c").select("Linked Lists");

        let ResolvedContent::Page(page) = router.resolve(&selection) else {
            panic!("expected a rendered page");
        };
        assert_eq!(page.title, "Linked Lists");
        assert_eq!(page.group, "Data Structures");
        assert!(page.html.contains(r#"<h2 id="linked-lists">Linked Lists</h2>"#));
        assert!(page.html.contains(r#"class="language-c""#));
    }

    #[test]
    fn test_resolve_missing_is_unavailable_not_error() {
        let router = test_router();
        let selection = Selection::new("c").select("Nonexistent Topic");

        let resolved = router.resolve(&selection);
        assert!(matches!(
            resolved,
            ResolvedContent::Unavailable { ref title } if title == "Nonexistent Topic"
        ));
    }

    #[test]
    fn test_planned_menu_entry_resolves_as_unavailable() {
        let router = test_router();
        // "Skip Lists" is in the menu but has no document yet.
        let selection = Selection::new("c").select("Skip Lists");

        assert!(matches!(
            router.resolve(&selection),
            ResolvedContent::Unavailable { .. }
        ));
    }

    #[test]
    fn test_resolved_content_serializes_with_state_tag() {
        let router = test_router();

        let page = router.resolve(&Selection::new("c").select("Linked Lists"));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["state"], "page");
        assert_eq!(json["title"], "Linked Lists");
        assert_eq!(json["toc"][0]["id"], "linked-lists");

        let miss = router.resolve(&Selection::new("c").select("Skip Lists"));
        let json = serde_json::to_value(&miss).unwrap();
        assert_eq!(json["state"], "unavailable");
        assert_eq!(json["title"], "Skip Lists");

        let placeholder = router.resolve(&Selection::new("c"));
        let json = serde_json::to_value(&placeholder).unwrap();
        assert_eq!(json["state"], "placeholder");
    }

    #[test]
    fn test_miss_then_recover() {
        let router = test_router();
        let selection = Selection::new("c").select("Nonexistent Topic");
        assert!(matches!(
            router.resolve(&selection),
            ResolvedContent::Unavailable { .. }
        ));

        // A subsequent valid selection recovers with no residual state.
        let selection = selection.select("Linked Lists");
        assert!(matches!(router.resolve(&selection), ResolvedContent::Page(_)));
    }
}
