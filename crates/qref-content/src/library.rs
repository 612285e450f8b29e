//! Static document store with menu-backed lookup.
//!
//! [`ContentLibrary`] indexes topic documents per language for O(1) title
//! lookups and carries the per-language menu structure. It is assembled once
//! through [`LibraryBuilder`] and treated as read-only afterwards.

use std::collections::HashMap;

use crate::document::{MenuGroup, TopicDocument};

/// Configuration errors detected by [`ContentLibrary::validate`].
///
/// These indicate an inconsistent catalog and are fatal at startup. They are
/// never produced by runtime lookups, which report misses as `None`.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A menu entry references a title with no matching document.
    #[error("menu entry \"{title}\" in group \"{group}\" has no document for language \"{language}\"")]
    MissingDocument {
        /// Language whose menu references the title.
        language: String,
        /// Menu group containing the entry.
        group: String,
        /// Title with no backing document.
        title: String,
    },

    /// The same title appears twice within one (language, group) pair.
    #[error("duplicate menu entry \"{title}\" in group \"{group}\" for language \"{language}\"")]
    DuplicateTitle {
        /// Language whose menu contains the duplicate.
        language: String,
        /// Menu group containing the duplicate.
        group: String,
        /// Duplicated title.
        title: String,
    },
}

/// Static mapping from (language, title) to topic documents, plus the menu
/// structure for each language.
///
/// Loaded once at process start and never mutated. Lookup is a pure function
/// over the mapping; a miss is reported as `None`, never as an error, since
/// menu entries and document availability are intentionally decoupled.
pub struct ContentLibrary {
    /// Documents indexed by language, then by title.
    documents: HashMap<String, HashMap<String, TopicDocument>>,
    /// Languages in registration order with their menu structures.
    menus: Vec<(String, Vec<MenuGroup>)>,
}

impl ContentLibrary {
    /// Start assembling a library.
    #[must_use]
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::default()
    }

    /// The built-in catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        crate::catalog::builtin()
    }

    /// Look up the document for `(language, title)`.
    ///
    /// Pure read with no side effects. Returns `None` when either the
    /// language or the title is unknown.
    #[must_use]
    pub fn lookup(&self, language: &str, title: &str) -> Option<&TopicDocument> {
        self.documents.get(language)?.get(title)
    }

    /// Menu structure for `language`, in display order.
    ///
    /// Returns `None` for unknown languages.
    #[must_use]
    pub fn menu_for(&self, language: &str) -> Option<&[MenuGroup]> {
        self.menus
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, groups)| groups.as_slice())
    }

    /// Supported language identifiers in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.menus.iter().map(|(code, _)| code.as_str())
    }

    /// Total number of documents across all languages.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.documents.values().map(HashMap::len).sum()
    }

    /// Check the catalog invariant: every title in every language's menu has
    /// exactly one backing document, and no title repeats within a group.
    ///
    /// Intended to run at startup so that authoring mistakes fail fast
    /// instead of surfacing as blank pages.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContentError`] found.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (language, groups) in &self.menus {
            for group in groups {
                let mut seen: Vec<&str> = Vec::with_capacity(group.topics.len());
                for title in &group.topics {
                    if seen.contains(&title.as_str()) {
                        return Err(ContentError::DuplicateTitle {
                            language: language.clone(),
                            group: group.name.clone(),
                            title: title.clone(),
                        });
                    }
                    seen.push(title);

                    if self.lookup(language, title).is_none() {
                        return Err(ContentError::MissingDocument {
                            language: language.clone(),
                            group: group.name.clone(),
                            title: title.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`ContentLibrary`].
///
/// Sections are declared in display order: [`language`](Self::language)
/// opens a language, [`group`](Self::group) opens a menu group within it,
/// and [`topic`](Self::topic) registers a menu entry together with its
/// document. [`planned`](Self::planned) registers a menu entry whose
/// document has not been authored yet; such entries resolve as "unavailable"
/// at runtime and fail [`ContentLibrary::validate`].
#[derive(Default)]
pub struct LibraryBuilder {
    documents: HashMap<String, HashMap<String, TopicDocument>>,
    menus: Vec<(String, Vec<MenuGroup>)>,
}

impl LibraryBuilder {
    /// Open a new language section.
    #[must_use]
    pub fn language(mut self, code: &str) -> Self {
        self.menus.push((code.to_owned(), Vec::new()));
        self
    }

    /// Open a new menu group in the current language.
    ///
    /// # Panics
    ///
    /// Panics if called before [`language`](Self::language).
    #[must_use]
    pub fn group(mut self, name: &str) -> Self {
        let (_, groups) = self
            .menus
            .last_mut()
            .expect("group() requires a preceding language()");
        groups.push(MenuGroup {
            name: name.to_owned(),
            topics: Vec::new(),
        });
        self
    }

    /// Register a topic: a menu entry in the current group plus its document.
    ///
    /// # Panics
    ///
    /// Panics if called before [`group`](Self::group).
    #[must_use]
    pub fn topic(mut self, title: &str, body: &str) -> Self {
        let language = self.push_menu_entry(title);
        let group = self.current_group_name();
        let document = TopicDocument {
            language: language.clone(),
            group,
            title: title.to_owned(),
            body: body.to_owned(),
        };
        self.documents
            .entry(language)
            .or_default()
            .insert(title.to_owned(), document);
        self
    }

    /// Register a menu entry whose document is not authored yet.
    ///
    /// # Panics
    ///
    /// Panics if called before [`group`](Self::group).
    #[must_use]
    pub fn planned(mut self, title: &str) -> Self {
        let _ = self.push_menu_entry(title);
        self
    }

    /// Finish assembly.
    #[must_use]
    pub fn build(self) -> ContentLibrary {
        ContentLibrary {
            documents: self.documents,
            menus: self.menus,
        }
    }

    /// Append `title` to the current group, returning the current language.
    fn push_menu_entry(&mut self, title: &str) -> String {
        let (language, groups) = self
            .menus
            .last_mut()
            .expect("topic() requires a preceding group()");
        let group = groups
            .last_mut()
            .expect("topic() requires a preceding group()");
        group.topics.push(title.to_owned());
        language.clone()
    }

    fn current_group_name(&self) -> String {
        self.menus
            .last()
            .and_then(|(_, groups)| groups.last())
            .map(|group| group.name.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_library() -> ContentLibrary {
        ContentLibrary::builder()
            .language("c")
            .group("Basics")
            .topic("Hello World", "## Hello World\n\nBody.")
            .topic("Pointers", "## Pointers\n\nBody.")
            .group("Data Structures")
            .topic("Linked Lists", "## Linked Lists\n\nBody.")
            .build()
    }

    #[test]
    fn test_lookup_found() {
        let library = sample_library();
        let doc = library.lookup("c", "Linked Lists").unwrap();

        assert_eq!(doc.language, "c");
        assert_eq!(doc.group, "Data Structures");
        assert_eq!(doc.title, "Linked Lists");
        assert!(doc.body.contains("## Linked Lists"));
    }

    #[test]
    fn test_lookup_unknown_title() {
        let library = sample_library();
        assert!(library.lookup("c", "Nonexistent Topic").is_none());
    }

    #[test]
    fn test_lookup_unknown_language() {
        let library = sample_library();
        assert!(library.lookup("zig", "Hello World").is_none());
    }

    #[test]
    fn test_menu_preserves_order() {
        let library = sample_library();
        let menu = library.menu_for("c").unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].name, "Basics");
        assert_eq!(menu[0].topics, vec!["Hello World", "Pointers"]);
        assert_eq!(menu[1].name, "Data Structures");
        assert_eq!(menu[1].topics, vec!["Linked Lists"]);
    }

    #[test]
    fn test_menu_for_unknown_language() {
        let library = sample_library();
        assert!(library.menu_for("zig").is_none());
    }

    #[test]
    fn test_languages_in_registration_order() {
        let library = ContentLibrary::builder()
            .language("c")
            .group("Basics")
            .topic("Hello World", "body")
            .language("rust")
            .group("Basics")
            .topic("Hello World", "body")
            .build();

        let languages: Vec<_> = library.languages().collect();
        assert_eq!(languages, vec!["c", "rust"]);
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_library().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_planned_entry() {
        let library = ContentLibrary::builder()
            .language("c")
            .group("Basics")
            .topic("Hello World", "body")
            .planned("Data Types")
            .build();

        let err = library.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingDocument { ref title, .. } if title == "Data Types"
        ));
    }

    #[test]
    fn test_validate_reports_duplicate_title() {
        let library = ContentLibrary::builder()
            .language("c")
            .group("Basics")
            .topic("Hello World", "body")
            .topic("Hello World", "other body")
            .build();

        let err = library.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateTitle { ref title, .. } if title == "Hello World"
        ));
    }

    #[test]
    fn test_planned_entry_still_listed_in_menu() {
        let library = ContentLibrary::builder()
            .language("c")
            .group("Basics")
            .planned("Data Types")
            .build();

        let menu = library.menu_for("c").unwrap();
        assert_eq!(menu[0].topics, vec!["Data Types"]);
        assert!(library.lookup("c", "Data Types").is_none());
    }

    #[test]
    fn test_document_count() {
        assert_eq!(sample_library().document_count(), 3);
    }
}
