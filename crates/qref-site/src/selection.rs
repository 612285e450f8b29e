//! Navigation selection state.

/// The currently active (language, title) pair driving what is displayed.
///
/// Created at startup with a default language and no title. Transitions are
/// pure: [`select`](Self::select) and [`clear`](Self::clear) return a new
/// selection and leave the original untouched. The selection is never
/// persisted.
///
/// No validation ties the title to the active language's menu; an invalid
/// title simply resolves as "unavailable" in the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    language: String,
    title: Option<String>,
}

impl Selection {
    /// Selection for `language` with no topic chosen.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            title: None,
        }
    }

    /// New selection with `title` active; the language is kept.
    #[must_use]
    pub fn select(&self, title: impl Into<String>) -> Self {
        Self {
            language: self.language.clone(),
            title: Some(title.into()),
        }
    }

    /// New selection with no topic chosen; the language is kept.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self {
            language: self.language.clone(),
            title: None,
        }
    }

    /// Active language identifier.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Active topic title, if one is chosen.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
