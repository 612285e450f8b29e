//! Shared application state.

use qref_site::ContentRouter;

/// State shared across request handlers.
pub(crate) struct AppState {
    /// Content router over the validated catalog.
    pub(crate) router: ContentRouter,
    /// Language section shown when none is selected.
    pub(crate) default_language: String,
    /// Enable verbose logging of resolution misses.
    pub(crate) verbose: bool,
    /// Application version, folded into `ETag`s.
    pub(crate) version: String,
}
