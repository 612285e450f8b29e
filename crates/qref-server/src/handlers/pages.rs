//! Pages API endpoint.
//!
//! Resolves a navigation selection through the content router and returns
//! the three-way result as JSON: `ready` (rendered page), `empty` (no topic
//! selected), or `unavailable` (selected topic has no document). The latter
//! two are ordinary 200 responses; a miss is a display state, not an error.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use md5::{Digest, Md5};
use qref_renderer::{TocEntry, escape_html};
use qref_site::{ResolvedContent, Selection};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{language}[/{title}].
#[derive(Serialize)]
struct PageResponse {
    /// Display state: "ready", "empty", or "unavailable".
    state: &'static str,
    /// Page metadata.
    meta: PageMeta,
    /// Table of contents entries (empty unless state is "ready").
    toc: Vec<TocResponse>,
    /// HTML content to display.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
struct PageMeta {
    /// Active language.
    language: String,
    /// Selected topic title, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Menu group of the resolved topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
}

/// Table of contents entry for serialization.
#[derive(Serialize)]
struct TocResponse {
    /// Heading level (1-6).
    level: u8,
    /// Heading text.
    title: String,
    /// Anchor ID.
    id: String,
}

impl From<&TocEntry> for TocResponse {
    fn from(entry: &TocEntry) -> Self {
        Self {
            level: entry.level,
            title: entry.title.clone(),
            id: entry.id.clone(),
        }
    }
}

/// Handle GET /api/pages/{language} (no topic selected).
pub(crate) async fn get_empty_page(
    Path(language): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    require_language(&state, &language)?;

    let selection = Selection::new(language.as_str());
    // With no title set the router always yields the placeholder.
    debug_assert!(matches!(
        state.router.resolve(&selection),
        ResolvedContent::Placeholder
    ));

    Ok(Json(PageResponse {
        state: "empty",
        meta: PageMeta {
            language,
            title: None,
            group: None,
        },
        toc: Vec::new(),
        content: r#"<p class="placeholder">Select a topic from the sidebar.</p>"#.to_owned(),
    }))
}

/// Handle GET /api/pages/{language}/{title}.
pub(crate) async fn get_page(
    Path((language, title)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    require_language(&state, &language)?;

    let selection = Selection::new(language.as_str()).select(title.as_str());
    match state.router.resolve(&selection) {
        ResolvedContent::Page(page) => {
            let etag = compute_etag(&state.version, &page.html);

            if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
                && if_none_match.as_bytes() == etag.as_bytes()
            {
                return Ok(StatusCode::NOT_MODIFIED.into_response());
            }

            let response = PageResponse {
                state: "ready",
                meta: PageMeta {
                    language: page.language,
                    title: Some(page.title),
                    group: Some(page.group),
                },
                toc: page.toc.iter().map(TocResponse::from).collect(),
                content: page.html,
            };

            Ok((
                [
                    (header::ETAG, etag),
                    (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
                ],
                Json(response),
            )
                .into_response())
        }
        ResolvedContent::Unavailable { title } => {
            if state.verbose {
                tracing::warn!(language = %language, title = %title, "Topic unavailable");
            }
            let content = format!(
                r#"<p class="content-unavailable">"{}" is not available yet.</p>"#,
                escape_html(&title)
            );
            Ok(Json(PageResponse {
                state: "unavailable",
                meta: PageMeta {
                    language,
                    title: Some(title),
                    group: None,
                },
                toc: Vec::new(),
                content,
            })
            .into_response())
        }
        // A selection with a title never resolves to the placeholder.
        ResolvedContent::Placeholder => Ok(Json(PageResponse {
            state: "empty",
            meta: PageMeta {
                language,
                title: None,
                group: None,
            },
            toc: Vec::new(),
            content: String::new(),
        })
        .into_response()),
    }
}

/// Reject requests for language sections that do not exist.
fn require_language(state: &AppState, language: &str) -> Result<(), ServerError> {
    if state.router.library().menu_for(language).is_none() {
        return Err(ServerError::UnknownLanguage(language.to_owned()));
    }
    Ok(())
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 truncated to 64 bits (16 hex chars) - sufficient for cache
/// invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use qref_content::ContentLibrary;
    use qref_site::ContentRouter;

    use super::*;

    fn test_state() -> Arc<AppState> {
        let library = ContentLibrary::builder()
            .language("c")
            .group("Basics")
            .topic("Hello World", "## Hello World\n\nBody.")
            .build();
        Arc::new(AppState {
            router: ContentRouter::new(Arc::new(library)),
            default_language: "c".to_owned(),
            verbose: false,
            version: "1.0.0".to_owned(),
        })
    }

    async fn fetch_page(state: &Arc<AppState>, headers: HeaderMap) -> axum::response::Response {
        get_page(
            Path(("c".to_owned(), "Hello World".to_owned())),
            State(Arc::clone(state)),
            headers,
        )
        .await
        .unwrap()
        .into_response()
    }

    #[tokio::test]
    async fn test_matching_if_none_match_returns_not_modified() {
        let state = test_state();

        let first = fetch_page(&state, HeaderMap::new()).await;
        assert_eq!(first.status(), StatusCode::OK);
        let etag = first.headers().get(header::ETAG).unwrap().clone();

        let mut headers = HeaderMap::new();
        headers.insert(header::IF_NONE_MATCH, etag);
        let second = fetch_page(&state, headers).await;

        assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_stale_if_none_match_returns_full_page() {
        let state = test_state();

        let mut headers = HeaderMap::new();
        headers.insert(header::IF_NONE_MATCH, r#""0000000000000000""#.parse().unwrap());
        let response = fetch_page(&state, headers).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "private, max-age=60"
        );
    }

    #[test]
    fn test_compute_etag_includes_version() {
        let etag1 = compute_etag("1.0.0", "content");
        let etag2 = compute_etag("1.0.1", "content");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_includes_content() {
        let etag1 = compute_etag("1.0.0", "content1");
        let etag2 = compute_etag("1.0.0", "content2");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes = 18 total
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_page_response_serialization() {
        let response = PageResponse {
            state: "ready",
            meta: PageMeta {
                language: "c".to_owned(),
                title: Some("Linked Lists".to_owned()),
                group: Some("Data Structures".to_owned()),
            },
            toc: vec![TocResponse {
                level: 2,
                title: "Linked Lists".to_owned(),
                id: "linked-lists".to_owned(),
            }],
            content: "<h2>Linked Lists</h2>".to_owned(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["state"], "ready");
        assert_eq!(json["meta"]["language"], "c");
        assert_eq!(json["meta"]["title"], "Linked Lists");
        assert_eq!(json["toc"][0]["id"], "linked-lists");
    }

    #[test]
    fn test_unavailable_meta_skips_group() {
        let response = PageResponse {
            state: "unavailable",
            meta: PageMeta {
                language: "c".to_owned(),
                title: Some("Skip Lists".to_owned()),
                group: None,
            },
            toc: Vec::new(),
            content: String::new(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["state"], "unavailable");
        assert!(json["meta"].get("group").is_none());
    }
}
