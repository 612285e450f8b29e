//! Languages API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/languages.
#[derive(Serialize)]
pub(crate) struct LanguagesResponse {
    /// Supported language identifiers in display order.
    languages: Vec<String>,
    /// Language shown when none is selected.
    default: String,
}

/// Handle GET /api/languages.
pub(crate) async fn get_languages(State(state): State<Arc<AppState>>) -> Json<LanguagesResponse> {
    let languages = state
        .router
        .library()
        .languages()
        .map(str::to_owned)
        .collect();
    Json(LanguagesResponse {
        languages,
        default: state.default_language.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_response_serialization() {
        let response = LanguagesResponse {
            languages: vec!["c".to_owned()],
            default: "c".to_owned(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["languages"][0], "c");
        assert_eq!(json["default"], "c");
    }
}
