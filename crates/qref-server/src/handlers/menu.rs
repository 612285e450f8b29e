//! Menu API endpoint.
//!
//! Returns the sidebar menu structure for one language section.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use qref_content::MenuGroup;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/menu/{language}.
#[derive(Serialize)]
pub(crate) struct MenuResponse {
    /// Language the menu belongs to.
    language: String,
    /// Menu groups in display order.
    groups: Vec<MenuGroup>,
}

/// Handle GET /api/menu/{language}.
pub(crate) async fn get_menu(
    Path(language): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<MenuResponse>, ServerError> {
    let groups = state
        .router
        .library()
        .menu_for(&language)
        .ok_or_else(|| ServerError::UnknownLanguage(language.clone()))?
        .to_vec();

    Ok(Json(MenuResponse { language, groups }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_response_serialization() {
        let response = MenuResponse {
            language: "c".to_owned(),
            groups: vec![MenuGroup {
                name: "Basics".to_owned(),
                topics: vec!["Hello World".to_owned()],
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["language"], "c");
        assert_eq!(json["groups"][0]["name"], "Basics");
        assert_eq!(json["groups"][0]["topics"][0], "Hello World");
    }
}
