//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/languages", get(handlers::languages::get_languages))
        .route("/api/menu/{language}", get(handlers::menu::get_menu))
        .route("/api/pages/{language}", get(handlers::pages::get_empty_page))
        .route(
            "/api/pages/{language}/{title}",
            get(handlers::pages::get_page),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
