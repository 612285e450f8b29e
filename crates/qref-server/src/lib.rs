//! HTTP server for the QREF cheat-sheet viewer.
//!
//! Serves the compiled-in catalog over a small JSON API:
//! - `GET /api/languages` — supported language sections
//! - `GET /api/menu/{language}` — sidebar menu structure
//! - `GET /api/pages/{language}` — placeholder state (no topic selected)
//! - `GET /api/pages/{language}/{title}` — rendered topic page
//!
//! The catalog is validated at startup; a menu entry without a backing
//! document aborts the server rather than surfacing later as a blank page.
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum (qref-server)
//!                      │
//!                      └─► ContentRouter (qref-site)
//!                              │
//!                              ├─► ContentLibrary (qref-content)
//!                              └─► MarkdownRenderer (qref-renderer)
//! ```

mod app;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use qref_content::ContentLibrary;
use qref_site::ContentRouter;

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Language section shown when none is selected.
    pub default_language: String,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (for `ETag` computation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            default_language: "c".to_owned(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// Validates the built-in catalog before binding: configuration errors
/// (menu entries without documents) are fatal at startup.
///
/// # Errors
///
/// Returns an error if the catalog is inconsistent or the server fails to
/// start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let library = ContentLibrary::builtin();
    library.validate()?;
    tracing::info!(
        languages = library.languages().count(),
        documents = library.document_count(),
        "Catalog validated"
    );

    let router = ContentRouter::new(Arc::new(library));
    let state = Arc::new(AppState {
        router,
        default_language: config.default_language.clone(),
        verbose: config.verbose,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from QREF config.
#[must_use]
pub fn server_config_from_config(
    config: &qref_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        default_language: config.viewer.default_language.clone(),
        verbose,
        version,
    }
}
