//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Load the template set and build the upstream client
//! - Serve static assets under /public
//! - Bind server to listener, run with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tera::Tera;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::upstream::{CocktailApiClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<CocktailApiClient>,
    pub templates: Arc<Tera>,
}

/// Errors raised while constructing the server.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The template directory failed to load or a template failed to
    /// parse.
    #[error("failed to load templates: {0}")]
    Templates(#[from] tera::Error),

    /// The upstream client could not be built from its configuration.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// HTTP server for the cocktail browser.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        let upstream = CocktailApiClient::new(&config.upstream)?;
        let templates = Tera::new(&format!("{}/**/*.html", config.templates.dir))?;

        let state = AppState {
            upstream: Arc::new(upstream),
            templates: Arc::new(templates),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/random", get(handlers::random_drink))
            .route("/cocktail/{id}", get(handlers::drink_by_id))
            .route("/search-name", get(handlers::search_by_name))
            .route("/search-ingredient", get(handlers::search_by_ingredient))
            .route("/categories", get(handlers::categories))
            .route("/category/{name}", get(handlers::category))
            .nest_service("/public", ServeDir::new(&config.static_files.dir))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
