//! HTTP surface for the company profile generator: the form page, the JSON
//! endpoints it edits through, and the generate/preview/download cycle.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use brandbook_gemini::client::GeminiClient;

use crate::config::ServerConfig;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/health", get(routes::health::health_check))
        .route("/preview", get(routes::page::preview))
        .route("/download", get(routes::download::download_pdf))
        .route(
            "/api/profile",
            get(routes::profile::get_profile)
                .put(routes::profile::replace_profile)
                .patch(routes::profile::update_field),
        )
        .route("/api/slides", post(routes::slides::add_slide))
        .route(
            "/api/slides/{id}",
            put(routes::slides::replace_slide)
                .patch(routes::slides::update_slide)
                .delete(routes::slides::delete_slide),
        )
        .route(
            "/api/logo",
            post(routes::logo::upload_logo)
                .delete(routes::logo::clear_logo)
                .layer(DefaultBodyLimit::max(routes::logo::UPLOAD_BODY_LIMIT)),
        )
        .route("/api/generate", post(routes::generate::generate))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> eyre::Result<()> {
    let addr = config.bind_addr()?;
    let gemini = GeminiClient::new(config.gemini)?;
    if !gemini.has_credential() {
        tracing::warn!("GEMINI_API_KEY is not set; submissions will fail until it is");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, model = %gemini.config().model, "brandbook listening");
    axum::serve(listener, app(AppState::new(gemini))).await?;
    Ok(())
}
