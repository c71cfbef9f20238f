//! HTTP surface of LuminaTranslate
//!
//! `POST /api/translate` takes a multipart upload (`file`, `direction`) and
//! answers with the translated document as a plain-text attachment. Handlers
//! hold no mutable state: every request is independent.

pub mod config;
pub mod routes;


use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use lumina_translate::mt::MachineTranslator;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; every translation then fails
    /// with a configuration error
    pub translator: Option<Arc<dyn MachineTranslator>>,
}

impl AppState {
    pub fn new(translator: impl MachineTranslator + 'static) -> Self {
        Self {
            translator: Some(Arc::new(translator)),
        }
    }

    pub fn unconfigured() -> Self {
        Self { translator: None }
    }

    /// Gemini-backed state. A missing key is logged and leaves the server
    /// running in the unconfigured state.
    pub fn from_config(config: &ServerConfig) -> Self {
        match config.gemini_from_env() {
            Ok(provider) => Self::new(provider),
            Err(e) => {
                error!("Translation provider unavailable: {}", e);
                Self::unconfigured()
            }
        }
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::serve_index))
        .route("/api/health", get(routes::health))
        .route("/api/translate", post(routes::translate_document))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
