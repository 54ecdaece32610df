use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::engine::AnalysisEngine;
use crate::http::handlers::{analyze_handler, health_handler, index_handler};

pub const PATH_INDEX: &str = "/";
pub const PATH_ANALYZE: &str = "/analyze";
pub const PATH_HEALTH: &str = "/health";

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: AnalysisEngine
}

pub struct AppServer {
    pub router: Router,
    pub state: Arc<AppState>
}

impl AppServer {
    pub fn new(config: &AppConfig) -> Self {
        let state = Arc::new(AppState { engine: config.engine() });

        AppServer {
            router: Router::new()
                .route(PATH_INDEX, get(index_handler))
                .route(PATH_ANALYZE, post(analyze_handler))
                .route(PATH_HEALTH, get(health_handler))
                .layer(DefaultBodyLimit::max(config.max_upload_bytes))
                .with_state(state.clone()),
            state
        }
    }
}
