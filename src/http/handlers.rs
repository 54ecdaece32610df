use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::Html;
use tracing::error;

use crate::http::app_server::AppState;
use crate::http::error::ApiError;
use crate::http::pages;
use crate::http::upload::SalesUpload;

/// Handler for GET / - Upload form
pub async fn index_handler() -> Html<String> {
    Html(pages::upload_form_page())
}

/// Handler for GET /health
pub async fn health_handler() -> &'static str {
    "ok"
}

/// Handler for POST /analyze - Analyze an uploaded sales CSV
#[tracing::instrument(
    name = "handler_analyze",
    skip(state, multipart),
    fields(
        sales.month = tracing::field::Empty,
        sales.file_name = tracing::field::Empty,
        sales.size_bytes = tracing::field::Empty,
    )
)]
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let upload = SalesUpload::from_multipart(multipart).await?;

    tracing::Span::current()
        .record("sales.month", upload.month.as_str())
        .record("sales.file_name", upload.file_name.as_deref().unwrap_or(""))
        .record("sales.size_bytes", upload.csv_text.len());

    let report = state.engine
        .run(upload.csv_text, upload.month)
        .await
        .map_err(|failure| {
            let api_error = ApiError::from(failure);
            error!("Sales analysis failed: {api_error}");
            api_error
        })?;

    Ok(Html(pages::results_page(&report)))
}
