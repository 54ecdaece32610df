use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::charts::ChartError;
use crate::http::pages;
use crate::models::AnalysisError;

/// API error with HTTP status code, rendered as an HTML error page.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: String
}

impl ApiError {
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: status.canonical_reason().unwrap_or("ERROR").to_uppercase().replace(' ', "_")
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Html(pages::error_page(self.status, &self.message));

        (self.status, body).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        let constructor = match &error {
            AnalysisError::MissingColumns(_) | AnalysisError::DuplicateColumns(_) | AnalysisError::Csv(_) => ApiError::bad_request,
            AnalysisError::EmptyResult => ApiError::unprocessable_entity,
            AnalysisError::Overflow { .. } => ApiError::internal_error
        };

        constructor(error.to_string())
    }
}

impl From<ChartError> for ApiError {
    fn from(error: ChartError) -> Self {
        ApiError::internal_error(error.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        ApiError::with_status(error.status(), format!("Invalid form submission: {}", error.body_text()))
    }
}

/// Convert anyhow::Error to ApiError
impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        let error = match error.downcast::<AnalysisError>() {
            Ok(analysis_error) => return analysis_error.into(),
            Err(error) => error
        };

        match error.downcast::<ChartError>() {
            Ok(chart_error) => chart_error.into(),
            Err(error) => ApiError::internal_error(error.to_string())
        }
    }
}
