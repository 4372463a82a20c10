use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use herd_analytics::AnalyticsError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Analytics(AnalyticsError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Analytics(AnalyticsError::Store(_)) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "analytics request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
