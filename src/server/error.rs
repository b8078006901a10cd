use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analyzer::AnalyzerError;
use crate::scoring::ValidationError;

/// Errors returned by the HTTP handlers, rendered as `{"detail": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Well-formed request whose content is unacceptable (400)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body missing, unparsable, or not matching the expected shape (422)
    #[error("{0}")]
    Schema(String),

    /// Body could not be read at all, e.g. over the size limit (413)
    #[error("{1}")]
    Body(StatusCode, String),

    /// Anything that went wrong while scoring (500)
    #[error("Error analyzing sentiment: {0}")]
    Analysis(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Schema(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(status, _) => *status,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(err) => ApiError::Body(err.status(), err.body_text()),
            other => ApiError::Schema(other.body_text()),
        }
    }
}

impl From<AnalyzerError> for ApiError {
    fn from(err: AnalyzerError) -> Self {
        ApiError::Analysis(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "analysis failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
