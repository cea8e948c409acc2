use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{context}: {source}")]
    DataAccess {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Wraps a query failure with a label naming the operation that issued it.
    pub fn data_access(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::DataAccess { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DataAccess { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg) | AppError::NotFound(msg) => {
                warn!(status = %self.status_code(), message = %msg, "Request rejected");
            }
            AppError::DataAccess { context, source } => {
                error!(error = ?source, context = %context, "Database error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        self.log();

        // The message is diagnostic only; clients should branch on status.
        error_response(self.to_string(), status)
    }
}
