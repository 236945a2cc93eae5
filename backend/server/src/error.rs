use articles::StoreError;
use axum::{
    Json,
    extract::rejection::{BytesRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::validate::FieldError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Article not found")]
    NotFound,

    #[error("Invalid article data")]
    InvalidArticle(Vec<FieldError>),

    #[error("Invalid query parameter")]
    InvalidQuery(Vec<FieldError>),

    /// The request never reached a handler body, e.g. an oversized payload.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Failed to {action}")]
    Internal {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wraps a store failure with the user-facing action that was attempted,
    /// e.g. `"fetch articles"`.
    pub fn internal(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Internal { action, source }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, None),
            AppError::InvalidArticle(errors) | AppError::InvalidQuery(errors) => {
                (StatusCode::BAD_REQUEST, Some(errors.as_slice()))
            }
            AppError::Rejected { status, message } => {
                warn!("Rejected request with {status}: {message}");

                (*status, None)
            }
            AppError::Internal { action, source } => {
                error!("Failed to {action}: {source}");

                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = ErrorBody {
            message: self.to_string(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}
