//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::livestatus::{DecodeError, FilterError, QueryError};

/// Errors a request handler can end with.
///
/// Internal causes are logged when the response is built and never sent to
/// the client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{kind} query failed: {source}")]
    Query {
        kind: &'static str,
        #[source]
        source: QueryError,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    BadKey(String),
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        ApiError::BadKey(format!("Invalid key: {}", err))
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Query { .. } => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to query the monitoring engine".to_string(),
                )
            }
            ApiError::Decode(e) => {
                tracing::error!("Livestatus reply does not match the column contract: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read the monitoring engine reply".to_string(),
                )
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadKey(msg) => {
                tracing::debug!("Rejected request key: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        let body = ErrorBody {
            code: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
