//! API error type with IntoResponse
//!
//! Every upstream failure crosses the handler boundary here: it is logged
//! once and converted to a 500 with the fixed error envelope. Nothing is
//! retried and no partial result is ever returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DbError;

/// Handler-boundary error.
#[derive(Debug)]
pub enum ApiError {
    /// Configuration, connection, or query failure (500, logged).
    Database(DbError),
}

/// Fixed error envelope: `{"error": "Database error", "details": ...}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    details: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Database(e) => {
                tracing::error!("DB error: {}", e);
                let body = ErrorBody {
                    error: "Database error",
                    details: e.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
