//! Service health endpoint
//!
//! Liveness only: reports the running version and whether a database
//! connection string was supplied. Never touches the store, so it stays
//! green while the listing endpoints 500 on a misconfigured deployment.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// "configured" when a connection string was supplied at startup.
    pub database: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.db().is_configured() {
        "configured"
    } else {
        "unconfigured"
    };
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
