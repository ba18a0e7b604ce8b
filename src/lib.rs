//! cars-api: read-only HTTP API over a relational car listing table
//!
//! Two GET endpoints return rental listings grouped by brand, one with
//! model names only and one with daily prices. Rows arrive pre-sorted
//! from the store; the grouping transform preserves first-occurrence
//! brand order and per-brand row order.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::ServerConfig;
pub use http::{run_server, AppState};
