//! Database layer - lazily-connected pool handle and car queries
//!
//! The `Db` handle is built once at startup and shared through axum state.
//! The pool itself connects on first use: the connection string may be
//! absent at startup, in which case every request fails with a
//! configuration error rather than the process refusing to start.

pub mod cars;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

pub use cars::CarRepo;

/// Maximum connections for the pool. Kept low; this service runs two
/// read queries and nothing else.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database error taxonomy surfaced to the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Required connection string absent from the environment.
    #[error("SQL_CONNECTION_STRING is missing")]
    Configuration,

    /// Store unreachable or credentials rejected while connecting.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// Store-side failure executing a query.
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Owned handle to the (lazily established) connection pool.
pub struct Db {
    connection_string: Option<String>,
    pool: OnceCell<PgPool>,
}

impl Db {
    /// Wrap an optional connection string. `None` or empty defers the
    /// failure to `acquire`.
    pub fn new(connection_string: Option<String>) -> Self {
        Self {
            connection_string: connection_string.filter(|s| !s.is_empty()),
            pool: OnceCell::new(),
        }
    }

    /// Whether a connection string was supplied. Never touches the store.
    pub fn is_configured(&self) -> bool {
        self.connection_string.is_some()
    }

    /// Hand back the pool, connecting on first use.
    ///
    /// On a failed connect the cell stays empty, so the next request
    /// attempts a fresh connect. Once established, the same pool is
    /// reused for the life of the process.
    pub async fn acquire(&self) -> Result<&PgPool, DbError> {
        self.pool
            .get_or_try_init(|| async {
                let url = self
                    .connection_string
                    .as_deref()
                    .ok_or(DbError::Configuration)?;

                PgPoolOptions::new()
                    .max_connections(DEFAULT_MAX_CONNECTIONS)
                    .connect(url)
                    .await
                    .map_err(DbError::Connection)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acquire_without_connection_string_is_a_configuration_error() {
        let db = Db::new(None);
        let err = db.acquire().await.expect_err("must not connect");
        assert!(matches!(err, DbError::Configuration));
        assert_eq!(err.to_string(), "SQL_CONNECTION_STRING is missing");
    }

    #[tokio::test]
    async fn empty_connection_string_is_treated_as_missing() {
        let db = Db::new(Some(String::new()));
        let err = db.acquire().await.expect_err("must not connect");
        assert!(matches!(err, DbError::Configuration));
    }

    // Integration tests require a real database.
    // Run with: SQL_CONNECTION_STRING=postgres://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("SQL_CONNECTION_STRING").expect("SQL_CONNECTION_STRING required");
        let db = Db::new(Some(url));
        let pool = db.acquire().await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
