//! Car repository - the two fixed read queries
//!
//! Both queries order by brand then model; the grouping transform relies
//! on that ordering and never re-sorts.

use crate::models::{CarRow, PricedCarRow};

use super::{Db, DbError};

/// Read-only repository over the `cars` table.
pub struct CarRepo<'a> {
    db: &'a Db,
}

impl<'a> CarRepo<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// All listings as brand/model pairs.
    pub async fn list_models(&self) -> Result<Vec<CarRow>, DbError> {
        let pool = self.db.acquire().await?;
        let rows = sqlx::query_as::<_, CarRow>(
            "SELECT brand, model FROM cars ORDER BY brand, model",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// All listings with their (nullable) daily price.
    pub async fn list_models_priced(&self) -> Result<Vec<PricedCarRow>, DbError> {
        let pool = self.db.acquire().await?;
        let rows = sqlx::query_as::<_, PricedCarRow>(
            "SELECT brand, model, price FROM cars ORDER BY brand, model",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database with a `cars` table.
    // Run with: SQL_CONNECTION_STRING=postgres://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn listings_come_back_ordered_by_brand_then_model() {
        let url = std::env::var("SQL_CONNECTION_STRING").expect("SQL_CONNECTION_STRING required");
        let db = Db::new(Some(url));
        let rows = CarRepo::new(&db).list_models().await.expect("query failed");

        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.brand.as_str(), r.model.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
