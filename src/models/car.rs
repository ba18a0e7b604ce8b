//! Car row records and response entry shapes

use serde::Serialize;
use sqlx::FromRow;

/// Row from the names-only listing query.
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub brand: String,
    pub model: String,
}

/// Row from the priced listing query. `price` is nullable in the store
/// and stays nullable here.
#[derive(Debug, Clone, FromRow)]
pub struct PricedCarRow {
    pub brand: String,
    pub model: String,
    pub price: Option<f64>,
}

/// Model entry in the priced response. A missing price serializes as
/// `null`, not zero and not an omitted field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedModel {
    pub name: String,
    #[serde(rename = "pricePerDay")]
    pub price_per_day: Option<f64>,
}

impl From<PricedCarRow> for PricedModel {
    fn from(row: PricedCarRow) -> Self {
        Self {
            name: row.model,
            price_per_day: row.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BrandGroup;
    use serde_json::json;

    #[test]
    fn names_only_group_serializes_models_as_bare_strings() {
        let group = BrandGroup {
            brand: "Honda".to_string(),
            models: vec!["Civic".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&group).unwrap(),
            json!({"brand": "Honda", "models": ["Civic"]})
        );
    }

    #[test]
    fn priced_model_uses_camel_case_price_field() {
        let entry = PricedModel {
            name: "Corolla".to_string(),
            price_per_day: Some(45.0),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"name": "Corolla", "pricePerDay": 45.0})
        );
    }

    #[test]
    fn missing_price_passes_through_as_null() {
        let entry = PricedModel {
            name: "Corolla".to_string(),
            price_per_day: None,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"name": "Corolla", "pricePerDay": null})
        );
    }
}
