//! Domain models: row records, response shapes, and the grouping transform

pub mod car;
pub mod grouping;

pub use car::{CarRow, PricedCarRow, PricedModel};
pub use grouping::{group_by_brand, BrandGroup};
