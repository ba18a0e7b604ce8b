//! Brand grouping transform
//!
//! Folds a flat, query-ordered row sequence into one group per brand.
//! Output order is first-occurrence order of the brand in the input, and
//! each group's `models` keeps the input order of that brand's rows. The
//! ordering is tracked explicitly (group vector + index map) rather than
//! relying on any map's iteration order.

use std::collections::HashMap;

use serde::Serialize;

/// One brand with its models, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandGroup<T> {
    pub brand: String,
    pub models: Vec<T>,
}

/// Group `(brand, entry)` pairs by brand, preserving first-occurrence
/// brand order and per-brand entry order.
///
/// Rows are expected pre-sorted by the query's ORDER BY; the transform
/// never re-sorts, it only groups. Duplicate entries under a brand are
/// kept as-is. Empty input yields an empty vector.
pub fn group_by_brand<T>(rows: impl IntoIterator<Item = (String, T)>) -> Vec<BrandGroup<T>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<BrandGroup<T>> = Vec::new();

    for (brand, entry) in rows {
        match index.get(&brand) {
            Some(&slot) => groups[slot].models.push(entry),
            None => {
                index.insert(brand.clone(), groups.len());
                groups.push(BrandGroup {
                    brand,
                    models: vec![entry],
                });
            }
        }
    }

    groups
}
