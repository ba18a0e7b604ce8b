//! Car listing endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::db::CarRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{group_by_brand, BrandGroup, PricedModel};

/// GET /api/cars - brands with model names
async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<BrandGroup<String>>>, ApiError> {
    let rows = CarRepo::new(state.db()).list_models().await?;
    let groups = group_by_brand(rows.into_iter().map(|r| (r.brand, r.model)));
    Ok(Json(groups))
}

/// GET /api/cars-prices - brands with models and daily prices
async fn list_cars_with_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<BrandGroup<PricedModel>>>, ApiError> {
    let rows = CarRepo::new(state.db()).list_models_priced().await?;
    let groups = group_by_brand(
        rows.into_iter()
            .map(|r| (r.brand.clone(), PricedModel::from(r))),
    );
    Ok(Json(groups))
}

/// Car routes, nested under /api by the server.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars))
        .route("/cars-prices", get(list_cars_with_prices))
}
