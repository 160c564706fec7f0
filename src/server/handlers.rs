// ABOUTME: Axum handlers for the trade-in mock API

use super::data::CatalogData;
use super::pricing::random_price;
use crate::models::{EstimateRequest, EstimateResponse, Listing};
use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::{debug, info};

pub type SharedCatalog = Arc<CatalogData>;

pub async fn list_phones(State(data): State<SharedCatalog>) -> Json<Vec<Listing>> {
    Json(data.phones.clone())
}

pub async fn list_brands(State(data): State<SharedCatalog>) -> Json<Vec<String>> {
    Json(data.brands.clone())
}

pub async fn list_series(
    State(data): State<SharedCatalog>,
    Path(brand): Path<String>,
) -> Json<Vec<String>> {
    let series = data.series_for(&brand);
    debug!("Series lookup for {:?}: {} entries", brand, series.len());
    Json(series)
}

pub async fn list_variants(State(data): State<SharedCatalog>) -> Json<Vec<String>> {
    Json(data.variants.clone())
}

pub async fn list_time_slots(State(data): State<SharedCatalog>) -> Json<Vec<String>> {
    Json(data.time_slots.clone())
}

pub async fn estimate_price(Json(request): Json<EstimateRequest>) -> Json<EstimateResponse> {
    let price = random_price(&mut rand::thread_rng());
    info!(
        brand = %request.brand,
        series = %request.series,
        variant = %request.variant,
        price,
        "Issued mock estimate"
    );
    Json(EstimateResponse { price })
}
