// ABOUTME: Request/response bodies for the estimate-price endpoint

use serde::{Deserialize, Serialize};

/// Body of `POST /estimate-price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub brand: String,
    pub series: String,
    pub variant: String,
}

impl EstimateRequest {
    pub fn new(brand: &str, series: &str, variant: &str) -> Self {
        Self {
            brand: brand.to_string(),
            series: series.to_string(),
            variant: variant.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResponse {
    pub price: u32,
}
