// ABOUTME: HTTP client for the trade-in API
// Typed wrappers over the catalog, option-list and estimate endpoints

pub mod client;
pub mod error;

pub use client::TradeInApiClient;
pub use error::ApiError;
