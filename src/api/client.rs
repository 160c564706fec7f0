// ABOUTME: Trade-in API client implementation over reqwest

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::models::{EstimateRequest, EstimateResponse, Listing, WizardOptions};
use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TradeInApiClient {
    client: Client,
    base_url: Url,
}

impl TradeInApiClient {
    /// Create a client from the `[api]` config section
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::build(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Create a client for an explicit base URL with the default timeout
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("API base URL cannot carry paths: {base_url}"));
        }

        let client = Client::builder()
            .user_agent(concat!("tradein/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /phones`
    pub async fn fetch_phones(&self) -> Result<Vec<Listing>, ApiError> {
        self.get_json(self.endpoint(&["phones"])).await
    }

    /// `GET /phone-brands`
    pub async fn fetch_brands(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(self.endpoint(&["phone-brands"])).await
    }

    /// `GET /phone-series/:brand`; the brand is percent-encoded as one segment
    pub async fn fetch_series(&self, brand: &str) -> Result<Vec<String>, ApiError> {
        self.get_json(self.endpoint(&["phone-series", brand])).await
    }

    /// `GET /phone-variants`
    pub async fn fetch_variants(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(self.endpoint(&["phone-variants"])).await
    }

    /// `GET /time-slots`
    pub async fn fetch_time_slots(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(self.endpoint(&["time-slots"])).await
    }

    /// Brands, variants and time slots in parallel; fails if any one fails
    pub async fn fetch_wizard_options(&self) -> Result<WizardOptions, ApiError> {
        let (brands, variants, time_slots) = tokio::try_join!(
            self.fetch_brands(),
            self.fetch_variants(),
            self.fetch_time_slots()
        )?;

        Ok(WizardOptions {
            brands,
            variants,
            time_slots,
        })
    }

    /// `POST /estimate-price`
    pub async fn estimate_price(&self, request: &EstimateRequest) -> Result<u32, ApiError> {
        let url = self.endpoint(&["estimate-price"]);
        let endpoint = url.path().to_string();
        debug!(
            "Requesting estimate for {} {} {}",
            request.brand, request.series, request.variant
        );

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        let estimate: EstimateResponse = Self::decode(endpoint, response).await?;
        Ok(estimate.price)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in build(): http(s) URLs always accept path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let endpoint = url.path().to_string();
        debug!("GET {}", endpoint);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        Self::decode(endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: String,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let client = TradeInApiClient::with_base_url("http://localhost:3001").unwrap();
        assert_eq!(
            client.endpoint(&["phone-brands"]).as_str(),
            "http://localhost:3001/phone-brands"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes_brand() {
        let client = TradeInApiClient::with_base_url("https://api.example.com/v1/").unwrap();
        assert_eq!(
            client.endpoint(&["phone-series", "One Plus/X"]).as_str(),
            "https://api.example.com/v1/phone-series/One%20Plus%2FX"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(TradeInApiClient::with_base_url("not a url").is_err());
        assert!(TradeInApiClient::with_base_url("mailto:shop@example.com").is_err());
    }
}
