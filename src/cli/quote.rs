// ABOUTME: CLI quote command - request a price estimate for a brand/series/variant

use super::{OutputFormat, QuoteArgs};
use crate::api::TradeInApiClient;
use crate::models::EstimateRequest;
use anyhow::{Context, Result};
use serde::Serialize;

/// A quote as printed by the command
#[derive(Debug, Serialize)]
pub struct QuoteOutput {
    #[serde(flatten)]
    pub request: EstimateRequest,
    pub price: u32,
}

/// Execute the quote command
pub async fn execute(client: &TradeInApiClient, args: QuoteArgs, format: OutputFormat) -> Result<()> {
    let request = EstimateRequest::new(&args.brand, &args.series, &args.variant);
    let price = client
        .estimate_price(&request)
        .await
        .context("Failed to fetch estimated price")?;
    let quote = QuoteOutput { request, price };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
        OutputFormat::Text => println!("{}", render_text(&quote)),
    }

    Ok(())
}

fn render_text(quote: &QuoteOutput) -> String {
    format!(
        "{} {} ({}): Rs.{}",
        quote.request.brand, quote.request.series, quote.request.variant, quote.price
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> QuoteOutput {
        QuoteOutput {
            request: EstimateRequest::new("Samsung", "Galaxy S22", "128GB/6GB"),
            price: 31_337,
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render_text(&quote()), "Samsung Galaxy S22 (128GB/6GB): Rs.31337");
    }

    #[test]
    fn test_json_is_flat() {
        let json = serde_json::to_value(quote()).unwrap();
        assert_eq!(json["brand"], "Samsung");
        assert_eq!(json["variant"], "128GB/6GB");
        assert_eq!(json["price"], 31_337);
    }
}
