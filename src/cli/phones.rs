// ABOUTME: CLI phones command - print the catalog listings
//
// Fetches GET /phones from the configured API and prints a table or JSON

use super::OutputFormat;
use crate::api::TradeInApiClient;
use crate::models::Listing;
use anyhow::{Context, Result};

/// Execute the phones command
pub async fn execute(client: &TradeInApiClient, format: OutputFormat) -> Result<()> {
    let phones = client
        .fetch_phones()
        .await
        .with_context(|| format!("Failed to fetch phones from {}", client.base_url()))?;

    match format {
        OutputFormat::Json => output_json(&phones)?,
        OutputFormat::Text => print!("{}", render_text(&phones)),
    }

    Ok(())
}

/// Output listings as JSON, in the same shape the API serves
fn output_json(phones: &[Listing]) -> Result<()> {
    let json = serde_json::to_string_pretty(phones)?;
    println!("{json}");
    Ok(())
}

/// Listings as a text table
fn render_text(phones: &[Listing]) -> String {
    if phones.is_empty() {
        return "No phones found.\n".to_string();
    }

    let mut out = format!("{:<4} {:<12} {:<20} IMAGE\n", "ID", "BRAND", "MODEL");
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for phone in phones {
        let image = if phone.image_url.is_empty() { "-" } else { &phone.image_url };
        out.push_str(&format!(
            "{:<4} {:<12} {:<20} {}\n",
            phone.id, phone.brand, phone.model, image
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_table() {
        let phones = vec![
            Listing::new(1, "Apple", "iPhone 12", ""),
            Listing::new(2, "Samsung", "Galaxy S21", "/images/samsung.png"),
        ];
        let text = render_text(&phones);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("iPhone 12") && lines[2].ends_with('-'));
        assert!(lines[3].ends_with("/images/samsung.png"));
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "No phones found.\n");
    }
}
