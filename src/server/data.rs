// ABOUTME: In-memory mock data served by the trade-in API

use crate::models::Listing;
use std::collections::HashMap;

/// Read-only catalog shared by every handler
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub phones: Vec<Listing>,
    pub brands: Vec<String>,
    pub series: HashMap<String, Vec<String>>,
    pub variants: Vec<String>,
    pub time_slots: Vec<String>,
}

impl CatalogData {
    /// The fixed data set the storefront ships with
    pub fn mock() -> Self {
        let phones = vec![
            Listing::new(
                1,
                "Apple",
                "iPhone 12",
                "https://w7.pngwing.com/pngs/186/863/png-transparent-apple-logo-apple-logo-computer-wallpaper-silhouette.png",
            ),
            Listing::new(2, "Samsung", "Galaxy S21", "/images/samsung.png"),
            Listing::new(3, "Google", "Pixel 5", "https://example.com/pixel5.jpg"),
        ];

        let series = [
            ("Apple", &["iPhone 12", "iPhone 13", "iPhone 14"] as &[&str]),
            ("Samsung", &["Galaxy S21", "Galaxy S22", "Galaxy S23"] as &[&str]),
            ("Google", &["Pixel 6", "Pixel 7"] as &[&str]),
            ("OnePlus", &["OnePlus 9", "OnePlus 10"] as &[&str]),
        ]
        .into_iter()
        .map(|(brand, names)| (brand.to_string(), to_strings(names)))
        .collect();

        Self {
            phones,
            brands: to_strings(&["Apple", "Samsung", "Google", "OnePlus"]),
            series,
            variants: to_strings(&["64GB/4GB", "128GB/6GB", "256GB/8GB"]),
            time_slots: to_strings(&["10:00 AM", "12:00 PM", "2:00 PM", "4:00 PM", "6:00 PM"]),
        }
    }

    /// Series for a brand; unknown brands get an empty list, never an error
    pub fn series_for(&self, brand: &str) -> Vec<String> {
        self.series.get(brand).cloned().unwrap_or_default()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_brand_has_series() {
        let data = CatalogData::mock();
        for brand in &data.brands {
            assert!(!data.series_for(brand).is_empty(), "no series for {brand}");
        }
    }

    #[test]
    fn test_unknown_brand_is_empty() {
        let data = CatalogData::mock();
        assert!(data.series_for("Nokia").is_empty());
        // Lookup is exact, like the original object-key lookup
        assert!(data.series_for("samsung").is_empty());
    }
}
