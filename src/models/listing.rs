// ABOUTME: Listing data model representing a phone shown in the catalog grid

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub brand: String,
    pub model: String,
    /// Absolute URL or a server-relative path under `/images`
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Listing {
    pub fn new(id: u32, brand: &str, model: &str, image_url: &str) -> Self {
        Self {
            id,
            brand: brand.to_string(),
            model: model.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// "Brand Model" label used by tiles and the wizard header
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Whether the image is served by the mock API itself
    pub fn is_local_image(&self) -> bool {
        self.image_url.starts_with('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_field_uses_wire_name() {
        let json = r#"{"id":2,"brand":"Samsung","model":"Galaxy S21","image":"/images/samsung.png"}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.image_url, "/images/samsung.png");
        assert!(listing.is_local_image());

        let back = serde_json::to_value(&listing).unwrap();
        assert!(back.get("image").is_some());
        assert!(back.get("image_url").is_none());
    }

    #[test]
    fn test_display_name() {
        let listing = Listing::new(1, "Apple", "iPhone 12", "https://example.com/a.png");
        assert_eq!(listing.display_name(), "Apple iPhone 12");
        assert!(!listing.is_local_image());
    }
}
