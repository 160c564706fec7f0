// ABOUTME: Accumulated wizard choices, filled in one step at a time

use super::EstimateRequest;

/// Everything the user has picked so far in the current wizard session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardSelection {
    pub brand: Option<String>,
    pub series: Option<String>,
    pub variant: Option<String>,
    pub date: Option<String>,
    pub time_slot: Option<String>,
    pub estimated_price: Option<u32>,
}

impl WizardSelection {
    /// Both halves of the appointment are set
    pub fn has_appointment(&self) -> bool {
        self.date.is_some() && self.time_slot.is_some()
    }

    /// Build the estimate body once brand, series and variant are known
    pub fn estimate_request(&self) -> Option<EstimateRequest> {
        match (&self.brand, &self.series, &self.variant) {
            (Some(brand), Some(series), Some(variant)) => {
                Some(EstimateRequest::new(brand, series, variant))
            }
            _ => None,
        }
    }

    /// One-line summary shown next to the price
    pub fn summary(&self) -> String {
        format!(
            "Brand: {} / Series: {} / Variant: {} / Appointment: {} at {}",
            self.brand.as_deref().unwrap_or(""),
            self.series.as_deref().unwrap_or(""),
            self.variant.as_deref().unwrap_or(""),
            self.date.as_deref().unwrap_or(""),
            self.time_slot.as_deref().unwrap_or(""),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let selection = WizardSelection {
            brand: Some("Samsung".to_string()),
            series: Some("Galaxy S22".to_string()),
            variant: Some("128GB/6GB".to_string()),
            date: Some("2024-05-01".to_string()),
            time_slot: Some("2:00 PM".to_string()),
            estimated_price: Some(42_000),
        };
        assert_eq!(
            selection.summary(),
            "Brand: Samsung / Series: Galaxy S22 / Variant: 128GB/6GB / Appointment: 2024-05-01 at 2:00 PM"
        );
    }

    #[test]
    fn test_estimate_request_needs_all_three() {
        let mut selection = WizardSelection {
            brand: Some("Google".to_string()),
            series: Some("Pixel 7".to_string()),
            ..Default::default()
        };
        assert!(selection.estimate_request().is_none());

        selection.variant = Some("64GB/4GB".to_string());
        assert_eq!(
            selection.estimate_request(),
            Some(EstimateRequest::new("Google", "Pixel 7", "64GB/4GB"))
        );
    }

    #[test]
    fn test_appointment_needs_both_fields() {
        let mut selection = WizardSelection::default();
        selection.date = Some("2024-05-01".to_string());
        assert!(!selection.has_appointment());
        selection.time_slot = Some("10:00 AM".to_string());
        assert!(selection.has_appointment());
    }
}
