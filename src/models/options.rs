// ABOUTME: Option lists the wizard loads once per session

/// Brands, variants and time slots, fetched together when the wizard opens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardOptions {
    pub brands: Vec<String>,
    pub variants: Vec<String>,
    pub time_slots: Vec<String>,
}
