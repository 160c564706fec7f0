// ABOUTME: Core data models shared by the mock API, the HTTP client and the TUI

pub mod listing;
pub mod options;
pub mod quote;
pub mod selection;

pub use listing::Listing;
pub use options::WizardOptions;
pub use quote::{EstimateRequest, EstimateResponse};
pub use selection::WizardSelection;
