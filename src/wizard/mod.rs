// ABOUTME: Five-step trade-in wizard: brand, series, variant, appointment, estimate

pub mod appointment;
pub mod fetch;
pub mod state;
pub mod step;

pub use appointment::{AppointmentField, AppointmentForm};
pub use fetch::{execute, RequestTicket, WizardOutcome, WizardRequest};
pub use state::WizardState;
pub use step::WizardStep;
