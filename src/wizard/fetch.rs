// ABOUTME: Requests the wizard issues and the outcomes routed back to it

use crate::api::{ApiError, TradeInApiClient};
use crate::models::{EstimateRequest, WizardOptions};
use tracing::debug;

/// Identifies one issued request: the wizard session it belongs to and its
/// position within that session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub generation: u64,
    pub seq: u64,
}

/// A network call the wizard wants made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardRequest {
    Options { ticket: RequestTicket },
    Series { ticket: RequestTicket, brand: String },
    Estimate { ticket: RequestTicket, request: EstimateRequest },
}

impl WizardRequest {
    pub fn ticket(&self) -> RequestTicket {
        match self {
            Self::Options { ticket } | Self::Series { ticket, .. } | Self::Estimate { ticket, .. } => {
                *ticket
            }
        }
    }
}

/// Result of a [`WizardRequest`], echoing its ticket
#[derive(Debug)]
pub enum WizardOutcome {
    Options {
        ticket: RequestTicket,
        result: Result<WizardOptions, ApiError>,
    },
    Series {
        ticket: RequestTicket,
        brand: String,
        result: Result<Vec<String>, ApiError>,
    },
    Estimate {
        ticket: RequestTicket,
        result: Result<u32, ApiError>,
    },
}

impl WizardOutcome {
    pub fn ticket(&self) -> RequestTicket {
        match self {
            Self::Options { ticket, .. }
            | Self::Series { ticket, .. }
            | Self::Estimate { ticket, .. } => *ticket,
        }
    }
}

/// Perform one wizard request against the API
pub async fn execute(client: &TradeInApiClient, request: WizardRequest) -> WizardOutcome {
    debug!("Executing wizard request {:?}", request);
    match request {
        WizardRequest::Options { ticket } => WizardOutcome::Options {
            ticket,
            result: client.fetch_wizard_options().await,
        },
        WizardRequest::Series { ticket, brand } => {
            let result = client.fetch_series(&brand).await;
            WizardOutcome::Series {
                ticket,
                brand,
                result,
            }
        }
        WizardRequest::Estimate { ticket, request } => WizardOutcome::Estimate {
            ticket,
            result: client.estimate_price(&request).await,
        },
    }
}
