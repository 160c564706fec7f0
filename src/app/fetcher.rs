// ABOUTME: Runs API calls on background tasks and hands their results back to the UI loop
// Results are queued on an unbounded channel and drained without blocking on every tick

use crate::api::{ApiError, TradeInApiClient};
use crate::models::Listing;
use crate::wizard::{self, WizardOutcome, WizardRequest};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// A finished background fetch
#[derive(Debug)]
pub enum FetchOutcome {
    Catalog(Result<Vec<Listing>, ApiError>),
    Wizard(WizardOutcome),
}

pub struct FetchDispatcher {
    client: TradeInApiClient,
    sender: mpsc::UnboundedSender<FetchOutcome>,
    receiver: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl FetchDispatcher {
    pub fn new(client: TradeInApiClient) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            client,
            sender,
            receiver,
        }
    }

    /// Fetch the listing collection after `delay`
    pub fn spawn_catalog(&self, delay: Duration) {
        let client = self.client.clone();
        let sender = self.sender.clone();
        info!("Loading catalog from {} (delay {:?})", client.base_url(), delay);

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let result = client.fetch_phones().await;
            // Receiver gone means the app is shutting down
            let _ = sender.send(FetchOutcome::Catalog(result));
        });
    }

    pub fn spawn_wizard(&self, request: WizardRequest) {
        let client = self.client.clone();
        let sender = self.sender.clone();
        debug!("Dispatching wizard request {:?}", request.ticket());

        tokio::spawn(async move {
            let outcome = wizard::execute(&client, request).await;
            let _ = sender.send(FetchOutcome::Wizard(outcome));
        });
    }

    /// Next finished fetch, if any, without waiting
    pub fn try_next(&mut self) -> Option<FetchOutcome> {
        self.receiver.try_recv().ok()
    }

    /// Wait for the next finished fetch
    pub async fn next(&mut self) -> Option<FetchOutcome> {
        self.receiver.recv().await
    }
}
