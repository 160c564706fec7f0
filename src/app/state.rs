// ABOUTME: Application state management and view switching for the trade-in TUI
// Owns the catalog grid, the wizard, and the background fetch plumbing

use crate::api::TradeInApiClient;
use crate::app::fetcher::{FetchDispatcher, FetchOutcome};
use crate::config::AppConfig;
use crate::models::Listing;
use crate::wizard::WizardState;
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const CATALOG_ERROR: &str = "Failed to fetch phones. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Catalog, // Listing grid
    Wizard,  // Trade-in wizard overlay
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    Loading,
    Loaded(Vec<Listing>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    LoadCatalog,
}

/// Grid columns for a given terminal width, mirroring the 2/3/4 column
/// breakpoints of the storefront
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..=79 => 2,
        80..=119 => 3,
        _ => 4,
    }
}

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub current_view: View,
    pub should_quit: bool,
    pub help_visible: bool,
    pub catalog: CatalogState,
    pub selected_listing_index: usize,
    // Updated by the layout on every render
    pub grid_columns: usize,
    pub wizard: WizardState,
    pub pending_async_action: Option<AsyncAction>,
    pub ui_needs_refresh: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            current_view: View::Catalog,
            should_quit: false,
            help_visible: false,
            catalog: CatalogState::Loading,
            selected_listing_index: 0,
            grid_columns: 4,
            wizard: WizardState::new(),
            pending_async_action: Some(AsyncAction::LoadCatalog),
            ui_needs_refresh: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn listings(&self) -> &[Listing] {
        match &self.catalog {
            CatalogState::Loaded(listings) => listings,
            _ => &[],
        }
    }

    pub fn selected_listing(&self) -> Option<&Listing> {
        self.listings().get(self.selected_listing_index)
    }

    pub fn next_listing(&mut self) {
        let count = self.listings().len();
        if count > 0 && self.selected_listing_index + 1 < count {
            self.selected_listing_index += 1;
        }
    }

    pub fn previous_listing(&mut self) {
        self.selected_listing_index = self.selected_listing_index.saturating_sub(1);
    }

    pub fn listing_down(&mut self) {
        let target = self.selected_listing_index + self.grid_columns.max(1);
        if target < self.listings().len() {
            self.selected_listing_index = target;
        }
    }

    pub fn listing_up(&mut self) {
        if let Some(target) = self
            .selected_listing_index
            .checked_sub(self.grid_columns.max(1))
        {
            self.selected_listing_index = target;
        }
    }

    /// Open the wizard for the highlighted listing
    pub fn open_wizard(&mut self) {
        let Some(listing) = self.selected_listing().cloned() else {
            debug!("No listing selected, wizard not opened");
            return;
        };
        info!("Opening trade-in wizard for {}", listing.display_name());
        self.wizard.open(Some(listing));
        self.current_view = View::Wizard;
    }

    pub fn close_wizard(&mut self) {
        self.wizard.close();
        self.current_view = View::Catalog;
    }

    /// Route a finished fetch into the catalog or the wizard
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Catalog(Ok(listings)) => {
                info!("Catalog loaded with {} listings", listings.len());
                self.selected_listing_index = 0;
                self.catalog = CatalogState::Loaded(listings);
            }
            FetchOutcome::Catalog(Err(e)) => {
                warn!(endpoint = e.endpoint(), "Catalog fetch failed: {}", e);
                self.catalog = CatalogState::Failed(CATALOG_ERROR.to_string());
            }
            FetchOutcome::Wizard(outcome) => {
                if !self.wizard.apply(outcome) {
                    debug!("Dropped stale wizard outcome");
                }
            }
        }
        self.ui_needs_refresh = true;
    }
}

pub struct App {
    pub state: AppState,
    dispatcher: FetchDispatcher,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = TradeInApiClient::new(&config.api)?;
        Ok(Self {
            state: AppState::new(config),
            dispatcher: FetchDispatcher::new(client),
        })
    }

    pub async fn init(&mut self) {
        info!(
            "App::init() - catalog source {}",
            self.state.config.api.base_url
        );
        self.dispatch_pending();
    }

    /// Start queued work, then fold in whatever finished since the last tick
    pub async fn tick(&mut self) -> Result<()> {
        self.dispatch_pending();

        while let Some(outcome) = self.dispatcher.try_next() {
            self.state.apply_fetch_outcome(outcome);
        }

        // Outcomes never queue requests, but transitions made this tick may have
        self.dispatch_pending();
        Ok(())
    }

    fn dispatch_pending(&mut self) {
        if let Some(action) = self.state.pending_async_action.take() {
            match action {
                AsyncAction::LoadCatalog => {
                    let delay = Duration::from_millis(self.state.config.catalog.load_delay_ms);
                    self.dispatcher.spawn_catalog(delay);
                }
            }
        }

        for request in self.state.wizard.drain_requests() {
            self.dispatcher.spawn_wizard(request);
        }
    }

    /// Wait for one background fetch and apply it
    pub async fn wait_for_fetch(&mut self) -> bool {
        match self.dispatcher.next().await {
            Some(outcome) => {
                self.state.apply_fetch_outcome(outcome);
                self.dispatch_pending();
                true
            }
            None => false,
        }
    }

    /// Check if UI needs immediate refresh and clear the flag
    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.state.ui_needs_refresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loaded_state(count: u32) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        let listings = (1..=count)
            .map(|id| Listing::new(id, "Apple", &format!("iPhone {id}"), ""))
            .collect();
        state.apply_fetch_outcome(FetchOutcome::Catalog(Ok(listings)));
        state
    }

    #[test]
    fn test_new_state_queues_catalog_load() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.catalog, CatalogState::Loading);
        assert_eq!(state.pending_async_action, Some(AsyncAction::LoadCatalog));
        assert_eq!(state.current_view, View::Catalog);
    }

    #[test]
    fn test_columns_follow_width() {
        assert_eq!(columns_for_width(40), 2);
        assert_eq!(columns_for_width(100), 3);
        assert_eq!(columns_for_width(200), 4);
    }

    #[test]
    fn test_grid_navigation_stays_in_bounds() {
        let mut state = loaded_state(7);
        state.grid_columns = 3;

        state.previous_listing();
        state.listing_up();
        assert_eq!(state.selected_listing_index, 0);

        state.listing_down();
        assert_eq!(state.selected_listing_index, 3);
        state.listing_down();
        assert_eq!(state.selected_listing_index, 6);
        state.listing_down();
        assert_eq!(state.selected_listing_index, 6);
        state.next_listing();
        assert_eq!(state.selected_listing_index, 6);

        state.listing_up();
        state.previous_listing();
        assert_eq!(state.selected_listing_index, 2);
    }

    #[test]
    fn test_open_and_close_wizard() {
        let mut state = loaded_state(2);
        state.next_listing();
        state.open_wizard();

        assert_eq!(state.current_view, View::Wizard);
        assert!(state.wizard.is_open());
        assert_eq!(state.wizard.listing.as_ref().unwrap().model, "iPhone 2");

        state.close_wizard();
        assert_eq!(state.current_view, View::Catalog);
        assert!(!state.wizard.is_open());
    }

    #[test]
    fn test_wizard_needs_a_listing() {
        let mut state = AppState::new(AppConfig::default());
        state.open_wizard();
        assert_eq!(state.current_view, View::Catalog);
        assert!(!state.wizard.is_open());
    }

    #[test]
    fn test_catalog_failure_uses_fixed_message() {
        let mut state = AppState::new(AppConfig::default());
        state.apply_fetch_outcome(FetchOutcome::Catalog(Err(crate::api::ApiError::Status {
            endpoint: "/phones".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        })));
        assert_eq!(state.catalog, CatalogState::Failed(CATALOG_ERROR.to_string()));
        assert!(state.listings().is_empty());
    }
}
