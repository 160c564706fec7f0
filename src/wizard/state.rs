// ABOUTME: State container for the trade-in wizard
// Tracks the current step, accumulated selections, loaded option lists and in-flight requests

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::appointment::AppointmentForm;
use super::fetch::{RequestTicket, WizardOutcome, WizardRequest};
use super::step::WizardStep;
use crate::models::{Listing, WizardOptions, WizardSelection};

pub const OPTIONS_ERROR: &str = "Failed to fetch initial data. Please try again later.";
pub const SERIES_ERROR: &str = "Failed to fetch phone series. Please try again later.";
pub const ESTIMATE_ERROR: &str = "Failed to fetch estimated price. Please try again later.";

/// Full wizard state. Transitions queue [`WizardRequest`]s; the caller drains
/// them with [`WizardState::drain_requests`] and feeds results back through
/// [`WizardState::apply`].
#[derive(Debug)]
pub struct WizardState {
    is_open: bool,
    /// Listing picked in the catalog; only shown in the header
    pub listing: Option<Listing>,
    pub step: WizardStep,
    pub selection: WizardSelection,
    /// Brands, variants and time slots; `None` until loaded
    pub options: Option<WizardOptions>,
    /// Brand -> series, filled lazily and kept for the wizard's lifetime
    series_cache: HashMap<String, Vec<String>>,
    /// Fixed message shown instead of the step content after a failed fetch
    pub error: Option<String>,
    /// Highlighted option on list steps
    pub cursor: usize,
    pub appointment: AppointmentForm,

    generation: u64,
    next_seq: u64,
    options_pending: Option<RequestTicket>,
    series_pending: HashMap<String, RequestTicket>,
    estimate_pending: Option<RequestTicket>,
    outbox: Vec<WizardRequest>,
    /// Fixed picker start date; `None` reads the local clock on every open
    pinned_today: Option<NaiveDate>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a closed wizard whose date picker always starts at `today`
    pub fn with_today(today: NaiveDate) -> Self {
        Self::build(Some(today))
    }

    fn build(pinned_today: Option<NaiveDate>) -> Self {
        let today = pinned_today.unwrap_or_else(|| chrono::Local::now().date_naive());
        Self {
            is_open: false,
            listing: None,
            step: WizardStep::BrandSelect,
            selection: WizardSelection::default(),
            options: None,
            series_cache: HashMap::new(),
            error: None,
            cursor: 0,
            appointment: AppointmentForm::new(today),
            generation: 0,
            next_seq: 0,
            options_pending: None,
            series_pending: HashMap::new(),
            estimate_pending: None,
            outbox: Vec::new(),
            pinned_today,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open (or reopen) the wizard. Everything from a previous session is
    /// dropped, even if it was left mid-flow, and the option lists are requested.
    pub fn open(&mut self, listing: Option<Listing>) {
        self.reset_session();
        self.is_open = true;
        self.listing = listing;
        info!(
            "Wizard opened (generation {}) for {:?}",
            self.generation,
            self.listing.as_ref().map(Listing::display_name)
        );

        let ticket = self.issue_ticket();
        self.options_pending = Some(ticket);
        self.outbox.push(WizardRequest::Options { ticket });
    }

    /// Close the wizard and discard all state; in-flight responses become stale
    pub fn close(&mut self) {
        if self.is_open {
            info!("Wizard closed at step {:?}", self.step);
        }
        self.reset_session();
    }

    fn reset_session(&mut self) {
        let generation = self.generation + 1;
        *self = Self::build(self.pinned_today);
        self.generation = generation;
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.next_seq += 1;
        RequestTicket {
            generation: self.generation,
            seq: self.next_seq,
        }
    }

    /// Take the requests queued by the latest transitions
    pub fn drain_requests(&mut self) -> Vec<WizardRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Whether the current step may advance
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::BrandSelect => self.selection.brand.is_some(),
            WizardStep::SeriesSelect => self.selection.series.is_some(),
            WizardStep::VariantSelect => self.selection.variant.is_some(),
            WizardStep::Appointment => self.selection.has_appointment(),
            WizardStep::Estimate => true,
        }
    }

    /// Selections and navigation are ignored while closed or showing an error
    pub fn accepts_input(&self) -> bool {
        self.is_open && self.error.is_none()
    }

    /// Whether the current step is waiting on the network
    pub fn is_loading(&self) -> bool {
        if self.options_pending.is_some() {
            return true;
        }
        match self.step {
            WizardStep::SeriesSelect => self.current_series().is_none(),
            WizardStep::Estimate => self.estimate_pending.is_some(),
            _ => false,
        }
    }

    /// Cached series list for the selected brand, if loaded
    pub fn current_series(&self) -> Option<&[String]> {
        self.selection
            .brand
            .as_ref()
            .and_then(|brand| self.series_cache.get(brand))
            .map(Vec::as_slice)
    }

    pub fn cached_series(&self, brand: &str) -> Option<&[String]> {
        self.series_cache.get(brand).map(Vec::as_slice)
    }

    /// The choices offered on the current step (time slots on the appointment step)
    pub fn current_options(&self) -> &[String] {
        let options = self.options.as_ref();
        let list = match self.step {
            WizardStep::BrandSelect => options.map(|o| o.brands.as_slice()),
            WizardStep::SeriesSelect => self.current_series(),
            WizardStep::VariantSelect => options.map(|o| o.variants.as_slice()),
            WizardStep::Appointment => options.map(|o| o.time_slots.as_slice()),
            WizardStep::Estimate => None,
        };
        list.unwrap_or_default()
    }

    fn offers(&self, step: WizardStep, option: &str) -> bool {
        self.step == step && self.current_options().iter().any(|o| o == option)
    }

    fn set_step(&mut self, step: WizardStep) {
        debug!("Wizard step {:?} -> {:?}", self.step, step);
        self.step = step;
        self.cursor = 0;
    }

    /// Pick a brand. Switching to a different brand discards the series choice;
    /// the brand's series list is fetched only if it is neither cached nor in flight.
    pub fn select_brand(&mut self, brand: &str) -> bool {
        if !self.accepts_input() || !self.offers(WizardStep::BrandSelect, brand) {
            return false;
        }

        if self.selection.brand.as_deref() != Some(brand) {
            self.selection.series = None;
        }
        self.selection.brand = Some(brand.to_string());

        if !self.series_cache.contains_key(brand) && !self.series_pending.contains_key(brand) {
            let ticket = self.issue_ticket();
            self.series_pending.insert(brand.to_string(), ticket);
            self.outbox.push(WizardRequest::Series {
                ticket,
                brand: brand.to_string(),
            });
        }

        self.set_step(WizardStep::SeriesSelect);
        true
    }

    pub fn select_series(&mut self, series: &str) -> bool {
        if !self.accepts_input() || !self.offers(WizardStep::SeriesSelect, series) {
            return false;
        }
        self.selection.series = Some(series.to_string());
        self.set_step(WizardStep::VariantSelect);
        true
    }

    pub fn select_variant(&mut self, variant: &str) -> bool {
        if !self.accepts_input() || !self.offers(WizardStep::VariantSelect, variant) {
            return false;
        }
        self.selection.variant = Some(variant.to_string());
        self.set_step(WizardStep::Appointment);
        true
    }

    /// Set the appointment date. Advances only if a time slot is already set.
    pub fn set_date(&mut self, date: &str) -> bool {
        if !self.accepts_input() || self.step != WizardStep::Appointment || date.is_empty() {
            return false;
        }
        self.selection.date = Some(date.to_string());
        self.complete_appointment_if_ready();
        true
    }

    /// Set the time slot. Advances only if a date is already set.
    pub fn set_time_slot(&mut self, slot: &str) -> bool {
        if !self.accepts_input() || !self.offers(WizardStep::Appointment, slot) {
            return false;
        }
        self.selection.time_slot = Some(slot.to_string());
        self.complete_appointment_if_ready();
        true
    }

    fn complete_appointment_if_ready(&mut self) {
        if self.step == WizardStep::Appointment && self.can_proceed() {
            self.enter_estimate();
        }
    }

    fn enter_estimate(&mut self) {
        let Some(request) = self.selection.estimate_request() else {
            warn!("Estimate requested without brand/series/variant");
            return;
        };

        self.set_step(WizardStep::Estimate);
        self.selection.estimated_price = None;

        let ticket = self.issue_ticket();
        self.estimate_pending = Some(ticket);
        self.outbox.push(WizardRequest::Estimate { ticket, request });
    }

    /// Advance one step if the gate allows it (swipe forward)
    pub fn go_forward(&mut self) -> bool {
        if !self.accepts_input() || self.step.is_terminal() || !self.can_proceed() {
            return false;
        }
        match self.step.next() {
            Some(WizardStep::Estimate) => self.enter_estimate(),
            Some(next) => self.set_step(next),
            None => return false,
        }
        true
    }

    /// Return to the immediately preceding step; later selections are kept
    pub fn go_back(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(previous) = self.step.previous() else {
            return false;
        };
        if self.step == WizardStep::Estimate {
            // A quote still in flight belongs to the appointment being left
            self.estimate_pending = None;
        }
        self.set_step(previous);
        true
    }

    /// Feed back a finished request. Returns false if the outcome was stale
    /// and ignored.
    pub fn apply(&mut self, outcome: WizardOutcome) -> bool {
        let ticket = outcome.ticket();
        if ticket.generation != self.generation {
            debug!(
                "Discarding outcome from generation {} (current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        match outcome {
            WizardOutcome::Options { result, .. } => {
                if self.options_pending != Some(ticket) {
                    return false;
                }
                self.options_pending = None;
                match result {
                    Ok(options) => self.options = Some(options),
                    Err(e) => {
                        warn!(endpoint = e.endpoint(), "Wizard options fetch failed: {}", e);
                        self.error = Some(OPTIONS_ERROR.to_string());
                    }
                }
            }
            WizardOutcome::Series { brand, result, .. } => {
                if self.series_pending.get(&brand) != Some(&ticket) {
                    return false;
                }
                self.series_pending.remove(&brand);
                match result {
                    Ok(series) => {
                        self.series_cache.insert(brand, series);
                    }
                    Err(e) => {
                        warn!(endpoint = e.endpoint(), "Series fetch for {} failed: {}", brand, e);
                        // Only the brand on screen can block the wizard
                        if self.selection.brand.as_deref() == Some(brand.as_str()) {
                            self.error = Some(SERIES_ERROR.to_string());
                        }
                    }
                }
            }
            WizardOutcome::Estimate { result, .. } => {
                if self.estimate_pending != Some(ticket) {
                    return false;
                }
                self.estimate_pending = None;
                match result {
                    Ok(price) => {
                        info!("Estimated price: {}", price);
                        self.selection.estimated_price = Some(price);
                    }
                    Err(e) => {
                        warn!(endpoint = e.endpoint(), "Estimate fetch failed: {}", e);
                        self.error = Some(ESTIMATE_ERROR.to_string());
                    }
                }
            }
        }
        true
    }

    pub fn cursor_down(&mut self) {
        let len = self.current_options().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.current_options().len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Select whatever the cursor points at on the current list step
    pub fn choose_highlighted(&mut self) -> bool {
        let Some(option) = self.current_options().get(self.cursor).cloned() else {
            return false;
        };
        match self.step {
            WizardStep::BrandSelect => self.select_brand(&option),
            WizardStep::SeriesSelect => self.select_series(&option),
            WizardStep::VariantSelect => self.select_variant(&option),
            WizardStep::Appointment | WizardStep::Estimate => false,
        }
    }

    /// Commit the date under the picker cursor
    pub fn commit_picker_date(&mut self) -> bool {
        let date = self.appointment.date_value();
        self.set_date(&date)
    }

    /// Commit the highlighted time slot
    pub fn commit_picker_slot(&mut self) -> bool {
        let Some(slot) = self
            .options
            .as_ref()
            .and_then(|o| o.time_slots.get(self.appointment.slot_cursor))
            .cloned()
        else {
            return false;
        };
        self.set_time_slot(&slot)
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
