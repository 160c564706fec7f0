// ABOUTME: Main application structure and state management for the TUI

pub mod events;
pub mod fetcher;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use fetcher::{FetchDispatcher, FetchOutcome};
pub use state::{App, AppState};
