// ABOUTME: Event handling system for keyboard input and app actions

use crate::app::{AppState, state::View};
use crate::wizard::{AppointmentField, WizardStep};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Catalog grid
    CatalogLeft,
    CatalogRight,
    CatalogUp,
    CatalogDown,
    CatalogSelect,
    // Wizard navigation
    WizardClose,
    WizardBack,    // Swipe right
    WizardForward, // Swipe left
    WizardCursorUp,
    WizardCursorDown,
    WizardChoose,
    // Appointment form
    AppointmentToggleFocus,
    AppointmentShiftDate(i64),
    AppointmentCommit,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('?') => return Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') => return Some(AppEvent::Quit),
            _ => {}
        }

        match state.current_view {
            View::Catalog => Self::handle_catalog_keys(key_event),
            View::Wizard => Self::handle_wizard_keys(key_event, state),
        }
    }

    fn handle_catalog_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::CatalogLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::CatalogRight),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::CatalogUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::CatalogDown),
            KeyCode::Enter => Some(AppEvent::CatalogSelect),
            KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_wizard_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.code == KeyCode::Esc {
            return Some(AppEvent::WizardClose);
        }

        // An error freezes the wizard until it is closed
        if state.wizard.error.is_some() {
            return None;
        }

        if state.wizard.step == WizardStep::Appointment {
            return Self::handle_appointment_keys(key_event, state);
        }

        match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::WizardBack),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::WizardForward),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::WizardCursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::WizardCursorDown),
            KeyCode::Enter => Some(AppEvent::WizardChoose),
            _ => None,
        }
    }

    fn handle_appointment_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let date_focused = state.wizard.appointment.focus == AppointmentField::Date;

        match key_event.code {
            KeyCode::Tab | KeyCode::BackTab => Some(AppEvent::AppointmentToggleFocus),
            KeyCode::Enter => Some(AppEvent::AppointmentCommit),
            KeyCode::Left if date_focused => Some(AppEvent::AppointmentShiftDate(-1)),
            KeyCode::Right if date_focused => Some(AppEvent::AppointmentShiftDate(1)),
            KeyCode::PageUp if date_focused => Some(AppEvent::AppointmentShiftDate(-7)),
            KeyCode::PageDown if date_focused => Some(AppEvent::AppointmentShiftDate(7)),
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::WizardBack),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::WizardForward),
            KeyCode::Up | KeyCode::Char('k') if !date_focused => Some(AppEvent::WizardCursorUp),
            KeyCode::Down | KeyCode::Char('j') if !date_focused => {
                Some(AppEvent::WizardCursorDown)
            }
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing {:?}", event);
        match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.quit();
            }
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::CatalogLeft => state.previous_listing(),
            AppEvent::CatalogRight => state.next_listing(),
            AppEvent::CatalogUp => state.listing_up(),
            AppEvent::CatalogDown => state.listing_down(),
            AppEvent::CatalogSelect => state.open_wizard(),
            AppEvent::WizardClose => state.close_wizard(),
            AppEvent::WizardBack => {
                state.wizard.go_back();
            }
            AppEvent::WizardForward => {
                state.wizard.go_forward();
            }
            AppEvent::WizardCursorUp => {
                if state.wizard.step == WizardStep::Appointment {
                    let count = state.wizard.current_options().len();
                    state.wizard.appointment.prev_slot(count);
                } else {
                    state.wizard.cursor_up();
                }
            }
            AppEvent::WizardCursorDown => {
                if state.wizard.step == WizardStep::Appointment {
                    let count = state.wizard.current_options().len();
                    state.wizard.appointment.next_slot(count);
                } else {
                    state.wizard.cursor_down();
                }
            }
            AppEvent::WizardChoose => {
                state.wizard.choose_highlighted();
            }
            AppEvent::AppointmentToggleFocus => state.wizard.appointment.toggle_focus(),
            AppEvent::AppointmentShiftDate(days) => state.wizard.appointment.shift_date(days),
            AppEvent::AppointmentCommit => {
                match state.wizard.appointment.focus {
                    AppointmentField::Date => state.wizard.commit_picker_date(),
                    AppointmentField::TimeSlot => state.wizard.commit_picker_slot(),
                };
            }
        }
    }
}
