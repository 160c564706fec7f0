// ABOUTME: Input state for the appointment step: a date picker and a time-slot list

use chrono::{Duration, NaiveDate};

/// Which appointment field receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentField {
    Date,
    TimeSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentForm {
    pub focus: AppointmentField,
    /// Date under the picker cursor (not yet committed)
    pub date_cursor: NaiveDate,
    /// Highlighted time-slot index (not yet committed)
    pub slot_cursor: usize,
}

impl AppointmentForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            focus: AppointmentField::Date,
            date_cursor: today,
            slot_cursor: 0,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AppointmentField::Date => AppointmentField::TimeSlot,
            AppointmentField::TimeSlot => AppointmentField::Date,
        };
    }

    /// Move the date cursor; saturates at chrono's calendar bounds
    pub fn shift_date(&mut self, days: i64) {
        if let Some(date) = self.date_cursor.checked_add_signed(Duration::days(days)) {
            self.date_cursor = date;
        }
    }

    /// Date as the wizard stores it (`YYYY-MM-DD`)
    pub fn date_value(&self) -> String {
        self.date_cursor.format("%Y-%m-%d").to_string()
    }

    pub fn next_slot(&mut self, slot_count: usize) {
        if slot_count > 0 {
            self.slot_cursor = (self.slot_cursor + 1) % slot_count;
        }
    }

    pub fn prev_slot(&mut self, slot_count: usize) {
        if slot_count > 0 {
            self.slot_cursor = self.slot_cursor.checked_sub(1).unwrap_or(slot_count - 1);
        }
    }
}
