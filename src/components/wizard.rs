// ABOUTME: Trade-in wizard overlay component
// Renders step progress, per-step option grids, the appointment form and the final estimate

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::wizard::{AppointmentField, WizardState, WizardStep};

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

const OPTION_COLUMNS: usize = 2;
const SKELETON_ROWS: usize = 4;

pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, wizard: &WizardState) {
        frame.render_widget(Clear, area);

        let container = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(DARK_BG));
        let inner = container.inner(area);
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header with progress
                Constraint::Min(6),    // Step content
                Constraint::Length(3), // Navigation footer
            ])
            .split(inner);

        self.render_header(frame, layout[0], wizard);

        if let Some(error) = &wizard.error {
            self.render_error(frame, layout[1], error);
        } else if wizard.is_loading() {
            self.render_skeleton(frame, layout[1], wizard.step);
        } else {
            self.render_step_content(frame, layout[1], wizard);
        }

        self.render_navigation(frame, layout[2], wizard);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, wizard: &WizardState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let mut title = vec![Span::styled(
            wizard.step.title(),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )];
        if let Some(listing) = &wizard.listing {
            title.push(Span::styled(
                format!("  ·  trading in {}", listing.display_name()),
                Style::default().fg(MUTED_GRAY),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(title)).alignment(Alignment::Center),
            rows[0],
        );

        self.render_progress(frame, rows[1], wizard.step);
    }

    /// Render step progress dots
    fn render_progress(&self, frame: &mut Frame, area: Rect, current: WizardStep) {
        let current_idx = current.index();
        let steps = WizardStep::all();
        let mut spans = Vec::new();

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.label(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx + 1 < WizardStep::total() {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let error = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                message,
                Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("Press Esc to close", Style::default().fg(MUTED_GRAY))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(error, area);
    }

    fn render_skeleton(&self, frame: &mut Frame, area: Rect, step: WizardStep) {
        let bar = Style::default().fg(SUBDUED_BORDER);
        let mut lines = vec![Line::from("")];
        let rows = if step == WizardStep::Estimate { 2 } else { SKELETON_ROWS };
        for _ in 0..rows {
            lines.push(Line::from(Span::styled("  ░░░░░░░░░░░░░░    ░░░░░░░░░░░░░░", bar)));
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_step_content(&self, frame: &mut Frame, area: Rect, wizard: &WizardState) {
        match wizard.step {
            WizardStep::BrandSelect => {
                let chosen = wizard.selection.brand.as_deref();
                self.render_options(frame, area, wizard.current_options(), wizard.cursor, chosen);
            }
            WizardStep::SeriesSelect => {
                let chosen = wizard.selection.series.as_deref();
                self.render_options(frame, area, wizard.current_options(), wizard.cursor, chosen);
            }
            WizardStep::VariantSelect => {
                let chosen = wizard.selection.variant.as_deref();
                self.render_options(frame, area, wizard.current_options(), wizard.cursor, chosen);
            }
            WizardStep::Appointment => self.render_appointment(frame, area, wizard),
            WizardStep::Estimate => self.render_estimate(frame, area, wizard),
        }
    }

    /// Options laid out as a two-column button grid
    fn render_options(
        &self,
        frame: &mut Frame,
        area: Rect,
        options: &[String],
        cursor: usize,
        chosen: Option<&str>,
    ) {
        if options.is_empty() {
            frame.render_widget(
                Paragraph::new("Nothing to choose from")
                    .style(Style::default().fg(MUTED_GRAY))
                    .alignment(Alignment::Center),
                area,
            );
            return;
        }

        let mut lines = vec![Line::from("")];
        for (row, chunk) in options.chunks(OPTION_COLUMNS).enumerate() {
            let mut spans = Vec::new();
            for (col, option) in chunk.iter().enumerate() {
                let idx = row * OPTION_COLUMNS + col;
                let is_cursor = idx == cursor;
                let is_chosen = chosen == Some(option.as_str());

                let style = if is_cursor {
                    Style::default().fg(DARK_BG).bg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)
                } else if is_chosen {
                    Style::default().fg(SELECTION_GREEN)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                let mark = if is_chosen { "✓" } else { " " };
                spans.push(Span::styled(format!(" {mark} {option:<18}"), style));
                spans.push(Span::raw("  "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_appointment(&self, frame: &mut Frame, area: Rect, wizard: &WizardState) {
        let form = &wizard.appointment;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let focused = |field: AppointmentField| {
            if form.focus == field {
                Style::default().fg(GOLD)
            } else {
                Style::default().fg(SUBDUED_BORDER)
            }
        };

        let committed_date = wizard.selection.date.as_deref().unwrap_or("not set");
        let date_lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("◀ ", Style::default().fg(MUTED_GRAY)),
                Span::styled(
                    form.date_cursor.format("%a %d %b %Y").to_string(),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", Style::default().fg(MUTED_GRAY)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("Chosen: {committed_date}"),
                Style::default().fg(SELECTION_GREEN),
            )),
        ];
        let date_block = Block::default()
            .title(" Date ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(focused(AppointmentField::Date));
        frame.render_widget(
            Paragraph::new(date_lines).alignment(Alignment::Center).block(date_block),
            columns[0],
        );

        let chosen_slot = wizard.selection.time_slot.as_deref();
        let slot_lines: Vec<Line> = wizard
            .current_options()
            .iter()
            .enumerate()
            .map(|(idx, slot)| {
                let is_chosen = chosen_slot == Some(slot.as_str());
                let style = if idx == form.slot_cursor && form.focus == AppointmentField::TimeSlot {
                    Style::default().fg(DARK_BG).bg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)
                } else if is_chosen {
                    Style::default().fg(SELECTION_GREEN)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                let mark = if is_chosen { "✓" } else { " " };
                Line::from(Span::styled(format!(" {mark} {slot} "), style))
            })
            .collect();
        let slot_block = Block::default()
            .title(" Time slot ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(focused(AppointmentField::TimeSlot));
        frame.render_widget(Paragraph::new(slot_lines).block(slot_block), columns[1]);
    }

    fn render_estimate(&self, frame: &mut Frame, area: Rect, wizard: &WizardState) {
        let price = wizard
            .selection
            .estimated_price
            .map_or_else(|| "-".to_string(), |p| format!("Rs.{p}"));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                price,
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                wizard.selection.summary(),
                Style::default().fg(SOFT_WHITE),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect, wizard: &WizardState) {
        let key = Style::default().fg(GOLD).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(MUTED_GRAY);
        let sep = Span::styled(" │ ", Style::default().fg(SUBDUED_BORDER));

        // Arrows move the date while the picker has focus
        let date_focused = wizard.step == WizardStep::Appointment
            && wizard.appointment.focus == AppointmentField::Date;
        let (back_key, next_key) = if date_focused { ("h", "l") } else { ("←", "→") };

        let mut spans = Vec::new();
        if wizard.error.is_none() {
            if wizard.step.previous().is_some() {
                spans.extend([Span::styled(back_key, key), Span::styled(" back", text), sep.clone()]);
            }
            if !wizard.step.is_terminal() {
                let forward = if wizard.can_proceed() { key } else { text };
                spans.extend([Span::styled(next_key, forward), Span::styled(" next", text), sep.clone()]);
            }
            if wizard.step == WizardStep::Appointment {
                spans.extend([Span::styled("Tab", key), Span::styled(" field ", text)]);
                if date_focused {
                    spans.extend([
                        Span::styled("←/→", key),
                        Span::styled(" day ", text),
                        Span::styled("PgUp/PgDn", key),
                        Span::styled(" week", text),
                    ]);
                } else {
                    spans.extend([Span::styled("↑/↓", key), Span::styled(" slot", text)]);
                }
                spans.push(sep.clone());
            }
            if !wizard.step.is_terminal() {
                spans.extend([Span::styled("Enter", key), Span::styled(" choose", text), sep.clone()]);
            }
        }
        spans.extend([Span::styled("Esc", key), Span::styled(" close", text)]);

        let footer = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(SUBDUED_BORDER)),
            );
        frame.render_widget(footer, area);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}
