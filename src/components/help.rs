// ABOUTME: Help overlay component displaying keyboard shortcuts for the catalog and wizard

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Catalog:").style(heading),
            ListItem::new("  h/j/k/l    Move across the grid (arrows work too)"),
            ListItem::new("  Enter      Trade in the highlighted phone"),
            ListItem::new(""),
            ListItem::new("Wizard:").style(heading),
            ListItem::new("  j/k        Move between options"),
            ListItem::new("  Enter      Choose the highlighted option"),
            ListItem::new("  h/←        Previous step"),
            ListItem::new("  l/→        Next step (once the current one is answered)"),
            ListItem::new("  Esc        Close the wizard"),
            ListItem::new(""),
            ListItem::new("Appointment:").style(heading),
            ListItem::new("  Tab        Switch between date and time slot"),
            ListItem::new("  ←/→        Previous / next day"),
            ListItem::new("  PgUp/PgDn  Previous / next week"),
            ListItem::new("  Enter      Set the date or time slot"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q          Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Rectangle of the given percentages centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
