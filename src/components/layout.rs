// ABOUTME: Main layout component arranging the catalog, the wizard overlay and the bottom menu bar

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

use super::help::centered_rect;
use super::{CatalogGridComponent, HelpComponent, WizardComponent};
use crate::app::state::{columns_for_width, AppState, View};

pub struct LayoutComponent {
    catalog_grid: CatalogGridComponent,
    wizard: WizardComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            catalog_grid: CatalogGridComponent::new(),
            wizard: WizardComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(area);

        // Tiles have borders, so size the grid from the inner width
        state.grid_columns = columns_for_width(chunks[0].width.saturating_sub(2));
        self.catalog_grid.render(frame, chunks[0], state);
        self.render_menu_bar(frame, chunks[1], state);

        // The wizard sits on top of the catalog
        if state.current_view == View::Wizard {
            let wizard_area = centered_rect(80, 80, chunks[0]);
            self.wizard.render(frame, wizard_area, &state.wizard);
        }

        if state.help_visible {
            self.help.render(frame, area);
        }
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let text = |t: &'static str| Span::styled(t, Style::default().fg(MUTED_GRAY));
        let sep = || Span::styled(" │ ", Style::default().fg(SUBDUED_BORDER));

        let mut spans = match state.current_view {
            View::Catalog => vec![
                key("hjkl", CORNFLOWER_BLUE),
                text(" move "),
                key("Enter", SELECTION_GREEN),
                text(" trade in"),
            ],
            View::Wizard => vec![
                key("←/→", CORNFLOWER_BLUE),
                text(" step "),
                key("Enter", SELECTION_GREEN),
                text(" choose "),
                key("Esc", GOLD),
                text(" close"),
            ],
        };
        spans.extend([
            sep(),
            key("?", CORNFLOWER_BLUE),
            text(" help "),
            key("q", CORNFLOWER_BLUE),
            text(" quit"),
        ]);

        let menu = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
