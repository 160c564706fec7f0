// ABOUTME: Catalog grid component rendering phone listings as selectable tiles
// Shows skeleton tiles while loading and a red message if the fetch failed

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{AppState, CatalogState};
use crate::models::Listing;

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

const TILE_HEIGHT: u16 = 6;
const SKELETON_BAR: &str = "░░░░░░░░░░░░";
const SKELETON_SHORT: &str = "░░░░░░";

pub struct CatalogGridComponent;

impl CatalogGridComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(" 📱 ", Style::default()),
                Span::styled(
                    "Trade in your phone",
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ", Style::default()),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &state.catalog {
            CatalogState::Loading => {
                let count = state.config.catalog.placeholder_count;
                self.render_grid(frame, inner, count, state.grid_columns, 0, |frame, tile, _| {
                    Self::render_skeleton_tile(frame, tile);
                });
            }
            CatalogState::Failed(message) => {
                let error = Paragraph::new(Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
                frame.render_widget(error, inner);
            }
            CatalogState::Loaded(listings) if listings.is_empty() => {
                let empty = Paragraph::new("No phones listed")
                    .style(Style::default().fg(MUTED_GRAY))
                    .alignment(Alignment::Center);
                frame.render_widget(empty, inner);
            }
            CatalogState::Loaded(listings) => {
                let selected = state.selected_listing_index;
                self.render_grid(
                    frame,
                    inner,
                    listings.len(),
                    state.grid_columns,
                    selected,
                    |frame, tile, idx| {
                        Self::render_listing_tile(frame, tile, &listings[idx], idx == selected);
                    },
                );
            }
        }
    }

    /// Lay out `count` tiles in rows of `columns`, scrolled so `selected` is visible
    fn render_grid<F>(
        &self,
        frame: &mut Frame,
        area: Rect,
        count: usize,
        columns: usize,
        selected: usize,
        mut render_tile: F,
    ) where
        F: FnMut(&mut Frame, Rect, usize),
    {
        let columns = columns.max(1);
        let visible_rows = usize::from((area.height / TILE_HEIGHT).max(1));
        let selected_row = selected / columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);
        let total_rows = count.div_ceil(columns);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(TILE_HEIGHT); visible_rows])
            .split(area);

        for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(row_areas[slot]);

            for (col, cell) in cells.iter().enumerate() {
                let idx = row * columns + col;
                if idx < count {
                    render_tile(frame, *cell, idx);
                }
            }
        }
    }

    fn render_skeleton_tile(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER));
        let bar = Style::default().fg(SUBDUED_BORDER);
        let lines = vec![
            Line::from(Span::styled(SKELETON_BAR, bar)),
            Line::from(Span::styled(SKELETON_SHORT, bar)),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_listing_tile(frame: &mut Frame, area: Rect, listing: &Listing, is_selected: bool) {
        let (border, marker) = if is_selected {
            (Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD), "▶ ")
        } else {
            (Style::default().fg(SUBDUED_BORDER), "  ")
        };

        let image = if listing.image_url.is_empty() {
            "no image".to_string()
        } else if listing.is_local_image() {
            format!("🖼  {}", listing.image_url)
        } else {
            format!("🔗 {}", listing.image_url)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(SELECTION_GREEN)),
                Span::styled(
                    listing.brand.as_str(),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {}", listing.model),
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(Span::styled(format!("  {image}"), Style::default().fg(MUTED_GRAY))),
        ];

        let tile = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
        frame.render_widget(tile, area);
    }
}

impl Default for CatalogGridComponent {
    fn default() -> Self {
        Self::new()
    }
}
