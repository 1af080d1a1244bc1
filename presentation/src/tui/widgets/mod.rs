//! TUI widgets: ratatui components for the game screen
//!
//! Layout:
//! ┌── Header (3) ──────────────────────────────────────────┐
//! ├── Temperature ─┬── Syrup ──┬── Milk ──┬── Blended ──────┤
//! └── StatusBar (1) ───────────────────────────────────────┘
//!
//! Terminals narrower than the stack threshold get the four panels stacked
//! top to bottom instead.

pub mod guess_panel;
pub mod header;
pub mod help;
pub mod status_bar;

use barista_domain::{Ingredient, IngredientMap};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the game screen
#[derive(Debug, Clone, PartialEq)]
pub struct GameLayout {
    pub header: Rect,
    pub panels: IngredientMap<Rect>,
    pub status_bar: Rect,
    pub stacked: bool,
}

impl GameLayout {
    /// Split `area`; panels stack vertically when `area.width < stack_threshold`
    pub fn compute(area: Rect, stack_threshold: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let stacked = stack_threshold > 0 && area.width < stack_threshold;
        let direction = if stacked {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };
        let cells = Layout::default()
            .direction(direction)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            panels: IngredientMap::from_fn(|i: Ingredient| cells[i.index()]),
            status_bar: vertical[2],
            stacked,
        }
    }

    /// Centered overlay rectangle for help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}
