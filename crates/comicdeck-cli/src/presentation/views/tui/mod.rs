//! TUI View Components
//!
//! Ratatui Widget implementations for the interactive browser. Each view is
//! a thin wrapper around a ViewModel reference.
//!
//! ## Design Principles:
//! - Views take a reference to ViewModel (no ownership)
//! - NO catalog logic; only layout arithmetic and styling
//! - Layout helpers that input handling also needs (`grid_cells`,
//!   `chip_rects`, `modal_area`) live next to the view that draws them, so
//!   hit-testing and drawing can never disagree
//! - Color mapping from StatusLevel to Ratatui colors happens here

pub mod banner;
pub mod components;
pub mod detail;
pub mod filter_bar;
pub mod grid;
pub mod hero;
pub mod status_bar;

pub use banner::BannerView;
pub use detail::{DetailView, close_button_area, modal_area};
pub use filter_bar::{FilterBarView, chip_rects};
pub use grid::{CARD_HEIGHT, CARD_WIDTH, GridView, grid_columns, grid_visible_rows};
pub use hero::HeroView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
