//! TUI Components
//!
//! Components encapsulate UI State + Input Logic + Render Logic so the
//! renderer stays a thin router:
//! 1. State manipulation (cursors, scroll offsets, the search buffer) stays
//!    private to the component
//! 2. Input handling returns an action when the parent must respond
//! 3. Index safety is enforced inside component boundaries
//!
//! ## Pattern:
//! ```rust,ignore
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent) -> Option<FooAction> { ... }
//!     pub fn handle_click(&mut self, column: u16, row: u16) -> Option<FooAction> { ... }
//!     pub fn layout(&mut self, area: Rect, data: &FooViewModel) { ... }
//!     pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FooViewModel) { ... }
//! }
//! ```
//!
//! `layout` records the hit-test rectangles of the last frame; clicks are
//! resolved against them.

pub mod detail;
pub mod filter_bar;
pub mod grid;

pub use detail::{DetailAction, DetailComponent};
pub use filter_bar::{FilterAction, FilterBarComponent};
pub use grid::{GridAction, GridComponent};

/// Which part of the browser receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    Genres,
    #[default]
    Grid,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Genres,
            Focus::Genres => Focus::Grid,
            Focus::Grid => Focus::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Grid,
            Focus::Genres => Focus::Search,
            Focus::Grid => Focus::Genres,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Search => "Search",
            Focus::Genres => "Genres",
            Focus::Grid => "Grid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut focus = Focus::Search;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Search);
        assert_eq!(Focus::Search.previous(), Focus::Grid);
        assert_eq!(Focus::Grid.next(), Focus::Search);
    }
}
