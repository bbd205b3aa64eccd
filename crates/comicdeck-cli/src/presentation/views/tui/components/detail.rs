//! Detail Component
//!
//! Tracks where the modal and its close control were drawn so that clicks
//! can be classified as close, backdrop or inside.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::DetailViewModel;
use crate::presentation::views::tui::detail::{DetailView, close_button_area, modal_area};
use crate::presentation::views::tui::contains;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    Close,
}

#[derive(Debug, Default)]
pub struct DetailComponent {
    modal: Rect,
    close: Rect,
}

impl DetailComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// The select button is inert; only dismissal keys do anything
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => Some(DetailAction::Close),
            _ => None,
        }
    }

    /// Clicks on `[x]` or on the backdrop close the modal
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<DetailAction> {
        if contains(self.close, column, row) || !contains(self.modal, column, row) {
            Some(DetailAction::Close)
        } else {
            None
        }
    }

    pub fn layout(&mut self, screen: Rect) {
        self.modal = modal_area(screen);
        self.close = close_button_area(self.modal);
    }

    pub fn render(&mut self, f: &mut Frame, screen: Rect, data: &DetailViewModel) {
        self.layout(screen);
        f.render_widget(DetailView::new(data), screen);
    }
}
