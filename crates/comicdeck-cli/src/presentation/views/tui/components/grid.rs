//! Grid Component
//!
//! Encapsulates the card cursor, row scrolling and click hit-testing.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::GridViewModel;
use crate::presentation::views::tui::grid::{
    GridView, grid_cells, grid_columns, grid_inner, grid_visible_rows,
};
use crate::presentation::views::tui::contains;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// Open the detail for the card at this list index
    Open(usize),
}

#[derive(Debug)]
pub struct GridComponent {
    cursor: usize,
    first_row: usize,
    columns: usize,
    visible_rows: usize,
    cell_hits: Vec<(usize, Rect)>,
}

impl GridComponent {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            first_row: 0,
            columns: 1,
            visible_rows: 1,
            cell_hits: Vec::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle keyboard input
    ///
    /// `card_count` is the number of real cards on screen; placeholders and
    /// the empty state have none.
    pub fn handle_input(&mut self, key: KeyEvent, card_count: usize) -> Option<GridAction> {
        if card_count == 0 {
            return None;
        }
        self.cursor = self.cursor.min(card_count - 1);
        let last = card_count - 1;
        let page = self.columns * self.visible_rows;

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = (self.cursor + 1).min(last);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(self.columns);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + self.columns).min(last);
                None
            }
            KeyCode::PageUp => {
                self.cursor = self.cursor.saturating_sub(page);
                None
            }
            KeyCode::PageDown => {
                self.cursor = (self.cursor + page).min(last);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = last;
                None
            }
            KeyCode::Enter => Some(GridAction::Open(self.cursor)),
            _ => None,
        }
    }

    /// Resolve a left click against the last laid-out frame
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<GridAction> {
        let (index, _) = self
            .cell_hits
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))?;
        self.cursor = *index;
        Some(GridAction::Open(*index))
    }

    /// Clamp the cursor, keep its row visible and record hit rectangles
    pub fn layout(&mut self, area: Rect, data: &GridViewModel) {
        let inner = grid_inner(area);
        self.columns = grid_columns(inner.width);
        self.visible_rows = grid_visible_rows(inner.height);

        let card_count = data.card_count();
        self.cursor = self.cursor.min(card_count.saturating_sub(1));

        let total_rows = card_count.div_ceil(self.columns);
        let cursor_row = self.cursor / self.columns;
        if cursor_row < self.first_row {
            self.first_row = cursor_row;
        } else if cursor_row >= self.first_row + self.visible_rows {
            self.first_row = cursor_row + 1 - self.visible_rows;
        }
        self.first_row = self
            .first_row
            .min(total_rows.saturating_sub(self.visible_rows));

        self.cell_hits = match data {
            GridViewModel::Cards { cards } => grid_cells(inner, cards.len(), self.first_row),
            GridViewModel::Skeletons { .. } | GridViewModel::Empty { .. } => Vec::new(),
        };
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &GridViewModel, focused: bool) {
        self.layout(area, data);
        let view = GridView::new(data)
            .cursor(Some(self.cursor))
            .first_row(self.first_row)
            .focused(focused);
        f.render_widget(view, area);
    }
}

impl Default for GridComponent {
    fn default() -> Self {
        Self::new()
    }
}
