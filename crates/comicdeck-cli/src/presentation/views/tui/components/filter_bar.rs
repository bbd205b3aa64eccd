//! Filter Bar Component
//!
//! Owns the search text buffer and the genre chip cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::{FilterBarViewModel, GenreChipViewModel};
use crate::presentation::views::tui::filter_bar::{FilterBarView, chip_rects, filter_rows};
use crate::presentation::views::tui::contains;

use super::Focus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// The search text changed; carries the full new value
    QueryChanged(String),
    /// A genre chip was chosen; carries its label
    SelectGenre(String),
    /// Leave the search box for the grid
    Submit,
    /// The search row was clicked
    FocusSearch,
}

#[derive(Debug, Default)]
pub struct FilterBarComponent {
    query: String,
    genre_cursor: usize,
    first_chip: usize,
    search_row: Rect,
    chip_hits: Vec<(usize, Rect)>,
}

impl FilterBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Keyboard input while the search box has focus
    pub fn handle_search_input(&mut self, key: KeyEvent) -> Option<FilterAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                if self.query.is_empty() {
                    return None;
                }
                self.query.clear();
                Some(FilterAction::QueryChanged(self.query.clone()))
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.query.push(c);
                Some(FilterAction::QueryChanged(self.query.clone()))
            }
            KeyCode::Backspace => {
                self.query.pop()?;
                Some(FilterAction::QueryChanged(self.query.clone()))
            }
            KeyCode::Enter | KeyCode::Down => Some(FilterAction::Submit),
            _ => None,
        }
    }

    /// Keyboard input while the genre chips have focus
    pub fn handle_genre_input(
        &mut self,
        key: KeyEvent,
        chips: &[GenreChipViewModel],
    ) -> Option<FilterAction> {
        if chips.is_empty() {
            return None;
        }
        self.clamp(chips.len());

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.genre_cursor = self.genre_cursor.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.genre_cursor = (self.genre_cursor + 1).min(chips.len() - 1);
                None
            }
            KeyCode::Home => {
                self.genre_cursor = 0;
                None
            }
            KeyCode::End => {
                self.genre_cursor = chips.len() - 1;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(FilterAction::SelectGenre(
                chips[self.genre_cursor].label.clone(),
            )),
            _ => None,
        }
    }

    /// Resolve a left click against the last laid-out frame
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        chips: &[GenreChipViewModel],
    ) -> Option<FilterAction> {
        if contains(self.search_row, column, row) {
            return Some(FilterAction::FocusSearch);
        }

        let (index, _) = self
            .chip_hits
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))?;
        let chip = chips.get(*index)?;
        self.genre_cursor = *index;
        Some(FilterAction::SelectGenre(chip.label.clone()))
    }

    /// Clamp the cursor, scroll it into view and record hit rectangles
    pub fn layout(&mut self, area: Rect, data: &FilterBarViewModel) {
        let labels: Vec<&str> = data.genres.iter().map(|c| c.label.as_str()).collect();
        self.clamp(labels.len());

        let (search_row, chip_row) = filter_rows(area);
        self.search_row = search_row;

        if self.genre_cursor < self.first_chip {
            self.first_chip = self.genre_cursor;
        }
        let mut rects = chip_rects(chip_row, &labels, self.first_chip);
        while self.first_chip < self.genre_cursor
            && !rects.iter().any(|(index, _)| *index == self.genre_cursor)
        {
            self.first_chip += 1;
            rects = chip_rects(chip_row, &labels, self.first_chip);
        }
        self.chip_hits = rects;
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FilterBarViewModel, focus: Focus) {
        self.layout(area, data);
        let view = FilterBarView::new(data)
            .search_focused(focus == Focus::Search)
            .genre_cursor((focus == Focus::Genres).then_some(self.genre_cursor))
            .first_chip(self.first_chip);
        f.render_widget(view, area);
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.genre_cursor = 0;
            self.first_chip = 0;
        } else {
            self.genre_cursor = self.genre_cursor.min(len - 1);
            self.first_chip = self.first_chip.min(len - 1);
        }
    }
}
