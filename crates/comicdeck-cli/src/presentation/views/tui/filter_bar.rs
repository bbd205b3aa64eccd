//! Filter Bar View Component
//!
//! Search input on the first row, genre chips on the second.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{FilterBarViewModel, GenreChipViewModel};

pub const FILTER_BAR_HEIGHT: u16 = 4;

const CHIP_GAP: u16 = 1;
const MORE_LEFT: &str = "‹ ";

fn chip_text(label: &str) -> String {
    format!(" {} ", label)
}

/// Split the filter bar into its search row and chip row
pub fn filter_rows(area: Rect) -> (Rect, Rect) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let search = Rect {
        height: inner.height.min(1),
        ..inner
    };
    let chips = Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1).min(1),
        ..inner
    };
    (search, chips)
}

/// Screen rectangles of the chips that fit in `row`, starting at `first`
pub fn chip_rects(row: Rect, labels: &[&str], first: usize) -> Vec<(usize, Rect)> {
    let mut rects = Vec::new();
    if row.height == 0 {
        return rects;
    }

    let mut x = row.x;
    if first > 0 {
        x = x.saturating_add(Span::raw(MORE_LEFT).width() as u16);
    }

    for (index, label) in labels.iter().enumerate().skip(first) {
        let width = Span::raw(chip_text(label)).width() as u16;
        if x.saturating_add(width) > row.right() {
            break;
        }
        rects.push((index, Rect::new(x, row.y, width, 1)));
        x = x.saturating_add(width + CHIP_GAP);
    }
    rects
}

pub struct FilterBarView<'a> {
    model: &'a FilterBarViewModel,
    search_focused: bool,
    genre_cursor: Option<usize>,
    first_chip: usize,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a FilterBarViewModel) -> Self {
        Self {
            model,
            search_focused: false,
            genre_cursor: None,
            first_chip: 0,
        }
    }

    pub fn search_focused(mut self, focused: bool) -> Self {
        self.search_focused = focused;
        self
    }

    /// Highlight the chip under the keyboard cursor (genres focused)
    pub fn genre_cursor(mut self, cursor: Option<usize>) -> Self {
        self.genre_cursor = cursor;
        self
    }

    pub fn first_chip(mut self, first: usize) -> Self {
        self.first_chip = first;
        self
    }

    fn chip_style(&self, index: usize, chip: &GenreChipViewModel) -> Style {
        let mut style = if chip.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        if self.genre_cursor == Some(index) {
            style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
        }
        style
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.search_focused || self.genre_cursor.is_some();
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .title(" Search & Filter ")
            .borders(Borders::ALL)
            .border_style(border)
            .render(area, buf);

        let (search_row, chip_row) = filter_rows(area);

        let mut search = vec![
            Span::styled("Search: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(self.model.query.as_str()),
        ];
        if self.search_focused {
            search.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        } else if self.model.query.is_empty() {
            search.push(Span::styled(
                "title, author, tag...",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        Paragraph::new(Line::from(search)).render(search_row, buf);

        let labels: Vec<&str> = self
            .model
            .genres
            .iter()
            .map(|chip| chip.label.as_str())
            .collect();
        let first = self.first_chip.min(labels.len().saturating_sub(1));
        let rects = chip_rects(chip_row, &labels, first);

        if first > 0 && chip_row.height > 0 {
            buf.set_string(
                chip_row.x,
                chip_row.y,
                MORE_LEFT,
                Style::default().add_modifier(Modifier::DIM),
            );
        }
        for (index, rect) in &rects {
            let chip = &self.model.genres[*index];
            buf.set_string(
                rect.x,
                rect.y,
                chip_text(&chip.label),
                self.chip_style(*index, chip),
            );
        }
        let shown_last = rects.last().map(|(index, _)| *index);
        if chip_row.width > 0 && shown_last.is_some_and(|last| last + 1 < labels.len()) {
            buf.set_string(
                chip_row.right() - 1,
                chip_row.y,
                "›",
                Style::default().add_modifier(Modifier::DIM),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{count, render_lines};

    fn model(query: &str, labels: &[(&str, bool)]) -> FilterBarViewModel {
        FilterBarViewModel {
            query: query.to_string(),
            genres: labels
                .iter()
                .map(|(label, active)| GenreChipViewModel {
                    label: label.to_string(),
                    active: *active,
                })
                .collect(),
        }
    }

    #[test]
    fn test_chip_rects_are_laid_out_left_to_right() {
        let row = Rect::new(2, 5, 40, 1);
        let rects = chip_rects(row, &["All", "Horror", "Noir"], 0);

        assert_eq!(
            rects,
            vec![
                (0, Rect::new(2, 5, 5, 1)),
                (1, Rect::new(8, 5, 8, 1)),
                (2, Rect::new(17, 5, 6, 1)),
            ]
        );
    }

    #[test]
    fn test_chip_rects_stop_at_row_end() {
        let row = Rect::new(0, 0, 14, 1);
        let rects = chip_rects(row, &["All", "Horror", "Noir"], 0);
        assert_eq!(rects.len(), 2);
    }

    #[test]
    fn test_chip_rects_scrolled_leave_room_for_marker() {
        let row = Rect::new(0, 0, 40, 1);
        let rects = chip_rects(row, &["All", "Horror", "Noir"], 1);
        assert_eq!(rects[0], (1, Rect::new(2, 0, 8, 1)));
    }

    #[test]
    fn test_renders_query_and_every_chip() {
        let vm = model("night", &[("All", true), ("Horror", false), ("Superhero", false)]);
        let lines = render_lines(FilterBarView::new(&vm).search_focused(true), 60, FILTER_BAR_HEIGHT);

        assert_eq!(count(&lines, "Search: night"), 1);
        assert_eq!(count(&lines, " All "), 1);
        assert_eq!(count(&lines, " Horror "), 1);
        assert_eq!(count(&lines, " Superhero "), 1);
    }

    #[test]
    fn test_placeholder_only_when_unfocused_and_empty() {
        let vm = model("", &[("All", true)]);
        let idle = render_lines(FilterBarView::new(&vm), 60, FILTER_BAR_HEIGHT);
        assert_eq!(count(&idle, "title, author, tag..."), 1);

        let typing = render_lines(FilterBarView::new(&vm).search_focused(true), 60, FILTER_BAR_HEIGHT);
        assert_eq!(count(&typing, "title, author, tag..."), 0);
    }
}
