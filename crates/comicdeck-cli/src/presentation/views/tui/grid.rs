//! Catalog Grid View Component
//!
//! Responsive grid of comic cards. While a fetch is pending the same cells
//! are filled with skeleton placeholders; an empty successful result shows
//! a single centered message.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{one_line, truncate};
use crate::presentation::view_models::{ComicCardViewModel, GridViewModel};

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 7;

/// Number of card columns that fit in `width` (at least one)
pub fn grid_columns(width: u16) -> usize {
    ((width / CARD_WIDTH) as usize).max(1)
}

/// Number of card rows that fit in `height` (at least one)
pub fn grid_visible_rows(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}

/// Area inside the grid's title rule
pub fn grid_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::TOP).inner(area)
}

/// Screen rectangles for the cells visible when scrolled to `first_row`
pub fn grid_cells(area: Rect, count: usize, first_row: usize) -> Vec<(usize, Rect)> {
    let columns = grid_columns(area.width);
    let rows = grid_visible_rows(area.height);
    let cell_width = (area.width / columns as u16).max(1);

    let mut cells = Vec::new();
    for row in first_row..first_row + rows {
        for column in 0..columns {
            let index = row * columns + column;
            if index >= count {
                return cells;
            }
            let rect = Rect::new(
                area.x + column as u16 * cell_width,
                area.y + (row - first_row) as u16 * CARD_HEIGHT,
                cell_width,
                CARD_HEIGHT,
            )
            .intersection(area);
            if !rect.is_empty() {
                cells.push((index, rect));
            }
        }
    }
    cells
}

/// Screen rectangles for `count` placeholders, all of them inside `area`.
///
/// Placeholders cannot be scrolled to, so rows shrink from the card height
/// down to a two-line box and extra columns are added when even that does
/// not fit.
pub fn skeleton_cells(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.is_empty() {
        return Vec::new();
    }
    let fitting_rows = ((area.height / 2) as usize).max(1);
    let columns = grid_columns(area.width).max(count.div_ceil(fitting_rows));
    let rows = count.div_ceil(columns);
    let cell_width = (area.width / columns as u16).max(1);
    let cell_height = (area.height / rows as u16).clamp(1, CARD_HEIGHT);

    (0..count)
        .map(|index| {
            Rect::new(
                area.x + (index % columns) as u16 * cell_width,
                area.y + (index / columns) as u16 * cell_height,
                cell_width,
                cell_height,
            )
            .intersection(area)
        })
        .filter(|rect| !rect.is_empty())
        .collect()
}

pub struct GridView<'a> {
    model: &'a GridViewModel,
    cursor: Option<usize>,
    first_row: usize,
    focused: bool,
}

impl<'a> GridView<'a> {
    pub fn new(model: &'a GridViewModel) -> Self {
        Self {
            model,
            cursor: None,
            first_row: 0,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn first_row(mut self, first_row: usize) -> Self {
        self.first_row = first_row;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> String {
        match self.model {
            GridViewModel::Skeletons { .. } => " Loading comics... ".to_string(),
            GridViewModel::Cards { cards } => format!(" Comics ({}) ", cards.len()),
            GridViewModel::Empty { .. } => " Comics (0) ".to_string(),
        }
    }
}

impl<'a> Widget for GridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rule = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .title(self.title())
            .borders(Borders::TOP)
            .border_style(rule)
            .render(area, buf);
        let inner = grid_inner(area);

        match self.model {
            GridViewModel::Skeletons { count } => {
                for rect in skeleton_cells(inner, *count) {
                    SkeletonCardView.render(rect, buf);
                }
            }
            GridViewModel::Empty { message } => {
                let middle = Rect {
                    y: inner.y + inner.height / 2,
                    height: inner.height.min(1),
                    ..inner
                };
                Paragraph::new(message.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().add_modifier(Modifier::ITALIC))
                    .render(middle, buf);
            }
            GridViewModel::Cards { cards } => {
                for (index, rect) in grid_cells(inner, cards.len(), self.first_row) {
                    let highlighted = self.focused && self.cursor == Some(index);
                    CardView::new(&cards[index])
                        .highlighted(highlighted)
                        .render(rect, buf);
                }
            }
        }
    }
}

/// One comic card
pub struct CardView<'a> {
    model: &'a ComicCardViewModel,
    highlighted: bool,
}

impl<'a> CardView<'a> {
    pub fn new(model: &'a ComicCardViewModel) -> Self {
        Self {
            model,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.highlighted {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let comic = self.model;
        let tags = comic
            .tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ");

        let lines = vec![
            Line::from(Span::styled(
                truncate(&comic.title, width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&format!("by {}", comic.author), width),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(vec![
                Span::styled(
                    truncate(&comic.genre, width.saturating_sub(7)),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("★ {}", comic.rating_label),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(Span::styled(
                truncate(&tags, width),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(one_line(&comic.description, width)),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Placeholder card shown while loading
pub struct SkeletonCardView;

impl Widget for SkeletonCardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().add_modifier(Modifier::DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let bars = [width * 3 / 4, width / 2, width * 2 / 3, width / 3];
        let lines: Vec<Line> = bars
            .iter()
            .map(|len| {
                Line::from(Span::styled(
                    "░".repeat(*len),
                    Style::default().fg(Color::DarkGray),
                ))
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
