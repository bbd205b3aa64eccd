//! Detail Overlay View Component
//!
//! Modal drawn above the browser for the selected comic. Everything outside
//! `modal_area` counts as backdrop.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::DetailViewModel;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 14;
const CLOSE_LABEL: &str = "[x]";

/// Centered modal rectangle inside the full screen `area`
pub fn modal_area(area: Rect) -> Rect {
    let width = (area.width * 7 / 10).max(MIN_WIDTH).min(area.width);
    let height = (area.height * 8 / 10).max(MIN_HEIGHT).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Position of the close control on the modal's top border
pub fn close_button_area(modal: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    Rect::new(
        modal.right().saturating_sub(width + 2).max(modal.x),
        modal.y,
        width.min(modal.width),
        modal.height.min(1),
    )
}

pub struct DetailView<'a> {
    model: &'a DetailViewModel,
}

impl<'a> DetailView<'a> {
    pub fn new(model: &'a DetailViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DetailView<'a> {
    /// `area` is the whole screen; the modal is placed inside it
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_area(area);
        let comic = &self.model.comic;

        Clear.render(modal, buf);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", comic.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let close = close_button_area(modal);
        buf.set_string(
            close.x,
            close.y,
            CLOSE_LABEL,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );

        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let label = Style::default().add_modifier(Modifier::BOLD);
        let tags = if comic.tags.is_empty() {
            "(none)".to_string()
        } else {
            comic
                .tags
                .iter()
                .map(|tag| format!("#{}", tag))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let cover = if comic.cover_url.is_empty() {
            "(none)"
        } else {
            comic.cover_url.as_str()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Author: ", label),
                Span::raw(comic.author.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Genre:  ", label),
                Span::styled(comic.genre.as_str(), Style::default().fg(Color::Magenta)),
                Span::raw("    "),
                Span::styled("Rating: ", label),
                Span::styled(
                    format!("★ {}", comic.rating_label),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::styled("Tags:   ", label),
                Span::styled(tags, Style::default().fg(Color::Cyan)),
            ]),
            Line::from(vec![
                Span::styled("Cover:  ", label),
                Span::styled(cover, Style::default().add_modifier(Modifier::DIM)),
            ]),
            Line::default(),
            Line::from(comic.description.as_str()),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);

        let button = Line::from(vec![
            Span::styled(
                format!("[ {} ]", self.model.select_label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Esc to close", Style::default().add_modifier(Modifier::DIM)),
        ]);
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .render(footer, buf);
    }
}
