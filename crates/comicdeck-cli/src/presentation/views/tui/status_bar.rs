//! Status Bar View Component
//!
//! Renders the footer: status message on the left, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub const STATUS_BAR_HEIGHT: u16 = 3;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    focus_label: &'a str,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self {
            model,
            focus_label: "",
        }
    }

    pub fn focus_label(mut self, label: &'a str) -> Self {
        self.focus_label = label;
        self
    }
}

fn hint(key: &str, action: &str) -> [Span<'static>; 2] {
    [
        Span::styled(key.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {} ", action)),
    ]
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let mut status = vec![Span::styled(
            self.model.status_message.as_str(),
            Style::default().fg(color),
        )];
        if !self.focus_label.is_empty() {
            status.push(Span::raw(format!(" | focus: {}", self.focus_label)));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let help: Vec<Span> = [
            hint("[Tab]", "focus"),
            hint("[Enter]", "open"),
            hint("[^R]", "refresh"),
            hint("[Esc]", "close/quit"),
        ]
        .into_iter()
        .flatten()
        .collect();
        Paragraph::new(Line::from(help))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
