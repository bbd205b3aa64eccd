//! Hero View Component
//!
//! Static banner at the top of the browser.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::HeroViewModel;

pub const HERO_HEIGHT: u16 = 4;

pub struct HeroView<'a> {
    model: &'a HeroViewModel,
}

impl<'a> HeroView<'a> {
    pub fn new(model: &'a HeroViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeroView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Magenta));

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    self.model.title.as_str(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    self.model.tagline.as_str(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    self.model.endpoint.as_str(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::raw(format!("  · {} loaded", self.model.loaded_count)),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{count, render_lines};

    #[test]
    fn test_hero_shows_endpoint_and_count() {
        let model = HeroViewModel {
            title: "COMICDECK".to_string(),
            tagline: "Find your next favourite series".to_string(),
            endpoint: "http://localhost:8000/api/comics".to_string(),
            loaded_count: 6,
        };
        let lines = render_lines(HeroView::new(&model), 80, HERO_HEIGHT);

        assert_eq!(count(&lines, "COMICDECK"), 1);
        assert_eq!(count(&lines, "http://localhost:8000/api/comics"), 1);
        assert_eq!(count(&lines, "6 loaded"), 1);
    }
}
