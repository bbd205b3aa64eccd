//! Error Banner View Component

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::BannerViewModel;

use super::status_level_to_color;

pub const BANNER_HEIGHT: u16 = 3;

pub struct BannerView<'a> {
    model: &'a BannerViewModel,
}

impl<'a> BannerView<'a> {
    pub fn new(model: &'a BannerViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for BannerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);
        let block = Block::default()
            .title(" Could not load comics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let line = Line::from(vec![
            Span::styled(
                self.model.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  (change a filter or press Ctrl-R to retry)",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);

        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use crate::presentation::views::tui::test_support::{count, render_lines};

    #[test]
    fn test_banner_shows_message() {
        let model = BannerViewModel {
            message: "Catalog offline".to_string(),
            level: StatusLevel::Error,
        };
        let lines = render_lines(BannerView::new(&model), 90, BANNER_HEIGHT);
        assert_eq!(count(&lines, "Catalog offline"), 1);
    }
}
