use crate::app::state::TextTarget;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Renders a text target inside a titled, rounded block.
pub struct ExpansionView<'a> {
    pub title: &'a str,
    pub target: &'a TextTarget,
    pub placeholder: &'a str,
    pub scroll: u16,
    pub focused: bool,
    pub centered: bool,
    pub text_style: Style,
    pub theme: &'a Theme,
}

impl Widget for ExpansionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let paragraph = if self.target.content.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                self.placeholder,
                self.theme.placeholder,
            )))
        } else {
            Paragraph::new(
                self.target
                    .content
                    .lines()
                    .map(|l| Line::from(Span::styled(l, self.text_style)))
                    .collect::<Vec<_>>(),
            )
        };

        let alignment = if self.centered {
            Alignment::Center
        } else {
            Alignment::Left
        };

        paragraph
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block)
            .render(area, buf);
    }
}
