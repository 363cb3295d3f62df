use crate::app::state::AppTextArea;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct SearchBar<'a, 'b> {
    pub text_area: &'a AppTextArea<'b>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let is_empty = self.text_area.lines().iter().all(|l| l.is_empty());
        if is_empty && !self.focused {
            Paragraph::new(Span::styled(
                "press / and type to search expansions",
                self.theme.placeholder,
            ))
            .render(inner, buf);
        } else {
            Widget::render(self.text_area, inner, buf);
        }
    }
}
