use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub base_url: &'a str,
    pub in_flight: usize,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" NPMX ", self.theme.header_logo),
            Span::styled(format!(" {} ", self.base_url), self.theme.header_url),
        ];

        if self.in_flight > 0 {
            spans.push(Span::styled(
                format!("{} {} request(s) ", self.spinner, self.in_flight),
                self.theme.header_warn,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
