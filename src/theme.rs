use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub banner_text: Style,
    pub results_text: Style,
    pub placeholder: Style,

    pub header_logo: Style,
    pub header_url: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header_warn: Style,
    pub header: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub list_item: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Rgb(203, 56, 55)), // npm red

            banner_text: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            results_text: Style::default().fg(Color::Rgb(200, 200, 200)),
            placeholder: Style::default().fg(Color::Rgb(100, 100, 100)),

            header_logo: Style::default()
                .bg(Color::Rgb(203, 56, 55))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            header_url: Style::default().fg(Color::Rgb(130, 130, 130)),
            header_active: Style::default()
                .fg(Color::Rgb(203, 56, 55))
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().fg(Color::Rgb(150, 150, 150)),
            header_warn: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),

            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            footer_segment_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().fg(Color::White),
            status_info: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            list_item: Style::default().fg(Color::Rgb(180, 180, 180)),
        }
    }
}
