use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn get_groups(&self) -> Vec<FooterGroup> {
        if self.state.last_error.is_some() {
            return vec![FooterGroup {
                name: "ERROR",
                items: vec![FooterItem {
                    key: "Esc",
                    desc: "dismiss",
                }],
            }];
        }

        match self.state.mode {
            AppMode::Browse => vec![
                FooterGroup {
                    name: "FETCH",
                    items: vec![
                        FooterItem {
                            key: "r",
                            desc: "random",
                        },
                        FooterItem {
                            key: "R",
                            desc: "random→list",
                        },
                        FooterItem {
                            key: "a",
                            desc: "all",
                        },
                        FooterItem {
                            key: "/",
                            desc: "search",
                        },
                    ],
                },
                FooterGroup {
                    name: "LIST",
                    items: vec![
                        FooterItem {
                            key: "j/k",
                            desc: "scroll",
                        },
                        FooterItem {
                            key: "y",
                            desc: "copy",
                        },
                    ],
                },
                FooterGroup {
                    name: "APP",
                    items: vec![FooterItem {
                        key: "q",
                        desc: "quit",
                    }],
                },
            ],
            AppMode::Search => vec![FooterGroup {
                name: "SEARCH",
                items: vec![
                    FooterItem {
                        key: "Esc/Enter",
                        desc: "done",
                    },
                    FooterItem {
                        key: "ctrl+u",
                        desc: "clear",
                    },
                ],
            }],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  {}  ", err.error.kind()), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_info)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in self.get_groups() {
            if group.items.is_empty() {
                continue;
            }

            let first_item = &group.items[0];
            let first_item_width = first_item.key.len() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            if area.width > 100 {
                let group_label = Span::styled(format!("{}: ", group.name), theme.header_item);
                if current_width + group_label.width() + first_item_width < available_width {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = key_str.len() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                spans.push(Span::styled(key_str, theme.footer_segment_key));
                spans.push(Span::styled(desc_str, theme.footer_segment_val));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
