use crate::app::state::{AppMode, AppState};
use crate::components::expansion_view::ExpansionView;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::ErrorModal;
use crate::components::search_bar::SearchBar;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const HEADER_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;
const BANNER_HEIGHT: u16 = 5;
const SEARCH_HEIGHT: u16 = 3;
const MIN_RESULTS_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub header: Rect,
    pub banner: Rect,
    pub search: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// The results panel is as tall as its `rows` attribute (plus borders), up to
/// whatever the terminal has left.
pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let banner_height = if app_state.banner.is_some() {
        BANNER_HEIGHT
    } else {
        0
    };
    let available = area
        .height
        .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT + banner_height + SEARCH_HEIGHT);
    let wanted = app_state
        .results
        .as_ref()
        .map_or(0, |r| r.rows.min(u16::MAX as usize - 2) as u16)
        + 2;
    let results_height = wanted.max(MIN_RESULTS_HEIGHT).min(available);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Length(results_height),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        banner: chunks[1],
        search: chunks[2],
        results: chunks[3],
        footer: chunks[5],
    }
}

fn has_area(r: Rect) -> bool {
    r.width > 0 && r.height > 0
}

pub fn draw(f: &mut Frame, app_state: &AppState, theme: &Theme) {
    if !has_area(f.area()) {
        return;
    }

    let layout = get_layout(f.area(), app_state);

    // --- Header ---
    if has_area(layout.header) {
        let header = Header {
            base_url: &app_state.base_url,
            in_flight: app_state.in_flight,
            spinner: &app_state.spinner,
            theme,
        };
        f.render_widget(header, layout.header);
    }

    // --- Banner (current expansion) ---
    if let Some(banner) = &app_state.banner {
        if has_area(layout.banner) {
            let view = ExpansionView {
                title: "NPM EXPANSION",
                target: banner,
                placeholder: "press r for a random expansion",
                scroll: 0,
                focused: false,
                centered: true,
                text_style: theme.banner_text,
                theme,
            };
            f.render_widget(view, layout.banner);
        }
    }

    // --- Search ---
    if has_area(layout.search) {
        let bar = SearchBar {
            text_area: &app_state.search.text_area,
            focused: app_state.mode == AppMode::Search,
            theme,
        };
        f.render_widget(bar, layout.search);
    }

    // --- Results ---
    if let Some(results) = &app_state.results {
        if has_area(layout.results) {
            let view = ExpansionView {
                title: "RESULTS",
                target: results,
                placeholder: "press a to list every expansion",
                scroll: app_state.results_scroll,
                focused: app_state.mode == AppMode::Browse,
                centered: false,
                text_style: theme.results_text,
                theme,
            };
            f.render_widget(view, layout.results);
        }
    }

    // --- Footer ---
    if has_area(layout.footer) {
        let footer = Footer {
            state: app_state,
            theme,
        };
        f.render_widget(footer, layout.footer);
    }

    // --- Error Modal ---
    if let Some(error) = &app_state.last_error {
        f.render_widget(ErrorModal { theme, error }, f.area());
    }
}
