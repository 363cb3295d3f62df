use crate::app::keymap::KeyMap;
use crate::app::{action::Action, state::AppMode, state::AppState, ui};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    keymap: &KeyMap,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }

    // An open error modal swallows everything but dismissal and quit.
    if app_state.last_error.is_some() {
        return match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Action::CancelMode),
                KeyCode::Char('q') if app_state.mode == AppMode::Browse => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::Search => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(Action::CancelMode),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::ClearSearch)
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                _ => Some(Action::SearchInput(key)),
            },
            _ => None,
        },
        AppMode::Browse => match event {
            Event::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Some(Action::Quit);
                }
                keymap.get_action(key)
            }
            Event::Mouse(mouse) => {
                let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                let layout = ui::get_layout(area, app_state);

                match mouse.kind {
                    MouseEventKind::ScrollUp if contains(layout.results, mouse.column, mouse.row) => {
                        Some(Action::ScrollResultsUp(1))
                    }
                    MouseEventKind::ScrollDown
                        if contains(layout.results, mouse.column, mouse.row) =>
                    {
                        Some(Action::ScrollResultsDown(1))
                    }
                    MouseEventKind::Down(MouseButton::Left)
                        if contains(layout.search, mouse.column, mouse.row) =>
                    {
                        Some(Action::FocusSearch)
                    }
                    _ => None,
                }
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ExpansionError;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    const SIZE: Size = Size {
        width: 80,
        height: 24,
    };

    #[test]
    fn test_search_mode_routes_keys_to_search_bar() {
        let state = AppState {
            mode: AppMode::Search,
            ..AppState::default()
        };
        let keymap = KeyMap::default();

        // 'q' is text while searching.
        assert!(matches!(
            map_event_to_action(press(KeyCode::Char('q')), &state, &keymap, SIZE),
            Some(Action::SearchInput(_))
        ));
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state, &keymap, SIZE),
            Some(Action::CancelMode)
        );
        assert_eq!(
            map_event_to_action(
                Event::Key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
                &state,
                &keymap,
                SIZE
            ),
            Some(Action::ClearSearch)
        );
    }

    #[test]
    fn test_error_modal_blocks_keymap() {
        let mut state = AppState::default();
        state.report_error(ExpansionError::Network("boom".to_string()));
        let keymap = KeyMap::default();

        assert_eq!(
            map_event_to_action(press(KeyCode::Char('r')), &state, &keymap, SIZE),
            None
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state, &keymap, SIZE),
            Some(Action::CancelMode)
        );
    }

    #[test]
    fn test_click_on_search_bar_focuses_it() {
        let state = AppState::default();
        let keymap = KeyMap::default();
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height), &state);

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: layout.search.x + 2,
            row: layout.search.y + 1,
            modifiers: KeyModifiers::empty(),
        });
        assert_eq!(
            map_event_to_action(click, &state, &keymap, SIZE),
            Some(Action::FocusSearch)
        );
    }
}
