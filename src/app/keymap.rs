use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Browse-mode bindings. Search mode is handled in `input`.
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();

        global.insert(key('q'), Action::Quit);
        global.insert(key('r'), Action::RefreshRandom);
        global.insert(shifted('R'), Action::RandomIntoResults);
        global.insert(key('a'), Action::LoadAll);
        global.insert(key('y'), Action::CopyResults);
        global.insert(key('/'), Action::FocusSearch);
        global.insert(key('i'), Action::FocusSearch);
        global.insert(key('j'), Action::ScrollResultsDown(1));
        global.insert(code(KeyCode::Down), Action::ScrollResultsDown(1));
        global.insert(key('k'), Action::ScrollResultsUp(1));
        global.insert(code(KeyCode::Up), Action::ScrollResultsUp(1));
        global.insert(code(KeyCode::PageDown), Action::ScrollResultsDown(10));
        global.insert(code(KeyCode::PageUp), Action::ScrollResultsUp(10));
        global.insert(code(KeyCode::Esc), Action::CancelMode);

        Self { global }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        let event = KeyEvent::new(event.code, event.modifiers);
        self.global.get(&event).cloned().or_else(|| {
            // Some terminals report uppercase letters without SHIFT.
            match event.code {
                KeyCode::Char(c) if c.is_ascii_uppercase() => {
                    self.global.get(&shifted(c)).cloned()
                }
                _ => None,
            }
        })
    }
}

fn key(c: char) -> KeyEvent {
    code(KeyCode::Char(c))
}

fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn shifted(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}
