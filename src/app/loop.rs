use crate::app::{
    action::Action,
    command::Command,
    debounce::Debouncer,
    handler::{handle_command, Services},
    input::map_event_to_action,
    keymap::KeyMap,
    reducer,
    state::AppState,
    ui,
};
use crate::domain::models::SearchQuery;
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    services: Services,
    debounce_delay: Duration,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, debounce_delay, event_rx).await?;
    Ok(())
}

/// Drives the app until quit and hands back the final state.
pub async fn run_loop_with_events<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'a>,
    services: Services,
    debounce_delay: Duration,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState<'a>> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let keymap = KeyMap::default();
    let theme = Theme::default();

    // Search-as-you-type: the debouncer turns a burst of edits into one request.
    let search_tx = action_tx.clone();
    let search_debouncer = Debouncer::new(debounce_delay, move |query: SearchQuery| {
        if let Err(e) = search_tx.try_send(Action::SearchRequested(query)) {
            tracing::warn!("dropping debounced search: {e}");
        }
    });

    // Initial Load: what the page shows when it opens.
    let mut initial = vec![Action::RandomIntoResults];
    if app_state.banner.is_some() {
        initial.insert(0, Action::RefreshRandom);
    }
    for action in initial {
        if let Some(cmd) = reducer::update(&mut app_state, action) {
            handle_command(cmd, &services, action_tx.clone())?;
        }
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state, &theme);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, &keymap, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            match command {
                Some(Command::DebounceSearch(query)) => search_debouncer.trigger(query),
                Some(Command::CancelPendingSearch) => search_debouncer.cancel(),
                Some(cmd) => handle_command(cmd, &services, action_tx.clone())?,
                None => {}
            }
        }
    }

    Ok(app_state)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
