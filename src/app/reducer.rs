use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState},
};
use crate::domain::error::ExpansionError;
use crate::domain::models::{RenderTarget, RequestSeq};
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Navigation ---
        Action::ScrollResultsDown(amount) => {
            let last_line = state
                .results
                .as_ref()
                .map_or(0, |r| r.content.lines().count().saturating_sub(1));
            let max_scroll = u16::try_from(last_line).unwrap_or(u16::MAX);
            state.results_scroll = state.results_scroll.saturating_add(amount).min(max_scroll);
        }
        Action::ScrollResultsUp(amount) => {
            state.results_scroll = state.results_scroll.saturating_sub(amount);
        }

        // --- Mode Switching ---
        Action::FocusSearch => {
            state.mode = AppMode::Search;
        }
        Action::CancelMode => {
            if state.last_error.is_some() {
                state.last_error = None;
            } else {
                state.mode = AppMode::Browse;
            }
        }
        Action::ClearSearch => {
            state.search.clear();
            return Some(Command::CancelPendingSearch);
        }
        Action::SearchInput(key) => {
            if state.search.text_area.input(key) {
                return Some(Command::DebounceSearch(state.search.query()));
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Expansion Intents ---
        Action::RefreshRandom => return fetch_random(state, RenderTarget::Banner),
        Action::RandomIntoResults => return fetch_random(state, RenderTarget::Results),
        Action::LoadAll => {
            let seq = state.issue_seq();
            tracing::debug!(seq, "loading all expansions");
            return Some(Command::LoadAll(seq));
        }
        Action::SearchRequested(query) => {
            let seq = state.issue_seq();
            tracing::debug!(seq, %query, "searching");
            return Some(Command::Search(seq, query));
        }
        Action::CopyResults => match state.target(RenderTarget::Results) {
            Ok(results) => return Some(Command::CopyToClipboard(results.content.clone())),
            Err(e) => state.report_error(e),
        },

        // --- Async Results ---
        Action::ExpansionLoaded {
            seq,
            target,
            result,
        } => {
            state.settle_request();
            match result {
                Ok(expansion) => match state.target_mut(target) {
                    Ok(element) => {
                        if !element.apply_single(seq, &expansion) {
                            tracing::debug!(seq, %target, "discarding stale expansion");
                        }
                    }
                    Err(e) => state.report_error(e),
                },
                Err(e) => report_failure(state, seq, target, e),
            }
        }
        Action::ExpansionsLoaded { seq, result } => {
            state.settle_request();
            match result {
                Ok(list) => match state.target_mut(RenderTarget::Results) {
                    Ok(element) => {
                        if element.apply_list(seq, &list) {
                            state.results_scroll = 0;
                        } else {
                            tracing::debug!(seq, "discarding stale expansion list");
                        }
                    }
                    Err(e) => state.report_error(e),
                },
                Err(e) => report_failure(state, seq, RenderTarget::Results, e),
            }
        }
        Action::ClipboardWritten { lines, result } => match result {
            Ok(()) => {
                state.status_message = Some(format!("Copied {lines} line(s) to the clipboard."));
                state.status_clear_time = Some(Instant::now() + STATUS_TTL);
            }
            Err(e) => state.report_error(e),
        },

        Action::Tick => {
            state.advance_spinner();
            if state.status_clear_time.is_some_and(|t| Instant::now() >= t) {
                state.status_message = None;
                state.status_clear_time = None;
            }
        }
    }
    None
}

fn fetch_random(state: &mut AppState, target: RenderTarget) -> Option<Command> {
    // Fail before going to the network if there is nowhere to put the answer.
    if let Err(e) = state.target(target) {
        state.report_error(e);
        return None;
    }
    let seq = state.issue_seq();
    tracing::debug!(seq, %target, "fetching random expansion");
    Some(Command::FetchRandom(seq, target))
}

/// A failed request still settles its target, so an older request that
/// answers later cannot overwrite it.
fn report_failure(
    state: &mut AppState,
    seq: RequestSeq,
    target: RenderTarget,
    error: ExpansionError,
) {
    match state.target_mut(target) {
        Ok(element) => {
            if element.settle(seq) {
                state.report_error(error);
            } else {
                tracing::debug!(seq, %target, kind = error.kind(), "dropping superseded failure");
            }
        }
        Err(_) => state.report_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{SearchState, TextTarget};
    use crate::domain::models::{Expansion, ExpansionList, SearchQuery};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn list(items: &[&str]) -> ExpansionList {
        ExpansionList::from(items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_random_renders_into_banner() {
        let mut state = AppState::default();

        let cmd = update(&mut state, Action::RefreshRandom);
        assert_eq!(cmd, Some(Command::FetchRandom(1, RenderTarget::Banner)));
        assert_eq!(state.in_flight, 1);

        update(
            &mut state,
            Action::ExpansionLoaded {
                seq: 1,
                target: RenderTarget::Banner,
                result: Ok(Expansion::from("left-pad is now a core language feature")),
            },
        );
        assert_eq!(
            state.banner.as_ref().unwrap().content,
            "left-pad is now a core language feature"
        );
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_failed_random_keeps_previous_banner() {
        let mut state = AppState {
            next_seq: 3,
            ..AppState::default()
        };
        state.banner = Some(TextTarget {
            content: "nobody pays maintainers".to_string(),
            rows: 1,
            settled_seq: 3,
        });

        let Some(Command::FetchRandom(seq, target)) = update(&mut state, Action::RefreshRandom)
        else {
            panic!("expected a fetch command");
        };
        update(
            &mut state,
            Action::ExpansionLoaded {
                seq,
                target,
                result: Err(ExpansionError::Network("connection refused".to_string())),
            },
        );

        assert_eq!(state.banner.as_ref().unwrap().content, "nobody pays maintainers");
        let error = state.last_error.as_ref().unwrap();
        assert!(matches!(error.error, ExpansionError::Network(_)));
    }

    #[test]
    fn test_search_results_render_with_row_count() {
        let mut state = AppState::default();

        let cmd = update(&mut state, Action::SearchRequested(SearchQuery::from("pad")));
        assert_eq!(cmd, Some(Command::Search(1, SearchQuery::from("pad"))));

        update(
            &mut state,
            Action::ExpansionsLoaded {
                seq: 1,
                result: Ok(list(&["left-pad", "right-pad"])),
            },
        );
        let results = state.results.as_ref().unwrap();
        assert_eq!(results.content, "left-pad\nright-pad");
        assert_eq!(results.rows, 2);
    }

    #[test]
    fn test_late_response_for_older_search_is_discarded() {
        let mut state = AppState::default();
        let Some(Command::Search(first, _)) =
            update(&mut state, Action::SearchRequested(SearchQuery::from("pa")))
        else {
            panic!("expected a search command");
        };
        let Some(Command::Search(second, _)) =
            update(&mut state, Action::SearchRequested(SearchQuery::from("pad")))
        else {
            panic!("expected a search command");
        };

        // The newer request answers first.
        update(
            &mut state,
            Action::ExpansionsLoaded {
                seq: second,
                result: Ok(list(&["left-pad"])),
            },
        );
        update(
            &mut state,
            Action::ExpansionsLoaded {
                seq: first,
                result: Ok(list(&["pants", "papers", "pals"])),
            },
        );

        let results = state.results.as_ref().unwrap();
        assert_eq!(results.content, "left-pad");
        assert_eq!(results.rows, 1);
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_load_all_then_random_into_results() {
        let mut state = AppState::default();
        let Some(Command::LoadAll(all_seq)) = update(&mut state, Action::LoadAll) else {
            panic!("expected load all");
        };
        update(
            &mut state,
            Action::ExpansionsLoaded {
                seq: all_seq,
                result: Ok(list(&["a", "b", "c"])),
            },
        );
        let Some(Command::FetchRandom(seq, target)) =
            update(&mut state, Action::RandomIntoResults)
        else {
            panic!("expected a fetch command");
        };
        assert_eq!(target, RenderTarget::Results);
        update(
            &mut state,
            Action::ExpansionLoaded {
                seq,
                target,
                result: Ok(Expansion::from("b")),
            },
        );
        let results = state.results.as_ref().unwrap();
        assert_eq!(results.content, "b");
        assert_eq!(results.rows, 3);
    }

    #[test]
    fn test_random_without_banner_reports_missing_target() {
        let mut state = AppState {
            banner: None,
            ..AppState::default()
        };
        assert_eq!(update(&mut state, Action::RefreshRandom), None);
        assert_eq!(state.in_flight, 0);
        assert_eq!(
            state.last_error.as_ref().unwrap().error,
            ExpansionError::RenderTargetMissing(RenderTarget::Banner)
        );
    }

    #[test]
    fn test_copy_results_uses_rendered_text() {
        let mut state = AppState::default();
        state.results = Some(TextTarget {
            content: "left-pad\nright-pad".to_string(),
            rows: 2,
            settled_seq: 1,
        });
        assert_eq!(
            update(&mut state, Action::CopyResults),
            Some(Command::CopyToClipboard("left-pad\nright-pad".to_string()))
        );
    }

    #[test]
    fn test_clipboard_failure_is_reported() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::ClipboardWritten {
                lines: 2,
                result: Err(ExpansionError::Clipboard("denied".to_string())),
            },
        );
        assert!(state.status_message.is_none());
        assert!(matches!(
            state.last_error.as_ref().unwrap().error,
            ExpansionError::Clipboard(_)
        ));
    }

    #[test]
    fn test_typing_schedules_debounced_search() {
        let mut state = AppState::default();
        update(&mut state, Action::FocusSearch);
        assert_eq!(state.mode, AppMode::Search);

        let key = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(
            update(&mut state, Action::SearchInput(key)),
            Some(Command::DebounceSearch(SearchQuery::from("p")))
        );

        // Cursor movement does not change the text.
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(update(&mut state, Action::SearchInput(left)), None);
    }

    #[test]
    fn test_clear_search_cancels_pending() {
        let mut state = AppState {
            search: SearchState::with_text("pad"),
            ..AppState::default()
        };
        assert_eq!(
            update(&mut state, Action::ClearSearch),
            Some(Command::CancelPendingSearch)
        );
        assert_eq!(state.search.query(), SearchQuery::default());
    }

    #[test]
    fn test_cancel_mode_dismisses_error_first() {
        let mut state = AppState::default();
        state.mode = AppMode::Search;
        state.report_error(ExpansionError::Parse("expected value".to_string()));

        update(&mut state, Action::CancelMode);
        assert!(state.last_error.is_none());
        assert_eq!(state.mode, AppMode::Search);

        update(&mut state, Action::CancelMode);
        assert_eq!(state.mode, AppMode::Browse);
    }

    #[test]
    fn test_scroll_results() {
        let mut state = AppState::default();
        state.results.as_mut().unwrap().content = (0..20)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");

        update(&mut state, Action::ScrollResultsDown(5));
        assert_eq!(state.results_scroll, 5);

        update(&mut state, Action::ScrollResultsDown(100));
        assert_eq!(state.results_scroll, 19);

        update(&mut state, Action::ScrollResultsUp(25));
        assert_eq!(state.results_scroll, 0);
    }

    #[test]
    fn test_superseded_search_failure_is_dropped() {
        let mut state = AppState::default();
        state.mode = AppMode::Search;
        let Some(Command::Search(first, _)) =
            update(&mut state, Action::SearchRequested(SearchQuery::from("pa")))
        else {
            panic!("expected a search command");
        };
        let Some(Command::Search(second, _)) =
            update(&mut state, Action::SearchRequested(SearchQuery::from("pad")))
        else {
            panic!("expected a search command");
        };

        update(
            &mut state,
            Action::ExpansionsLoaded {
                seq: second,
                result: Ok(list(&["left-pad"])),
            },
        );
        update(
            &mut state,
            Action::ExpansionsLoaded {
                seq: first,
                result: Err(ExpansionError::Network("timeout".to_string())),
            },
        );

        assert!(state.last_error.is_none());
        assert_eq!(state.results.as_ref().unwrap().content, "left-pad");
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_older_success_after_newer_failure_is_dropped() {
        let mut state = AppState::default();
        let Some(Command::Search(first, _)) =
            update(&mut state, Action::SearchRequested(SearchQuery::from("pa")))
        else {
            panic!("expected a search command");
        };
        let Some(Command::Search(second, _)) =
            update(&mut state, Action::SearchRequested(SearchQuery::from("pad")))
        else {
            panic!("expected a search command");
        };

        update(
            &mut state,
            Action::ExpansionsLoaded {
                seq: second,
                result: Err(ExpansionError::Network("timeout".to_string())),
            },
        );
        assert!(state.last_error.is_some());

        update(
            &mut state,
            Action::ExpansionsLoaded {
                seq: first,
                result: Ok(list(&["pants", "papers"])),
            },
        );
        let results = state.results.as_ref().unwrap();
        assert_eq!(results.content, "");
        assert_eq!(results.settled_seq, second);
    }

    #[test]
    fn test_superseded_random_failure_is_dropped() {
        let mut state = AppState::default();
        let Some(Command::FetchRandom(first, target)) = update(&mut state, Action::RefreshRandom)
        else {
            panic!("expected a fetch command");
        };
        let Some(Command::FetchRandom(second, _)) = update(&mut state, Action::RefreshRandom)
        else {
            panic!("expected a fetch command");
        };

        update(
            &mut state,
            Action::ExpansionLoaded {
                seq: second,
                target,
                result: Ok(Expansion::from("never push milestones")),
            },
        );
        update(
            &mut state,
            Action::ExpansionLoaded {
                seq: first,
                target,
                result: Err(ExpansionError::Parse("expected value".to_string())),
            },
        );

        assert!(state.last_error.is_none());
        assert_eq!(state.banner.as_ref().unwrap().content, "never push milestones");
    }

    #[test]
    fn test_scroll_clamps_past_u16_lines() {
        let mut state = AppState::default();
        state.results.as_mut().unwrap().content = "x\n".repeat(70_000);

        update(&mut state, Action::ScrollResultsDown(u16::MAX));
        assert_eq!(state.results_scroll, u16::MAX);
    }
}
