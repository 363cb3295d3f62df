use crate::app::{action::Action, command::Command};
use crate::domain::expansions::{ClipboardSink, ExpansionSource};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The outside world the client talks to.
#[derive(Clone)]
pub struct Services {
    pub source: Arc<dyn ExpansionSource>,
    pub clipboard: Arc<dyn ClipboardSink>,
}

/// Runs a command produced by the reducer. Network work is spawned and
/// reports back through `tx`; in-flight requests are never cancelled.
pub fn handle_command(command: Command, services: &Services, tx: mpsc::Sender<Action>) -> Result<()> {
    match command {
        Command::FetchRandom(seq, target) => {
            let source = services.source.clone();
            tokio::spawn(async move {
                let result = source.random().await;
                let _ = tx
                    .send(Action::ExpansionLoaded {
                        seq,
                        target,
                        result,
                    })
                    .await;
            });
        }
        Command::Search(seq, query) => {
            let source = services.source.clone();
            tokio::spawn(async move {
                let result = source.search(&query).await;
                let _ = tx.send(Action::ExpansionsLoaded { seq, result }).await;
            });
        }
        Command::LoadAll(seq) => {
            let source = services.source.clone();
            tokio::spawn(async move {
                let result = source.all().await;
                let _ = tx.send(Action::ExpansionsLoaded { seq, result }).await;
            });
        }
        Command::CopyToClipboard(text) => {
            // Inline: the clipboard escape shares stdout with the renderer.
            let result = services.clipboard.write_text(&text);
            let lines = if text.is_empty() { 0 } else { text.lines().count() };
            if let Err(e) = tx.try_send(Action::ClipboardWritten { lines, result }) {
                tracing::warn!("dropping clipboard result: {e}");
            }
        }
        Command::DebounceSearch(_) | Command::CancelPendingSearch => {
            return Err(anyhow!("{command:?} must be handled by the event loop"));
        }
    }
    Ok(())
}
