use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

enum Signal<T> {
    Call(T),
    Cancel,
}

/// Coalesces bursts of calls into one.
///
/// Every [`trigger`](Debouncer::trigger) restarts the timer and replaces the
/// pending arguments; `action` runs once, `delay` after the last call, with
/// the arguments of that call. [`cancel`](Debouncer::cancel) drops a pending
/// call. Dropping the debouncer drops any pending call too.
///
/// Must be created inside a tokio runtime.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<Signal<T>>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, mut action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Signal<T>>();

        let task = tokio::spawn(async move {
            let mut pending: Option<T> = None;

            loop {
                match pending.take() {
                    Some(args) => {
                        tokio::select! {
                            signal = rx.recv() => match signal {
                                Some(Signal::Call(newer)) => pending = Some(newer),
                                Some(Signal::Cancel) => {}
                                None => break,
                            },
                            () = tokio::time::sleep(delay) => action(args),
                        }
                    }
                    None => match rx.recv().await {
                        Some(Signal::Call(args)) => pending = Some(args),
                        Some(Signal::Cancel) => {}
                        None => break,
                    },
                }
            }
        });

        Self { tx, task }
    }

    pub fn trigger(&self, args: T) {
        let _ = self.tx.send(Signal::Call(args));
    }

    pub fn cancel(&self) {
        let _ = self.tx.send(Signal::Cancel);
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
