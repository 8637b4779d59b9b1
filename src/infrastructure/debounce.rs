//! Trailing-edge debounce over a background tokio task.

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Forwards only the last value of every burst to `sink`, once `delay` has
/// passed without a newer value. Values pending at shutdown are flushed.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    handle: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn spawn<F, Fut>(delay: Duration, mut sink: F) -> Self
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        let handle = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                if pending.is_none() {
                    match rx.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    }
                    continue;
                }

                tokio::select! {
                    next = rx.recv() => match next {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    () = tokio::time::sleep(delay) => {
                        if let Some(value) = pending.take() {
                            sink(value).await;
                        }
                    }
                }
            }

            if let Some(value) = pending.take() {
                sink(value).await;
            }
        });

        Self { tx, handle }
    }

    /// Returns `false` once the debouncer has shut down.
    pub fn push(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<T> {
        self.tx.clone()
    }

    /// Closes this handle's sender, flushes the pending value and waits for
    /// the task. Clones from [`sender`](Self::sender) keep the task alive.
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(err) = self.handle.await {
            tracing::warn!(error = %err, "debounce task ended abnormally");
        }
    }
}
