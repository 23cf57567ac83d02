use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delivers a value only after no newer value has been pushed for `delay`.
///
/// Each push aborts the pending timer task and starts a new one; settled
/// values are read with [`Debouncer::settled`]. Must be used inside a tokio
/// runtime.
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    rx: mpsc::UnboundedReceiver<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Debouncer {
            delay,
            tx,
            rx,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver lives in the debouncer; gone means it was dropped
            let _ = tx.send(value);
        }));
    }

    /// Waits for the next value whose timer ran out.
    pub async fn settled(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Stops the pending timer and throws away a value that already
    /// settled but was not read yet.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        while self.rx.try_recv().is_ok() {}
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
