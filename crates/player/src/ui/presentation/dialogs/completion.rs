//! One-shot dialog completion
//!
//! Every dialog model owns a [`DialogCompletion`]. The first resolution wins;
//! dropping the model unresolved sends its close value, so no close path can
//! leave the caller waiting.

use tokio::sync::oneshot;

pub struct DialogCompletion<T> {
    tx: Option<oneshot::Sender<T>>,
    close_value: Option<T>,
}

/// Caller side of a [`DialogCompletion`]
pub struct DialogHandle<T> {
    rx: oneshot::Receiver<T>,
    close_value: T,
}

/// Create a completion that resolves to `close_value` if dropped unresolved.
pub fn channel<T: Clone>(close_value: T) -> (DialogCompletion<T>, DialogHandle<T>) {
    let (tx, rx) = oneshot::channel();
    (
        DialogCompletion {
            tx: Some(tx),
            close_value: Some(close_value.clone()),
        },
        DialogHandle { rx, close_value },
    )
}

impl<T> DialogCompletion<T> {
    /// Resolve with `value`. Returns false if already resolved.
    pub fn resolve(&mut self, value: T) -> bool {
        self.close_value = None;
        match self.tx.take() {
            Some(tx) => {
                // A caller that stopped waiting is not an error.
                let _ = tx.send(value);
                true
            }
            None => false,
        }
    }

    /// Resolve with the close value.
    pub fn close(&mut self) -> bool {
        match self.close_value.take() {
            Some(value) => self.resolve(value),
            None => false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.tx.is_none()
    }
}

impl<T> Drop for DialogCompletion<T> {
    fn drop(&mut self) {
        if let (Some(tx), Some(value)) = (self.tx.take(), self.close_value.take()) {
            let _ = tx.send(value);
        }
    }
}

impl<T> DialogHandle<T> {
    pub async fn wait(self) -> T {
        self.rx.await.unwrap_or(self.close_value)
    }
}
