//! Caller-driven cancellation
//!
//! A [`CancelHandle`] fires a cause string; every [`CancelSignal`] cloned from
//! its pair observes it. Network calls race their round-trip against
//! [`CancelSignal::cancelled`] and fail with a transport error carrying the
//! cause when the signal wins.

use tokio::sync::watch;

/// Sending half: fires the cancellation
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<Option<String>>,
}

/// Receiving half: observed by in-flight calls
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<Option<String>>,
}

impl CancelHandle {
    /// Create a handle and the signal it controls
    pub fn new() -> (Self, CancelSignal) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, CancelSignal { rx })
    }

    /// Fire the cancellation with a cause
    ///
    /// Only the first cause is kept.
    pub fn cancel(&self, cause: impl Into<String>) {
        let cause = cause.into();
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(cause);
            true
        });
    }

    /// A new signal observing this handle
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl CancelSignal {
    /// A signal that never fires
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(None);
        Self { rx }
    }

    /// Cause of the cancellation, if it already fired
    pub fn cause(&self) -> Option<String> {
        self.rx.borrow().clone()
    }

    /// Whether the cancellation already fired
    pub fn is_cancelled(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Resolve with the cause once the cancellation fires
    ///
    /// Pends forever if the handle is dropped without firing.
    pub async fn cancelled(&self) -> String {
        let mut rx = self.rx.clone();
        loop {
            let current = rx.borrow_and_update().clone();
            if let Some(cause) = current {
                return cause;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::never()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_resolves_with_first_cause() {
        let (handle, signal) = CancelHandle::new();
        assert!(!signal.is_cancelled());

        handle.cancel("deadline exceeded");
        handle.cancel("second cause");

        assert!(signal.is_cancelled());
        assert_eq!(signal.cancelled().await, "deadline exceeded");
        assert_eq!(signal.cause().as_deref(), Some("deadline exceeded"));
    }

    #[tokio::test]
    async fn test_cancel_wakes_waiting_task() {
        let (handle, signal) = CancelHandle::new();

        let waiter = tokio::spawn(async move { signal.cancelled().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.cancel("shutdown");

        assert_eq!(waiter.await.unwrap(), "shutdown");
    }

    #[tokio::test]
    async fn test_never_signal_does_not_fire() {
        let signal = CancelSignal::never();
        let fired = tokio::time::timeout(Duration::from_millis(20), signal.cancelled()).await;
        assert!(fired.is_err());
    }

    #[tokio::test]
    async fn test_subscribed_signal_observes_handle() {
        let (handle, _signal) = CancelHandle::new();
        let other = handle.signal();
        handle.cancel("stop");
        assert_eq!(other.cancelled().await, "stop");
    }
}
