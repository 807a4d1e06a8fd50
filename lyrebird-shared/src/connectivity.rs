//! The observable flag recording whether a server is reachable.
use tokio::sync::watch;

/// Whether a client currently believes its server is reachable.
///
/// Only the owning client writes the flag. Observers either poll
/// [`Connectivity::is_connected`] or [`Connectivity::subscribe`] and await
/// `changed()` on the receiver from whichever task or thread drives their
/// UI; every write is delivered there, never on the client's own context.
#[derive(Debug)]
pub struct Connectivity {
    tx: watch::Sender<bool>,
}
impl Default for Connectivity {
    fn default() -> Self {
        Self::new()
    }
}
impl Connectivity {
    /// Create a new flag, initially disconnected.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// The current value of the flag.
    pub fn is_connected(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribe to changes of the flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Update the flag. Observers are only woken if the value changed.
    pub fn set(&self, connected: bool) {
        self.tx.send_if_modified(|current| {
            let changed = *current != connected;
            *current = connected;
            changed
        });
    }
}
