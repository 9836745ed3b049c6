//! Observable authentication state.
//!
//! The publisher side is driven by whatever signs the operator in or out;
//! views hold a [`SessionSubscription`] for as long as they are mounted.

use tokio::sync::watch;
use tracing::debug;

#[derive(Debug)]
pub struct SessionPublisher {
    tx: watch::Sender<bool>,
}

impl SessionPublisher {
    pub fn new(authenticated: bool) -> Self {
        let (tx, _rx) = watch::channel(authenticated);
        Self { tx }
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        let changed = self.tx.send_if_modified(|current| {
            let changed = *current != authenticated;
            *current = authenticated;
            changed
        });
        if changed {
            debug!(authenticated, "Session state changed");
        }
    }

    pub fn sign_in(&self) {
        self.set_authenticated(true);
    }

    pub fn sign_out(&self) {
        self.set_authenticated(false);
    }

    pub fn is_authenticated(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SessionPublisher {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Live view of the session. Dropping it unsubscribes.
#[derive(Debug, Clone)]
pub struct SessionSubscription {
    rx: watch::Receiver<bool>,
}

impl SessionSubscription {
    pub fn is_authenticated(&self) -> bool {
        *self.rx.borrow()
    }

    /// Waits for the next change and returns the new state, or `None` once
    /// the publisher is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
