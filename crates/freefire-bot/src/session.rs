//! Lifecycle of the shared profile service client.
//!
//! The manager is the only component that constructs or releases the
//! client. It follows the gateway: `mark_ready` fires on the first
//! connected event (re-entry is a no-op), `close` fires on disconnect and
//! is terminal. Callers that need the client while the state is anything
//! but `Ready` get an explicit `NotReady` instead of a half-built handle.
//!
//! A fetch already in flight when `close` lands keeps its own `Arc` clone
//! of the client, so the call finishes (or fails as a transport error)
//! rather than observing a freed handle.

use std::sync::{Arc, Mutex};

use freefire_api::ProfileClient;
use serenity::prelude::TypeMapKey;
use tracing::{debug, info};

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
    Closed,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Ready => "ready",
            SessionState::Closed => "closed",
        }
    }
}

/// Signal that no client is available in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotReady;

enum Inner {
    Uninitialized,
    Ready(Arc<ProfileClient>),
    Closed,
}

/// Owner of the single shared `ProfileClient`.
pub struct SessionManager {
    inner: Mutex<Inner>,
}

impl TypeMapKey for SessionManager {
    type Value = Arc<SessionManager>;
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::Uninitialized),
        }
    }

    /// Construct the shared client. Idempotent: only the first call on an
    /// uninitialized manager has any effect; a closed manager stays closed.
    pub fn mark_ready(&self) {
        self.mark_ready_with(ProfileClient::new());
    }

    /// Same as `mark_ready` with a caller-supplied client (tests point it
    /// at a mock endpoint).
    pub fn mark_ready_with(&self, client: ProfileClient) {
        let mut guard = self.inner.lock().unwrap();
        match *guard {
            Inner::Uninitialized => {
                *guard = Inner::Ready(Arc::new(client));
                info!("Profile session ready");
            }
            Inner::Ready(_) => debug!("Profile session already ready, ignoring"),
            Inner::Closed => debug!("Profile session closed, ignoring ready"),
        }
    }

    /// Release the client. Terminal.
    pub fn close(&self) {
        let mut guard = self.inner.lock().unwrap();
        if !matches!(*guard, Inner::Closed) {
            *guard = Inner::Closed;
            info!("Profile session closed");
        }
    }

    /// The shared client, or `NotReady` outside the `Ready` state.
    pub fn current(&self) -> Result<Arc<ProfileClient>, NotReady> {
        match &*self.inner.lock().unwrap() {
            Inner::Ready(client) => Ok(client.clone()),
            _ => Err(NotReady),
        }
    }

    pub fn state(&self) -> SessionState {
        match &*self.inner.lock().unwrap() {
            Inner::Uninitialized => SessionState::Uninitialized,
            Inner::Ready(_) => SessionState::Ready,
            Inner::Closed => SessionState::Closed,
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized_with_no_client() {
        let manager = SessionManager::new();
        assert_eq!(manager.state(), SessionState::Uninitialized);
        assert_eq!(manager.current().unwrap_err(), NotReady);
    }

    #[test]
    fn mark_ready_transitions_once() {
        let manager = SessionManager::new();
        manager.mark_ready_with(ProfileClient::with_base_url("http://first/"));
        assert_eq!(manager.state(), SessionState::Ready);

        let first = manager.current().expect("ready");

        // Re-entrant ready is a no-op: same client instance survives.
        manager.mark_ready_with(ProfileClient::with_base_url("http://second/"));
        let second = manager.current().expect("still ready");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn close_is_terminal() {
        let manager = SessionManager::new();
        manager.mark_ready_with(ProfileClient::with_base_url("http://x/"));
        manager.close();
        assert_eq!(manager.state(), SessionState::Closed);
        assert_eq!(manager.current().unwrap_err(), NotReady);

        // Ready after close is ignored.
        manager.mark_ready_with(ProfileClient::with_base_url("http://y/"));
        assert_eq!(manager.state(), SessionState::Closed);
    }

    #[test]
    fn inflight_clone_survives_close() {
        let manager = SessionManager::new();
        manager.mark_ready_with(ProfileClient::with_base_url("http://x/"));
        let held = manager.current().expect("ready");
        manager.close();
        // The handle taken before close stays usable; only new lookups see Closed.
        drop(held);
        assert_eq!(manager.current().unwrap_err(), NotReady);
    }
}
