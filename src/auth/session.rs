//! Current-user session store
//!
//! The only mutable state the core depends on. One writer (sign-in, switch,
//! sign-out), many readers; the user is replaced wholesale behind an atomic
//! pointer swap, never patched in place.

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::models::User;

/// Holder for the currently signed-in user
#[derive(Debug, Default)]
pub struct Session {
    current: ArcSwapOption<User>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Sign a user in, replacing any previous user
    pub fn sign_in(&self, user: User) {
        info!("User signed in: {} ({})", user.username, user.role);
        self.current.store(Some(Arc::new(user)));
    }

    /// Switch the active user
    pub fn switch_user(&self, user: User) {
        debug!("Switching active user to {}", user.username);
        self.current.store(Some(Arc::new(user)));
    }

    /// Sign the current user out
    pub fn sign_out(&self) {
        if let Some(user) = self.current.swap(None) {
            info!("User signed out: {}", user.username);
        }
    }

    /// The current user, if any
    pub fn current(&self) -> Option<Arc<User>> {
        self.current.load_full()
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.current.load().is_some()
    }
}
