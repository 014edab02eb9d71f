use std::sync::Arc;

use dl_core::User;
use tokio::sync::watch;

/// The hydrated current user, absent when logged out.
#[derive(Clone)]
pub struct IdentityStore {
    user: Arc<watch::Sender<Option<User>>>,
}

impl IdentityStore {
    pub fn new() -> Self {
        let (user, _) = watch::channel(None);
        Self {
            user: Arc::new(user),
        }
    }

    pub fn current(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// Replace the user wholesale
    pub fn set(&self, user: Option<User>) {
        self.user.send_replace(user);
    }

    pub fn clear(&self) {
        self.set(None);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}
