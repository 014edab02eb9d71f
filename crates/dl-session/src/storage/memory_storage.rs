use crate::{DurableStorage, Result as SessionResult};

use std::sync::{Arc, Mutex, PoisonError};

use dl_auth::Credential;

/// In-memory durable storage.
///
/// Clones share the same slot, so a fresh `SessionStore` built over a clone
/// sees what an earlier store persisted. Used to simulate restarts.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<Credential>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds a credential
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(credential))),
        }
    }

    /// Current contents, bypassing the trait
    pub fn peek(&self) -> Option<Credential> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DurableStorage for MemoryStorage {
    fn load(&self) -> SessionResult<Option<Credential>> {
        Ok(self.peek())
    }

    fn save(&self, credential: Option<&Credential>) -> SessionResult<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = credential.cloned();
        Ok(())
    }
}
