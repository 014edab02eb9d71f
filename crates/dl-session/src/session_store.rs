use crate::{DurableStorage, Result as SessionResult};

use std::sync::Arc;

use dl_auth::Credential;
use log::{debug, info};
use tokio::sync::watch;

/// Snapshot of the stored credential and the revision that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialState {
    pub revision: u64,
    pub credential: Option<Credential>,
}

/// Holds the bearer credential and announces every change.
///
/// A persisted credential is written to durable storage. A volatile one lives
/// only in this store and clears durable storage, so an older remembered
/// credential cannot come back on the next start. Every `set` bumps the
/// revision, even when the value is unchanged.
pub struct SessionStore {
    durable: Arc<dyn DurableStorage>,
    state: watch::Sender<CredentialState>,
}

impl SessionStore {
    /// Open the store, reading back whatever durable storage holds
    pub fn open(durable: Arc<dyn DurableStorage>) -> SessionResult<Self> {
        let credential = durable.load()?;
        if credential.is_some() {
            info!("Restored remembered credential");
        }

        let (state, _) = watch::channel(CredentialState {
            revision: 0,
            credential,
        });

        Ok(Self { durable, state })
    }

    pub fn get(&self) -> Option<Credential> {
        self.state.borrow().credential.clone()
    }

    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    pub fn snapshot(&self) -> CredentialState {
        self.state.borrow().clone()
    }

    /// Replace the credential, returning the new revision.
    ///
    /// Durable storage is updated first; on a storage error nothing changes.
    pub fn set(&self, credential: Option<Credential>, persist: bool) -> SessionResult<u64> {
        match (&credential, persist) {
            (Some(credential), true) => self.durable.save(Some(credential))?,
            _ => self.durable.save(None)?,
        }

        let action = if credential.is_some() { "set" } else { "cleared" };
        let mut revision = 0;
        self.state.send_modify(|state| {
            state.revision += 1;
            state.credential = credential;
            revision = state.revision;
        });

        debug!("Credential {action} (revision {revision}, persist={persist})");
        Ok(revision)
    }

    pub fn clear(&self) -> SessionResult<u64> {
        self.set(None, false)
    }

    pub fn subscribe(&self) -> watch::Receiver<CredentialState> {
        self.state.subscribe()
    }

    /// Run `publish` only if `revision` is still current.
    ///
    /// The store cannot change while `publish` runs, so a concurrent `set`
    /// either happens before the check (and `publish` is skipped) or after
    /// `publish` returns.
    pub fn publish_if_current(&self, revision: u64, publish: impl FnOnce()) -> bool {
        let state = self.state.borrow();
        if state.revision != revision {
            return false;
        }
        publish();
        true
    }
}
