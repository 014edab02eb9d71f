use crate::{CatalogStore, CredentialState, IdentityStore, ReadinessStore, SessionStore};

use std::sync::Arc;

use dl_auth::{Credential, CredentialDecoder};
use dl_client::ApiClient;
use dl_core::User;
use log::{debug, info, warn};
use tokio::task::JoinHandle;

/// Re-derives the identity and catalog stores from the stored credential.
///
/// Each run is tagged with the credential revision that triggered it and
/// publishes only while that revision is still current, so a slow run for an
/// old credential can never overwrite the result of a newer one.
pub struct Bootstrapper {
    api: ApiClient,
    decoder: CredentialDecoder,
    store: Arc<SessionStore>,
    identity: IdentityStore,
    catalog: CatalogStore,
    readiness: ReadinessStore,
}

impl Bootstrapper {
    pub fn new(
        api: ApiClient,
        store: Arc<SessionStore>,
        identity: IdentityStore,
        catalog: CatalogStore,
        readiness: ReadinessStore,
    ) -> Self {
        Self {
            api: api.anonymous(),
            decoder: CredentialDecoder::new(),
            store,
            identity,
            catalog,
            readiness,
        }
    }

    /// One Loading -> Ready pass for `state`.
    ///
    /// Never fails: fetch and decode errors are logged and end in Ready with
    /// whatever could be loaded. Returns whether the run was published.
    pub async fn run(&self, state: CredentialState) -> bool {
        let revision = state.revision;

        let marked = self
            .store
            .publish_if_current(revision, || self.readiness.loading(revision));
        if !marked {
            debug!("Skipping bootstrap for stale revision {revision}");
            return false;
        }

        let services = match self.api.list_services().await {
            Ok(services) => Some(services),
            Err(e) => {
                warn!("Failed to load service catalog: {e}");
                None
            }
        };

        let user = match &state.credential {
            Some(credential) => self.hydrate(credential).await,
            None => None,
        };

        let published = self.store.publish_if_current(revision, || {
            if let Some(services) = services {
                self.catalog.replace(services);
            }
            self.identity.set(user);
            self.readiness.ready(revision);
        });

        if published {
            debug!("Bootstrap for revision {revision} published");
        } else {
            debug!("Dropping bootstrap for superseded revision {revision}");
        }
        published
    }

    /// Decode the subject and fetch the authoritative user record
    async fn hydrate(&self, credential: &Credential) -> Option<User> {
        let username = match self.decoder.subject(credential) {
            Ok(username) => username,
            Err(e) => {
                warn!("Discarding unusable credential: {e}");
                return None;
            }
        };

        match self.api.with_credential(credential).get_user(&username).await {
            Ok(user) => {
                info!("Loaded current user {}", user.username);
                Some(user)
            }
            Err(e) => {
                warn!("Failed to load user {username}: {e}");
                None
            }
        }
    }

    /// Run once for the current credential, then again on every change.
    ///
    /// Runs are spawned independently so a newer run is never queued behind
    /// a slow older one. The watcher runs until its handle is aborted.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        let mut changes = self.store.subscribe();

        tokio::spawn(async move {
            loop {
                let state = changes.borrow_and_update().clone();
                let this = Arc::clone(&self);
                tokio::spawn(async move {
                    this.run(state).await;
                });

                if changes.changed().await.is_err() {
                    break;
                }
            }
        })
    }
}
