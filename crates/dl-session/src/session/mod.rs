pub(crate) mod account;
pub(crate) mod auth_outcome;
pub(crate) mod catalog;
pub(crate) mod orders;
pub(crate) mod reviews;

pub use auth_outcome::{AuthOutcome, Persistence};
pub use reviews::ReviewPermissions;

use crate::{
    Access, Bootstrapper, CatalogStore, DurableStorage, FileStorage, IdentityStore, Readiness,
    ReadinessStore, Result as SessionResult, RoleRouter, SessionError, SessionStore,
};

use std::sync::Arc;

use dl_auth::{Credential, CredentialDecoder};
use dl_client::{ApiClient, ClientError};
use dl_config::{Config, RoutingConfig};
use dl_core::{LoginData, SignupData, User};
use log::{info, warn};
use tokio::task::JoinHandle;

const ACCOUNT_LOAD_FAILED: &str = "Unable to load your account. Please try again.";

/// A running client session.
///
/// Owns the credential store, the identity and catalog stores, and the
/// bootstrapper watcher that keeps them in step with the credential. Every
/// operation that needs the current user reads it from the identity store.
pub struct Session {
    api: ApiClient,
    decoder: CredentialDecoder,
    store: Arc<SessionStore>,
    identity: IdentityStore,
    catalog: CatalogStore,
    readiness: ReadinessStore,
    router: RoleRouter,
    watcher: JoinHandle<()>,
}

impl Session {
    /// Open the store over `durable` and start bootstrapping.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        api: ApiClient,
        durable: Arc<dyn DurableStorage>,
        routing: &RoutingConfig,
    ) -> SessionResult<Self> {
        let store = Arc::new(SessionStore::open(durable)?);
        let identity = IdentityStore::new();
        let catalog = CatalogStore::new();
        let readiness = ReadinessStore::new();

        let bootstrapper = Arc::new(Bootstrapper::new(
            api.clone(),
            Arc::clone(&store),
            identity.clone(),
            catalog.clone(),
            readiness.clone(),
        ));
        let watcher = bootstrapper.spawn();

        Ok(Self {
            api: api.anonymous(),
            decoder: CredentialDecoder::new(),
            store,
            identity,
            catalog,
            readiness,
            router: RoleRouter::new(routing),
            watcher,
        })
    }

    /// Start a session with file storage and the API named in `config`
    pub fn from_config(config: &Config) -> SessionResult<Self> {
        let storage = FileStorage::from_config(config)?;
        Self::start(
            ApiClient::new(config.api_base_url()),
            Arc::new(storage),
            &config.routing,
        )
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn current_user(&self) -> Option<User> {
        self.identity.current()
    }

    pub fn credential(&self) -> Option<Credential> {
        self.store.get()
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness.current()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn router(&self) -> &RoleRouter {
        &self.router
    }

    /// Evaluate `path` for the current user
    pub fn evaluate(&self, path: &str) -> Access {
        self.router.evaluate(path, self.current_user().as_ref())
    }

    /// Wait until the bootstrap for the current credential has finished
    pub async fn settled(&self) {
        let mut changes = self.readiness.subscribe();

        loop {
            let readiness = *changes.borrow_and_update();
            if readiness.info_loaded && readiness.revision == self.store.revision() {
                return;
            }

            if changes.changed().await.is_err() {
                return;
            }
        }
    }

    // =========================================================================
    // Login / Signup / Logout
    // =========================================================================

    /// Exchange username and password for a credential.
    ///
    /// On failure the API's messages are returned and the session is left
    /// as it was.
    pub async fn login(&self, data: &LoginData, remember_me: bool) -> AuthOutcome {
        let credential = match self.api.login(data).await {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Login failed for {}: {e}", data.username);
                return AuthOutcome::failure(e.messages());
            }
        };

        let persistence = Persistence::from_remember_me(remember_me);
        self.establish(credential, persistence, &data.username).await
    }

    /// Register a new account. The credential is always remembered.
    pub async fn signup(&self, data: &SignupData) -> AuthOutcome {
        let credential = match self.api.register(data).await {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Signup failed for {}: {e}", data.username);
                return AuthOutcome::failure(e.messages());
            }
        };

        self.establish(credential, Persistence::Durable, &data.username)
            .await
    }

    async fn establish(
        &self,
        credential: Credential,
        persistence: Persistence,
        username: &str,
    ) -> AuthOutcome {
        let subject = self.decoder.subject(&credential).ok();

        if let Err(e) = self
            .store
            .set(Some(credential), persistence.is_durable())
        {
            warn!("Failed to store credential for {username}: {e}");
            return AuthOutcome::failure(e.messages());
        }

        self.settled().await;

        // The credential stays stored; only a loaded subject counts as logged in.
        match self.identity.current() {
            Some(user) if subject.as_deref() == Some(user.username.as_str()) => {
                info!("Logged in as {username} ({persistence})");
                AuthOutcome::Success { persistence }
            }
            _ => {
                warn!("Account for {username} could not be loaded after login");
                AuthOutcome::failure(vec![ACCOUNT_LOAD_FAILED.to_string()])
            }
        }
    }

    /// Forget the current user and credential
    pub async fn logout(&self) -> SessionResult<()> {
        self.identity.clear();
        self.store.clear()?;
        self.settled().await;
        info!("Logged out");
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Client carrying the stored credential, plus the current user
    fn authed(&self) -> SessionResult<(ApiClient, User)> {
        let credential = self
            .store
            .get()
            .ok_or_else(SessionError::not_authenticated)?;
        let user = self
            .identity
            .current()
            .ok_or_else(SessionError::not_authenticated)?;

        Ok((self.api.with_credential(&credential), user))
    }

    /// Client carrying the stored credential, anonymous when logged out
    fn client(&self) -> ApiClient {
        match self.store.get() {
            Some(credential) => self.api.with_credential(&credential),
            None => self.api.clone(),
        }
    }

    /// Replace the current user if the credential has not changed since
    /// `revision`
    fn publish_user(&self, revision: u64, user: &User) -> bool {
        self.store
            .publish_if_current(revision, || self.identity.set(Some(user.clone())))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

fn log_failure(action: &str, err: ClientError) -> SessionError {
    warn!("{action} failed: {err}");
    SessionError::from(err)
}
