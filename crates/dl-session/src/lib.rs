//! dl-session
//!
//! Client-side session layer: credential storage, the identity and catalog
//! stores, the bootstrapper that hydrates them, and the role router.

pub mod bootstrapper;
pub mod catalog_store;
pub mod error;
pub mod identity_store;
pub mod readiness;
pub mod router;
pub mod session;
pub mod session_store;
pub mod storage;

#[cfg(test)]
mod tests;

pub use bootstrapper::Bootstrapper;
pub use catalog_store::CatalogStore;
pub use error::{Result, SessionError};
pub use identity_store::IdentityStore;
pub use readiness::{Readiness, ReadinessStore};
pub use router::{
    Access, NavAction, NavLink, RoleRouter, Route, ViewGroup, guard_admin, guard_authenticated,
    navigation_menu, verification_notice,
};
pub use session::{AuthOutcome, Persistence, ReviewPermissions, Session};
pub use session_store::{CredentialState, SessionStore};
pub use storage::{DurableStorage, FileStorage, MemoryStorage};
