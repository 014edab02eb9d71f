pub(crate) mod file_storage;
pub(crate) mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::Result as SessionResult;

use dl_auth::Credential;

/// Storage that outlives the process.
///
/// Holds at most one credential. `save(None)` removes it.
pub trait DurableStorage: Send + Sync {
    fn load(&self) -> SessionResult<Option<Credential>>;

    fn save(&self, credential: Option<&Credential>) -> SessionResult<()>;
}
