use std::sync::Arc;

use tokio::sync::watch;

/// Whether the bootstrap for a credential revision has finished.
///
/// `info_loaded` is false only while a run is in flight. It becomes true when
/// the run finishes, whether or not the fetches succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readiness {
    pub info_loaded: bool,
    pub revision: u64,
}

#[derive(Clone)]
pub struct ReadinessStore {
    state: Arc<watch::Sender<Readiness>>,
}

impl ReadinessStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Readiness {
            info_loaded: false,
            revision: 0,
        });
        Self {
            state: Arc::new(state),
        }
    }

    pub fn current(&self) -> Readiness {
        *self.state.borrow()
    }

    pub fn loading(&self, revision: u64) {
        self.state.send_replace(Readiness {
            info_loaded: false,
            revision,
        });
    }

    pub fn ready(&self, revision: u64) {
        self.state.send_replace(Readiness {
            info_loaded: true,
            revision,
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<Readiness> {
        self.state.subscribe()
    }
}

impl Default for ReadinessStore {
    fn default() -> Self {
        Self::new()
    }
}
