use std::sync::Arc;

use dl_core::Service;
use tokio::sync::watch;

/// The service catalog as last fetched from the API.
#[derive(Clone)]
pub struct CatalogStore {
    services: Arc<watch::Sender<Vec<Service>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        let (services, _) = watch::channel(Vec::new());
        Self {
            services: Arc::new(services),
        }
    }

    /// Every service, active or not
    pub fn services(&self) -> Vec<Service> {
        self.services.borrow().clone()
    }

    /// Services shown on the public views
    pub fn active_services(&self) -> Vec<Service> {
        self.services
            .borrow()
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect()
    }

    pub fn find(&self, service_id: i64) -> Option<Service> {
        self.services
            .borrow()
            .iter()
            .find(|s| s.service_id == service_id)
            .cloned()
    }

    pub fn replace(&self, services: Vec<Service>) {
        self.services.send_replace(services);
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Service>> {
        self.services.subscribe()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
