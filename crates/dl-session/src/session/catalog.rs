use crate::session::log_failure;
use crate::{Result as SessionResult, Session};

use dl_core::{Service, ServiceDraft};
use log::{info, warn};

impl Session {
    /// Every service in the catalog store
    pub fn services(&self) -> Vec<Service> {
        self.catalog.services()
    }

    /// Services listed on the public views
    pub fn active_services(&self) -> Vec<Service> {
        self.catalog.active_services()
    }

    /// Fetch one service
    pub async fn service(&self, service_id: i64) -> SessionResult<Service> {
        self.api
            .get_service(service_id)
            .await
            .map_err(|e| log_failure("Loading service", e))
    }

    /// Re-fetch the full catalog and replace the store contents
    pub async fn refresh_catalog(&self) -> SessionResult<Vec<Service>> {
        let services = self
            .api
            .list_services()
            .await
            .map_err(|e| log_failure("Catalog refresh", e))?;

        self.catalog.replace(services.clone());
        Ok(services)
    }

    async fn refresh_after(&self, action: &str) {
        if let Err(e) = self.refresh_catalog().await {
            warn!("Catalog left unchanged after {action}: {e}");
        }
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub async fn create_service(&self, draft: &ServiceDraft) -> SessionResult<Service> {
        draft.validate()?;

        let service = self
            .client()
            .create_service(draft)
            .await
            .map_err(|e| log_failure("Creating service", e))?;

        info!("Created service {} ({})", service.service_id, service.title);
        self.refresh_after("create").await;
        Ok(service)
    }

    pub async fn update_service(
        &self,
        service_id: i64,
        draft: &ServiceDraft,
    ) -> SessionResult<Service> {
        draft.validate()?;

        let service = self
            .client()
            .update_service(service_id, draft)
            .await
            .map_err(|e| log_failure("Updating service", e))?;

        info!("Updated service {service_id}");
        self.refresh_after("update").await;
        Ok(service)
    }

    pub async fn activate_service(&self, service_id: i64) -> SessionResult<Service> {
        let service = self
            .client()
            .activate_service(service_id)
            .await
            .map_err(|e| log_failure("Activating service", e))?;

        info!("Activated service {service_id}");
        self.refresh_after("activate").await;
        Ok(service)
    }

    pub async fn deactivate_service(&self, service_id: i64) -> SessionResult<Service> {
        let service = self
            .client()
            .deactivate_service(service_id)
            .await
            .map_err(|e| log_failure("Deactivating service", e))?;

        info!("Deactivated service {service_id}");
        self.refresh_after("deactivate").await;
        Ok(service)
    }

    pub async fn delete_service(&self, service_id: i64) -> SessionResult<()> {
        self.client()
            .delete_service(service_id)
            .await
            .map_err(|e| log_failure("Deleting service", e))?;

        info!("Deleted service {service_id}");
        self.refresh_after("delete").await;
        Ok(())
    }
}
