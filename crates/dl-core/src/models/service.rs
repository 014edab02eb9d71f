use crate::{CoreError, Price, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// A laser-engraving service offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub service_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub is_active: bool,
}

/// Request body for creating or updating a service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub is_active: bool,
}

impl ServiceDraft {
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("Title is required."));
        }
        if !self.price.0.is_finite() || self.price.0 < 0.0 {
            return Err(CoreError::validation("Price must be a positive amount."));
        }
        Ok(())
    }
}

impl From<&Service> for ServiceDraft {
    fn from(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            price: service.price,
            is_active: service.is_active,
        }
    }
}
