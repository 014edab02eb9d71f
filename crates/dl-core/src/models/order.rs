use crate::Price;

use serde::{Deserialize, Serialize};

/// An order, called a "user service" by the API: one service requested by one
/// user at a confirmed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub user_service_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub service_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    pub confirmed_price: Price,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub addition_info: Option<String>,
    #[serde(default)]
    pub confirmation_code: Option<String>,
    #[serde(default)]
    pub requested_date: Option<String>,
    #[serde(default)]
    pub fulfilled_date: Option<String>,
}

impl Order {
    pub fn status_label(&self) -> &'static str {
        if self.is_completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}
