use dl_core::Price;

use serde::Serialize;

/// Body of `POST reviews/:username`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub service_id: i64,
    pub review_text: String,
    pub rating: u8,
}

/// Body of `POST user-services/:username`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub username: String,
    pub service_id: i64,
    pub confirmed_price: Price,
    pub addition_info: String,
}
