use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A customer review attached to a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    pub service_id: i64,
    #[serde(default)]
    pub review_text: String,
    pub rating: u8,
    /// Posting time (ISO 8601, as sent by the API)
    #[serde(default)]
    pub time: Option<String>,
}

/// Validated review content (text + star rating)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub review_text: String,
    pub rating: u8,
}

impl ReviewDraft {
    #[track_caller]
    pub fn new(review_text: impl Into<String>, rating: u8) -> CoreErrorResult<Self> {
        let review_text = review_text.into();
        if review_text.trim().is_empty() {
            return Err(CoreError::validation("Review text is required."));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CoreError::validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}."
            )));
        }
        Ok(Self {
            review_text,
            rating,
        })
    }
}
