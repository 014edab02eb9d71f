use crate::session::log_failure;
use crate::{Result as SessionResult, Session};

use dl_client::NewReview;
use dl_core::{Review, ReviewDraft, User};
use log::info;

/// What the current user may do with a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewPermissions {
    pub can_edit: bool,
    pub can_delete: bool,
}

impl ReviewPermissions {
    /// Authors may edit and delete their reviews; admins may delete any.
    pub fn for_review(user: Option<&User>, review: &Review) -> Self {
        let Some(user) = user else {
            return Self::default();
        };

        let is_author = match (user.id, review.user_id) {
            (Some(user_id), Some(author_id)) => user_id == author_id,
            _ => review.username.as_deref() == Some(user.username.as_str()),
        };

        Self {
            can_edit: is_author,
            can_delete: is_author || user.is_admin(),
        }
    }
}

impl Session {
    /// Reviews posted for a service
    pub async fn service_reviews(&self, service_id: i64) -> SessionResult<Vec<Review>> {
        self.api
            .list_service_reviews(service_id)
            .await
            .map_err(|e| log_failure("Loading reviews", e))
    }

    /// Review a service as the current user; returns the service's reviews
    pub async fn add_review(
        &self,
        service_id: i64,
        review_text: impl Into<String>,
        rating: u8,
    ) -> SessionResult<Vec<Review>> {
        let draft = ReviewDraft::new(review_text, rating)?;
        let (client, current) = self.authed()?;

        client
            .create_review(
                &current.username,
                &NewReview {
                    user_id: current.id,
                    service_id,
                    review_text: draft.review_text,
                    rating: draft.rating,
                },
            )
            .await
            .map_err(|e| log_failure("Posting review", e))?;

        info!("{} reviewed service {service_id}", current.username);
        self.service_reviews(service_id).await
    }

    /// Edit one of the current user's reviews; returns the service's reviews
    pub async fn update_review(
        &self,
        review_id: i64,
        review_text: impl Into<String>,
        rating: u8,
    ) -> SessionResult<Vec<Review>> {
        let draft = ReviewDraft::new(review_text, rating)?;
        let (client, current) = self.authed()?;

        let review = client
            .update_review(review_id, &current.username, &draft)
            .await
            .map_err(|e| log_failure("Updating review", e))?;

        info!("Updated review {review_id}");
        self.service_reviews(review.service_id).await
    }

    /// Delete a review; returns the remaining reviews of its service
    pub async fn delete_review(&self, review_id: i64) -> SessionResult<Vec<Review>> {
        let (client, current) = self.authed()?;

        let review = client
            .get_review(review_id)
            .await
            .map_err(|e| log_failure("Loading review", e))?;

        client
            .delete_review(review_id, &current.username)
            .await
            .map_err(|e| log_failure("Deleting review", e))?;

        info!("Deleted review {review_id}");
        self.service_reviews(review.service_id).await
    }
}
