use crate::session::log_failure;
use crate::{Result as SessionResult, Session};

use dl_core::{ProfileUpdate, User};
use log::{debug, info};

impl Session {
    /// Save profile edits for the current user.
    ///
    /// A mismatched password confirmation is rejected before any request.
    pub async fn update_profile(&self, mut update: ProfileUpdate) -> SessionResult<User> {
        update.validate()?;

        let (client, current) = self.authed()?;
        let revision = self.store.revision();

        let user = client
            .update_user(&current.username, &update)
            .await
            .map_err(|e| log_failure("Profile update", e))?;

        self.publish_user(revision, &user);
        info!("Updated profile for {}", user.username);
        Ok(user)
    }

    /// Activate or deactivate the current account
    pub async fn set_account_active(&self, active: bool) -> SessionResult<User> {
        let (client, current) = self.authed()?;
        let revision = self.store.revision();

        let result = if active {
            client.activate_user(&current.username).await
        } else {
            client.deactivate_user(&current.username).await
        };
        let user = result.map_err(|e| log_failure("Account status change", e))?;

        self.publish_user(revision, &user);
        info!(
            "Account {} {}",
            user.username,
            if user.is_active { "activated" } else { "deactivated" }
        );
        Ok(user)
    }

    /// Delete the current account, then log out
    pub async fn delete_account(&self) -> SessionResult<()> {
        let (client, current) = self.authed()?;

        client
            .delete_user(&current.username)
            .await
            .map_err(|e| log_failure("Account deletion", e))?;

        info!("Deleted account {}", current.username);
        self.logout().await
    }

    /// Ask the API to email a verification link to the current user
    pub async fn send_verification_email(&self) -> SessionResult<()> {
        let (client, current) = self.authed()?;

        client
            .send_verification_email(&current.username, &current.email)
            .await
            .map_err(|e| log_failure("Sending verification email", e))?;

        info!("Verification email requested for {}", current.username);
        Ok(())
    }

    /// Confirm an email address with the token from a verification link.
    ///
    /// The returned user becomes the current user only when it is the
    /// subject of the stored credential.
    pub async fn confirm_email(&self, token: &str) -> SessionResult<User> {
        let revision = self.store.revision();

        let user = self
            .client()
            .confirm_email(token)
            .await
            .map_err(|e| log_failure("Email confirmation", e))?;

        let subject = self
            .store
            .get()
            .and_then(|credential| self.decoder.subject(&credential).ok());

        if subject.as_deref() == Some(user.username.as_str()) {
            self.publish_user(revision, &user);
        } else {
            debug!(
                "Confirmed {} is not the current user, identity unchanged",
                user.username
            );
        }

        Ok(user)
    }
}
