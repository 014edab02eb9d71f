use crate::{CliError, CliResult, commands::require_view, commands::to_json};

use clap::Subcommand;
use dl_core::ProfileUpdate;
use dl_session::{Session, SessionError};
use serde_json::{Value, json};

const PROFILE_VIEW: &str = "/user/profile";

#[derive(Subcommand)]
pub enum MeCommands {
    /// Show the current user
    Show,

    /// Edit profile fields; omitted fields keep their current value
    Update {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<String>,

        /// New password
        #[arg(long, requires = "confirm_password")]
        password: Option<String>,

        /// Must equal --password
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Reactivate the account
    Activate,

    /// Deactivate the account
    Deactivate,

    /// Delete the account and log out
    Delete {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Send a new verification email
    SendVerification,

    /// Confirm an email address with the token from the verification link
    Confirm {
        token: String,
    },
}

pub(crate) async fn handle(session: &Session, action: MeCommands) -> CliResult<Value> {
    if !matches!(action, MeCommands::Confirm { .. }) {
        require_view(session, PROFILE_VIEW)?;
    }

    match action {
        MeCommands::Show => to_json(&session.current_user()),
        MeCommands::Update {
            first_name,
            last_name,
            email,
            birth_date,
            password,
            confirm_password,
        } => {
            let current = session
                .current_user()
                .ok_or_else(SessionError::not_authenticated)?;

            let update = ProfileUpdate {
                first_name: first_name.unwrap_or(current.first_name),
                last_name: last_name.unwrap_or(current.last_name),
                email: email.unwrap_or(current.email),
                birth_date: birth_date.or(current.birth_date),
                password,
                confirm_password,
            };

            to_json(&session.update_profile(update).await?)
        }
        MeCommands::Activate => to_json(&session.set_account_active(true).await?),
        MeCommands::Deactivate => to_json(&session.set_account_active(false).await?),
        MeCommands::Delete { yes } => {
            if !yes {
                return Err(CliError::invalid_argument(
                    "Refusing to delete the account without --yes",
                ));
            }
            session.delete_account().await?;
            Ok(json!({ "deleted": true }))
        }
        MeCommands::SendVerification => {
            session.send_verification_email().await?;
            Ok(json!({ "sent": true }))
        }
        MeCommands::Confirm { token } => to_json(&session.confirm_email(&token).await?),
    }
}
