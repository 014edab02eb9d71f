use crate::{CliError, CliResult, commands::to_json};

use clap::Subcommand;
use dl_core::{LoginData, SignupData};
use dl_session::{AuthOutcome, Session};
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Log in with username and password
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Keep the credential for later invocations
        #[arg(long)]
        remember_me: bool,
    },

    /// Create an account (always remembered)
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<String>,
    },

    /// Forget the stored credential
    Logout,

    /// Show the current user and bootstrap state
    Status,
}

pub(crate) async fn handle(session: &Session, action: AuthCommands) -> CliResult<Value> {
    match action {
        AuthCommands::Login {
            username,
            password,
            remember_me,
        } => {
            let outcome = session
                .login(&LoginData::new(username, password), remember_me)
                .await;
            outcome_json(session, outcome)
        }
        AuthCommands::Signup {
            username,
            password,
            first_name,
            last_name,
            email,
            birth_date,
        } => {
            let outcome = session
                .signup(&SignupData {
                    username,
                    password,
                    first_name,
                    last_name,
                    email,
                    birth_date,
                })
                .await;
            outcome_json(session, outcome)
        }
        AuthCommands::Logout => {
            session.logout().await?;
            Ok(json!({ "logged_out": true }))
        }
        AuthCommands::Status => {
            let readiness = session.readiness();
            Ok(json!({
                "info_loaded": readiness.info_loaded,
                "revision": readiness.revision,
                "user": to_json(&session.current_user())?,
            }))
        }
    }
}

fn outcome_json(session: &Session, outcome: AuthOutcome) -> CliResult<Value> {
    match outcome {
        AuthOutcome::Success { persistence } => Ok(json!({
            "success": true,
            "remembered": persistence.is_durable(),
            "persistence": persistence.to_string(),
            "user": to_json(&session.current_user())?,
        })),
        AuthOutcome::Failure { messages } => Err(CliError::rejected(messages)),
    }
}
