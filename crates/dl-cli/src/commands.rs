use crate::{
    CliError, CliResult, auth_commands, auth_commands::AuthCommands, me_commands,
    me_commands::MeCommands, order_commands, order_commands::OrderCommands, review_commands,
    review_commands::ReviewCommands, service_commands, service_commands::ServiceCommands,
};

use clap::Subcommand;
use dl_config::Config;
use dl_session::{Access, NavAction, Session, navigation_menu, verification_notice};
use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum Commands {
    /// Login, signup, logout and session status
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// The current user's account
    Me {
        #[command(subcommand)]
        action: MeCommands,
    },

    /// Browse services; admins can manage them
    Service {
        #[command(subcommand)]
        action: ServiceCommands,
    },

    /// Place and track orders; admins can fulfill them
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },

    /// Read and write service reviews
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },

    /// Show whether the current user may open a view
    Route {
        /// View path, e.g. /admin/orders
        path: String,
    },

    /// Show the navigation menu for the current user
    Nav,
}

/// Start a session from `config`, wait for it to settle, run `command`
pub async fn execute(command: Commands, config: &Config) -> CliResult<Value> {
    let session = Session::from_config(config)?;
    session.settled().await;
    debug!(
        "Session ready (user: {})",
        session
            .current_user()
            .map(|u| u.username)
            .unwrap_or_else(|| "none".to_string())
    );

    match command {
        Commands::Auth { action } => auth_commands::handle(&session, action).await,
        Commands::Me { action } => me_commands::handle(&session, action).await,
        Commands::Service { action } => service_commands::handle(&session, action).await,
        Commands::Order { action } => order_commands::handle(&session, action).await,
        Commands::Review { action } => review_commands::handle(&session, action).await,
        Commands::Route { path } => Ok(access_json(&path, &session.evaluate(&path))),
        Commands::Nav => Ok(nav_json(&session)),
    }
}

/// Fail with `Forbidden` unless the current user may open `path`
pub(crate) fn require_view(session: &Session, path: &str) -> CliResult<()> {
    match session.evaluate(path) {
        Access::Permit(_) => Ok(()),
        Access::Redirect(target) => Err(CliError::forbidden(path, target)),
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}

pub(crate) fn access_json(path: &str, access: &Access) -> Value {
    match access {
        Access::Permit(route) => json!({
            "path": path,
            "access": "permit",
            "view": route.path(),
        }),
        Access::Redirect(target) => json!({
            "path": path,
            "access": "redirect",
            "target": target,
        }),
    }
}

fn nav_json(session: &Session) -> Value {
    let user = session.current_user();
    let links: Vec<Value> = navigation_menu(user.as_ref())
        .into_iter()
        .map(|link| match link.action {
            NavAction::Go(path) => json!({ "label": link.label, "path": path }),
            NavAction::Logout => json!({ "label": link.label, "action": "logout" }),
        })
        .collect();

    json!({
        "user": user.as_ref().map(|u| u.username.as_str()),
        "links": links,
        "notice": verification_notice(user.as_ref()),
    })
}
