use crate::{CliError, CliResult, commands::require_view, commands::to_json};

use std::str::FromStr;

use clap::Subcommand;
use dl_core::{Price, ServiceDraft};
use dl_session::{ReviewPermissions, Session};
use serde_json::{Value, json};

const ADMIN_SERVICES_VIEW: &str = "/admin/services";

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List services (active only unless --all)
    List {
        /// Include inactive services
        #[arg(long)]
        all: bool,
    },

    /// Show a service with its reviews
    Get {
        id: i64,
    },

    /// Create a service (admin)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Price in dollars, e.g. 25.00
        #[arg(long)]
        price: String,

        /// Create the service hidden from the public catalog
        #[arg(long)]
        inactive: bool,
    },

    /// Edit a service (admin); omitted fields keep their current value
    Update {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Price in dollars, e.g. 25.00
        #[arg(long)]
        price: Option<String>,
    },

    /// Show a service in the public catalog (admin)
    Activate {
        id: i64,
    },

    /// Hide a service from the public catalog (admin)
    Deactivate {
        id: i64,
    },

    /// Delete a service (admin)
    Delete {
        id: i64,
    },
}

pub(crate) fn parse_price(raw: &str) -> CliResult<Price> {
    Price::from_str(raw).map_err(|e| CliError::invalid_argument(e.display_message()))
}

pub(crate) async fn handle(session: &Session, action: ServiceCommands) -> CliResult<Value> {
    match action {
        ServiceCommands::List { all } => {
            if all {
                require_view(session, ADMIN_SERVICES_VIEW)?;
                to_json(&session.services())
            } else {
                to_json(&session.active_services())
            }
        }
        ServiceCommands::Get { id } => {
            let service = session.service(id).await?;
            let reviews = session.service_reviews(id).await?;
            let user = session.current_user();

            let reviews: Vec<Value> = reviews
                .iter()
                .map(|review| -> CliResult<Value> {
                    let perms = ReviewPermissions::for_review(user.as_ref(), review);
                    let mut value = to_json(review)?;
                    value["canEdit"] = json!(perms.can_edit);
                    value["canDelete"] = json!(perms.can_delete);
                    Ok(value)
                })
                .collect::<CliResult<_>>()?;

            Ok(json!({
                "service": to_json(&service)?,
                "reviews": reviews,
            }))
        }
        ServiceCommands::Create {
            title,
            description,
            price,
            inactive,
        } => {
            require_view(session, ADMIN_SERVICES_VIEW)?;
            let draft = ServiceDraft {
                title,
                description,
                price: parse_price(&price)?,
                is_active: !inactive,
            };
            to_json(&session.create_service(&draft).await?)
        }
        ServiceCommands::Update {
            id,
            title,
            description,
            price,
        } => {
            require_view(session, ADMIN_SERVICES_VIEW)?;
            let current = session.service(id).await?;
            let mut draft = ServiceDraft::from(&current);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(price) = price {
                draft.price = parse_price(&price)?;
            }
            to_json(&session.update_service(id, &draft).await?)
        }
        ServiceCommands::Activate { id } => {
            require_view(session, ADMIN_SERVICES_VIEW)?;
            to_json(&session.activate_service(id).await?)
        }
        ServiceCommands::Deactivate { id } => {
            require_view(session, ADMIN_SERVICES_VIEW)?;
            to_json(&session.deactivate_service(id).await?)
        }
        ServiceCommands::Delete { id } => {
            require_view(session, ADMIN_SERVICES_VIEW)?;
            session.delete_service(id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}
