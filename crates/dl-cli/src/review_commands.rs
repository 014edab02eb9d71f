use crate::{CliResult, commands::require_view, commands::to_json};

use clap::Subcommand;
use dl_session::Session;
use serde_json::Value;

const MEMBER_VIEW: &str = "/user";

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// List reviews of a service
    List {
        service_id: i64,
    },

    /// Review a service
    Add {
        #[arg(long)]
        service_id: i64,

        /// Star rating, 1 to 5
        #[arg(long)]
        rating: u8,

        #[arg(long)]
        text: String,
    },

    /// Edit one of my reviews
    Update {
        id: i64,

        /// Star rating, 1 to 5
        #[arg(long)]
        rating: u8,

        #[arg(long)]
        text: String,
    },

    /// Delete a review (mine, or any as admin)
    Delete {
        id: i64,
    },
}

pub(crate) async fn handle(session: &Session, action: ReviewCommands) -> CliResult<Value> {
    match action {
        ReviewCommands::List { service_id } => to_json(&session.service_reviews(service_id).await?),
        ReviewCommands::Add {
            service_id,
            rating,
            text,
        } => {
            require_view(session, MEMBER_VIEW)?;
            to_json(&session.add_review(service_id, text, rating).await?)
        }
        ReviewCommands::Update { id, rating, text } => {
            require_view(session, MEMBER_VIEW)?;
            to_json(&session.update_review(id, text, rating).await?)
        }
        ReviewCommands::Delete { id } => {
            require_view(session, MEMBER_VIEW)?;
            to_json(&session.delete_review(id).await?)
        }
    }
}
