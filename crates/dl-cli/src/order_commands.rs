use crate::{CliResult, commands::require_view, commands::to_json, service_commands::parse_price};

use clap::Subcommand;
use dl_session::Session;
use serde_json::Value;

const USER_ORDERS_VIEW: &str = "/user/orders";
const ADMIN_ORDERS_VIEW: &str = "/admin/orders";

#[derive(Subcommand)]
pub enum OrderCommands {
    /// Order a service at its listed price
    Place {
        #[arg(long)]
        service_id: i64,

        /// What to engrave, dimensions, material notes
        #[arg(long, default_value = "")]
        info: String,
    },

    /// List my orders
    Mine,

    /// List every order (admin)
    All,

    /// Mark an order completed (admin)
    Complete {
        #[arg(long)]
        username: String,

        #[arg(long)]
        id: i64,
    },

    /// Change the confirmed price of an order (admin)
    Price {
        #[arg(long)]
        username: String,

        #[arg(long)]
        id: i64,

        /// New price in dollars
        #[arg(long)]
        price: String,
    },
}

pub(crate) async fn handle(session: &Session, action: OrderCommands) -> CliResult<Value> {
    match action {
        OrderCommands::Place { service_id, info } => {
            require_view(session, USER_ORDERS_VIEW)?;
            let service = session.service(service_id).await?;
            to_json(&session.place_order(service_id, service.price, info).await?)
        }
        OrderCommands::Mine => {
            require_view(session, USER_ORDERS_VIEW)?;
            to_json(&session.my_orders().await?)
        }
        OrderCommands::All => {
            require_view(session, ADMIN_ORDERS_VIEW)?;
            to_json(&session.all_orders().await?)
        }
        OrderCommands::Complete { username, id } => {
            require_view(session, ADMIN_ORDERS_VIEW)?;
            to_json(&session.complete_order(&username, id).await?)
        }
        OrderCommands::Price {
            username,
            id,
            price,
        } => {
            require_view(session, ADMIN_ORDERS_VIEW)?;
            let price = parse_price(&price)?;
            to_json(&session.update_order_price(&username, id, price).await?)
        }
    }
}
