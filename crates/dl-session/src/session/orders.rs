use crate::session::log_failure;
use crate::{Result as SessionResult, Session};

use dl_client::NewOrder;
use dl_core::{Order, Price};
use log::info;

impl Session {
    /// Order a service for the current user
    pub async fn place_order(
        &self,
        service_id: i64,
        confirmed_price: Price,
        addition_info: impl Into<String>,
    ) -> SessionResult<Order> {
        let (client, current) = self.authed()?;

        let order = client
            .create_order(&NewOrder {
                username: current.username.clone(),
                service_id,
                confirmed_price,
                addition_info: addition_info.into(),
            })
            .await
            .map_err(|e| log_failure("Placing order", e))?;

        info!(
            "Order {} placed by {} for service {service_id}",
            order.user_service_id, current.username
        );
        Ok(order)
    }

    /// Orders placed by the current user
    pub async fn my_orders(&self) -> SessionResult<Vec<Order>> {
        let (client, current) = self.authed()?;

        client
            .list_user_orders(&current.username)
            .await
            .map_err(|e| log_failure("Loading orders", e))
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Every order from every user
    pub async fn all_orders(&self) -> SessionResult<Vec<Order>> {
        self.client()
            .list_all_orders()
            .await
            .map_err(|e| log_failure("Loading all orders", e))
    }

    /// Mark an order fulfilled and return the refreshed order list
    pub async fn complete_order(&self, username: &str, order_id: i64) -> SessionResult<Vec<Order>> {
        self.client()
            .complete_order(username, order_id)
            .await
            .map_err(|e| log_failure("Completing order", e))?;

        info!("Completed order {order_id} for {username}");
        self.all_orders().await
    }

    /// Change the confirmed price and return the refreshed order list
    pub async fn update_order_price(
        &self,
        username: &str,
        order_id: i64,
        price: Price,
    ) -> SessionResult<Vec<Order>> {
        self.client()
            .update_order_price(username, order_id, price)
            .await
            .map_err(|e| log_failure("Updating order price", e))?;

        info!("Order {order_id} for {username} repriced to {price}");
        self.all_orders().await
    }
}
