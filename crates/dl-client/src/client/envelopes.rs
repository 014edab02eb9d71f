//! Response wrappers: every endpoint nests its payload under a named key.

use dl_auth::Credential;
use dl_core::{Order, Review, Service, User};

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub(crate) struct TokenEnvelope {
    pub token: Credential,
}

#[derive(Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

#[derive(Deserialize)]
pub(crate) struct ServicesEnvelope {
    pub services: Vec<Service>,
}

#[derive(Deserialize)]
pub(crate) struct ServiceEnvelope {
    pub service: Service,
}

#[derive(Deserialize)]
pub(crate) struct ReviewsEnvelope {
    pub reviews: Vec<Review>,
}

#[derive(Deserialize)]
pub(crate) struct ReviewEnvelope {
    pub review: Review,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrdersEnvelope {
    pub user_services: Vec<Order>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderEnvelope {
    pub user_service: Order,
}

/// `PATCH user-services/:username/price/:id` answers with `{ result }`
#[derive(Deserialize)]
pub(crate) struct ResultEnvelope {
    pub result: Order,
}

#[derive(Deserialize)]
pub(crate) struct DeletedEnvelope {
    pub deleted: Value,
}
