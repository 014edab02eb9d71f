//! Shared fixtures for session integration tests

#![allow(dead_code)]

use dl_auth::{Claims, Credential};
use dl_client::ApiClient;
use dl_config::RoutingConfig;
use dl_session::{MemoryStorage, Session};

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const SECRET: &[u8] = b"server-side-secret-the-client-never-sees";

/// Mint a credential the way the API would
pub fn mint(username: &str, status: &str) -> Credential {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        username: username.to_string(),
        status: Some(status.to_string()),
        exp: now + 3600,
        iat: Some(now),
    };

    Credential::new(
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap(),
    )
}

pub fn user_json(username: &str, status: &str) -> Value {
    json!({
        "id": if status == "admin" { 1 } else { 7 },
        "username": username,
        "firstName": "Test",
        "lastName": "User",
        "email": format!("{username}@example.com"),
        "birthDate": null,
        "isActive": true,
        "isVerified": true,
        "status": status
    })
}

pub fn service_json(id: i64, title: &str, active: bool) -> Value {
    json!({
        "serviceId": id,
        "title": title,
        "description": format!("{title} service"),
        "price": "25.00",
        "isActive": active
    })
}

/// Answer `GET /services` with `services` for every call
pub async fn mount_services(server: &MockServer, services: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "services": services })))
        .mount(server)
        .await;
}

/// Answer `GET /users/:username` with the user record
pub async fn mount_user(server: &MockServer, username: &str, status: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{username}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": user_json(username, status) })),
        )
        .mount(server)
        .await;
}

/// Answer `POST /auth/token` with a credential for `username`
pub async fn mount_login(server: &MockServer, username: &str, status: &str) -> Credential {
    let credential = mint(username, status);
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "token": credential.as_str() })),
        )
        .mount(server)
        .await;
    credential
}

/// Start a session against the mock server and wait for the first bootstrap
pub async fn start(server: &MockServer, storage: &MemoryStorage) -> Session {
    let session = Session::start(
        ApiClient::new(&server.uri()),
        Arc::new(storage.clone()),
        &RoutingConfig::default(),
    )
    .unwrap();
    session.settled().await;
    session
}

/// A session already logged in as `username`
pub async fn logged_in(server: &MockServer, username: &str, status: &str) -> Session {
    mount_user(server, username, status).await;
    let storage = MemoryStorage::with_credential(mint(username, status));
    start(server, &storage).await
}
