//! Integration tests for the API client using wiremock mock server

use dl_auth::Credential;
use dl_client::{ApiClient, NewOrder};
use dl_core::{LoginData, Price, ProfileUpdate, ReviewDraft, ServiceDraft};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path},
};

fn alice_json() -> serde_json::Value {
    json!({
        "id": 7,
        "username": "alice",
        "firstName": "Alice",
        "lastName": "Smith",
        "email": "alice@example.com",
        "birthDate": "1990-01-01",
        "isActive": true,
        "isVerified": false,
        "status": "user"
    })
}

#[tokio::test]
async fn test_login_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .and(body_json(json!({ "username": "alice", "password": "pw" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": "T1" })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let credential = client.login(&LoginData::new("alice", "pw")).await.unwrap();

    assert_eq!(credential.as_str(), "T1");
}

#[tokio::test]
async fn test_login_failure_carries_string_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Invalid username/password", "status": 401 }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let err = client
        .login(&LoginData::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.messages(), vec!["Invalid username/password"]);
    assert!(err.to_string().contains("Invalid username/password"));
}

#[tokio::test]
async fn test_validation_failure_carries_all_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": ["instance requires property \"email\"", "password too short"],
                "status": 400
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let signup = dl_core::SignupData {
        username: "bob".to_string(),
        password: "x".to_string(),
        first_name: "Bob".to_string(),
        last_name: "Jones".to_string(),
        email: String::new(),
        birth_date: None,
    };
    let err = client.register(&signup).await.unwrap_err();

    assert_eq!(err.messages().len(), 2);
    assert_eq!(err.messages()[1], "password too short");
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_status_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let err = client.list_services().await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.messages(), vec!["Request failed with status 502"]);
}

#[tokio::test]
async fn test_get_user_sends_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": alice_json() })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_credential(&Credential::new("T1"));
    let user = client.get_user("alice").await.unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.full_name(), "Alice Smith");
    assert!(!user.is_admin());
}

#[tokio::test]
async fn test_list_services_accepts_string_prices() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "services": [
                {
                    "serviceId": 1,
                    "title": "Engraving",
                    "description": "Wood engraving",
                    "price": "25.00",
                    "isActive": true
                },
                {
                    "serviceId": 2,
                    "title": "Cutting",
                    "description": "Acrylic cutting",
                    "price": 40,
                    "isActive": false
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let services = client.list_services().await.unwrap();

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].price, Price(25.0));
    assert_eq!(services[1].price, Price(40.0));
    assert!(!services[1].is_active);
}

#[tokio::test]
async fn test_update_service_uses_patch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/3"))
        .and(body_string_contains("Etching"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "service": {
                "serviceId": 3,
                "title": "Etching",
                "description": "Glass",
                "price": 12.5,
                "isActive": true
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_credential(&Credential::new("ADMIN"));
    let draft = ServiceDraft {
        title: "Etching".to_string(),
        description: "Glass".to_string(),
        price: Price(12.5),
        is_active: true,
    };
    let service = client.update_service(3, &draft).await.unwrap();

    assert_eq!(service.title, "Etching");
}

#[tokio::test]
async fn test_update_user_never_sends_confirm_password() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/alice"))
        .and(body_json(json!({
            "firstName": "Alice",
            "lastName": "Smith",
            "email": "alice@example.com",
            "password": "new-secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": alice_json() })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_credential(&Credential::new("T1"));
    let update = ProfileUpdate {
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        email: "alice@example.com".to_string(),
        birth_date: None,
        password: Some("new-secret".to_string()),
        confirm_password: Some("new-secret".to_string()),
    };

    client.update_user("alice", &update).await.unwrap();
}

#[tokio::test]
async fn test_create_order_posts_to_username_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user-services/alice"))
        .and(body_json(json!({
            "username": "alice",
            "serviceId": 1,
            "confirmedPrice": 25.0,
            "additionInfo": "Engrave 'Happy Birthday'"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "userService": {
                "userServiceId": 11,
                "serviceId": 1,
                "confirmedPrice": "25.00",
                "isCompleted": false,
                "additionInfo": "Engrave 'Happy Birthday'",
                "confirmationCode": "ABC123"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_credential(&Credential::new("T1"));
    let order = client
        .create_order(&NewOrder {
            username: "alice".to_string(),
            service_id: 1,
            confirmed_price: Price(25.0),
            addition_info: "Engrave 'Happy Birthday'".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(order.user_service_id, 11);
    assert_eq!(order.status_label(), "Pending");
    assert_eq!(order.confirmation_code.as_deref(), Some("ABC123"));
}

#[tokio::test]
async fn test_update_order_price_reads_result_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/user-services/alice/price/11"))
        .and(body_json(json!({ "price": 30.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "userServiceId": 11,
                "confirmedPrice": 30,
                "isCompleted": false
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_credential(&Credential::new("ADMIN"));
    let order = client
        .update_order_price("alice", 11, Price(30.0))
        .await
        .unwrap();

    assert_eq!(order.confirmed_price, Price(30.0));
}

#[tokio::test]
async fn test_update_review_patches_review_and_user_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/reviews/5/alice"))
        .and(body_json(json!({ "reviewText": "Even better", "rating": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "review": {
                "reviewId": 5,
                "username": "alice",
                "serviceId": 1,
                "reviewText": "Even better",
                "rating": 5
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri()).with_credential(&Credential::new("T1"));
    let draft = ReviewDraft::new("Even better", 5).unwrap();
    let review = client.update_review(5, "alice", &draft).await.unwrap();

    assert_eq!(review.rating, 5);
    assert_eq!(review.username.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_confirm_email_returns_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/confirmation/tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": alice_json() })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let user = client.confirm_email("tok-123").await.unwrap();

    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client.list_services().await.unwrap_err();

    assert_eq!(err.status(), None);
    assert!(err.messages()[0].starts_with("Unable to reach the server"));
}

#[tokio::test]
async fn test_username_with_query_characters_stays_in_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/al%3Fice%23x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": alice_json() })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let user = client.get_user("al?ice#x").await.unwrap();

    assert_eq!(user.username, "alice");
}
