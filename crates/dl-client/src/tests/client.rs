use crate::{ApiClient, ClientError};

use dl_auth::Credential;

#[test]
fn given_trailing_slash_when_created_then_base_url_trimmed() {
    let client = ApiClient::new("http://localhost:3001/");
    assert_eq!(client.base_url, "http://localhost:3001");
}

#[test]
fn given_no_trailing_slash_when_created_then_base_url_unchanged() {
    let client = ApiClient::new("http://localhost:3001");
    assert_eq!(client.base_url, "http://localhost:3001");
}

#[test]
fn given_new_client_when_created_then_anonymous() {
    let client = ApiClient::new("http://localhost:3001");
    assert!(client.credential().is_none());
}

#[test]
fn given_credential_when_derived_then_original_stays_anonymous() {
    let client = ApiClient::new("http://localhost:3001");
    let authed = client.with_credential(&Credential::new("abc.def.ghi"));

    assert_eq!(authed.credential().map(Credential::as_str), Some("abc.def.ghi"));
    assert_eq!(authed.base_url, client.base_url);
    assert!(client.credential().is_none());
}

#[test]
fn given_authed_client_when_anonymous_then_credential_dropped() {
    let authed = ApiClient::new("http://localhost:3001").with_credential(&Credential::new("t"));
    assert!(authed.anonymous().credential().is_none());
}

#[test]
fn given_reserved_characters_when_endpoint_built_then_each_segment_encoded() {
    let client = ApiClient::new("http://localhost:3001");
    let url = client.endpoint(&["users", "a?b#c%d/e"]).unwrap();

    assert_eq!(url.as_str(), "http://localhost:3001/users/a%3Fb%23c%25d%2Fe");
    assert_eq!(url.query(), None);
}

#[test]
fn given_base_path_when_endpoint_built_then_segments_appended() {
    let client = ApiClient::new("http://localhost:3001/api/");
    let url = client.endpoint(&["services", "3", "reviews"]).unwrap();

    assert_eq!(url.path(), "/api/services/3/reviews");
}

#[test]
fn given_unparseable_base_url_when_endpoint_built_then_invalid_url_error() {
    let client = ApiClient::new("not a url");
    let err = client.endpoint(&["services"]).unwrap_err();

    assert!(matches!(err, ClientError::InvalidUrl { .. }));
    assert_eq!(err.messages(), vec!["Invalid server address: not a url".to_string()]);
}
