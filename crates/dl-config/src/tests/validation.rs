use crate::{ApiConfig, Config, RoutingConfig, SessionConfig};
use crate::tests::setup_config_dir;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
fn given_non_http_base_url_when_validate_then_error() {
    let config = ApiConfig {
        base_url: "ftp://files.example".into(),
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("api.base_url")
    );
}

#[test]
fn given_https_base_url_when_validate_then_ok() {
    let config = ApiConfig {
        base_url: "https://api.example".into(),
    };
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_empty_storage_key_when_validate_then_error() {
    let config = SessionConfig {
        storage_key: "  ".into(),
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_storage_file_with_traversal_when_validate_then_error() {
    let config = SessionConfig {
        storage_file: "../../etc/passwd".into(),
        ..Default::default()
    };

    let result = config.validate();

    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("cannot contain '..'")
    );
}

#[test]
fn given_relative_redirect_when_validate_then_error() {
    let config = RoutingConfig {
        unauthenticated_redirect: "homepage".into(),
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_redirect_into_guarded_group_when_validate_then_error() {
    for target in ["/admin", "/admin/services", "/user/profile"] {
        let config = RoutingConfig {
            admin_denied_redirect: target.into(),
            ..Default::default()
        };
        assert!(config.validate().is_err(), "{target} should be rejected");
    }
}

#[test]
fn given_unified_redirects_when_validate_then_ok() {
    let config = RoutingConfig {
        admin_denied_redirect: "/".into(),
        unauthenticated_redirect: "/".into(),
    };
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    let _temp = setup_config_dir();
    let mut config = Config::load().unwrap();
    config.logging.file = Some("../escape.log".into());

    assert_that!(config.validate(), err(anything()));
}
