use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_DENIED_REDIRECT,
    DEFAULT_UNAUTHENTICATED_REDIRECT,
};

use serde::Deserialize;

/// Redirect targets used by the route guards.
///
/// The defaults keep the deployed behaviour: a denied admin view goes to `/`,
/// a denied member view goes to `/homepage`. Set both to the same path to
/// unify them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub admin_denied_redirect: String,
    pub unauthenticated_redirect: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            admin_denied_redirect: String::from(DEFAULT_ADMIN_DENIED_REDIRECT),
            unauthenticated_redirect: String::from(DEFAULT_UNAUTHENTICATED_REDIRECT),
        }
    }
}

impl RoutingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, target) in [
            ("admin_denied_redirect", &self.admin_denied_redirect),
            ("unauthenticated_redirect", &self.unauthenticated_redirect),
        ] {
            if !target.starts_with('/') {
                return Err(ConfigError::routing(format!(
                    "routing.{name} must be an absolute path starting with '/', got '{target}'"
                )));
            }
            if is_guarded(target) {
                return Err(ConfigError::routing(format!(
                    "routing.{name} cannot point into a guarded view group, got '{target}'"
                )));
            }
        }

        Ok(())
    }
}

fn is_guarded(path: &str) -> bool {
    ["/admin", "/user"]
        .iter()
        .any(|group| path == *group || path.starts_with(&format!("{group}/")))
}
