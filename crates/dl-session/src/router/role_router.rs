use crate::{Access, Route, ViewGroup};

use dl_config::RoutingConfig;
use dl_core::User;
use log::debug;

/// Path of the catch-all redirect for unknown views
const FALLBACK_PATH: &str = "/";

/// True iff a user is present and is an admin
pub fn guard_admin(user: Option<&User>) -> bool {
    user.is_some_and(User::is_admin)
}

/// True iff a user is present
pub fn guard_authenticated(user: Option<&User>) -> bool {
    user.is_some()
}

/// Gates the admin and member view groups.
///
/// Evaluation is a pure function of the path and the current user; call it
/// again whenever the identity store changes.
#[derive(Debug, Clone)]
pub struct RoleRouter {
    admin_denied_redirect: String,
    unauthenticated_redirect: String,
}

impl RoleRouter {
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            admin_denied_redirect: config.admin_denied_redirect.clone(),
            unauthenticated_redirect: config.unauthenticated_redirect.clone(),
        }
    }

    pub fn evaluate(&self, path: &str, user: Option<&User>) -> Access {
        let Some(route) = Route::parse(path) else {
            debug!("Unknown path {path}, redirecting to {FALLBACK_PATH}");
            return Access::Redirect(FALLBACK_PATH.to_string());
        };

        self.evaluate_route(route, user)
    }

    pub fn evaluate_route(&self, route: Route, user: Option<&User>) -> Access {
        match route.group() {
            ViewGroup::Public => Access::Permit(route),
            ViewGroup::Authenticated if guard_authenticated(user) => Access::Permit(route),
            ViewGroup::Authenticated => {
                debug!("{route} requires login");
                Access::Redirect(self.unauthenticated_redirect.clone())
            }
            ViewGroup::Admin if guard_admin(user) => Access::Permit(route),
            ViewGroup::Admin => {
                debug!("{route} requires admin");
                Access::Redirect(self.admin_denied_redirect.clone())
            }
        }
    }
}

impl Default for RoleRouter {
    fn default() -> Self {
        Self::new(&RoutingConfig::default())
    }
}
