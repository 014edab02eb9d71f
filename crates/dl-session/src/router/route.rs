use std::fmt;

/// Which guard a view sits behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewGroup {
    Public,
    Authenticated,
    Admin,
}

/// Every view the storefront knows about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Homepage,
    Login,
    Signup,
    Services,
    ServiceDetail { service_id: String },
    AddUserService { service_id: String },
    EmailVerification { token: String },
    UserHome,
    UserOrders,
    UserProfile,
    AdminHome,
    AdminServices,
    AdminOrders,
}

impl Route {
    /// Match a path against the known views.
    ///
    /// Query strings, fragments and a trailing slash are ignored. Returns
    /// `None` for paths no view answers to.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["homepage"] => Route::Homepage,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["services"] => Route::Services,
            ["services", id] => Route::ServiceDetail {
                service_id: (*id).to_string(),
            },
            ["services", id, "add-user-service"] => Route::AddUserService {
                service_id: (*id).to_string(),
            },
            ["email-verification", token] => Route::EmailVerification {
                token: (*token).to_string(),
            },
            ["user"] => Route::UserHome,
            ["user", "orders"] => Route::UserOrders,
            ["user", "profile"] => Route::UserProfile,
            ["admin"] => Route::AdminHome,
            ["admin", "services"] => Route::AdminServices,
            ["admin", "orders"] => Route::AdminOrders,
            _ => return None,
        };

        Some(route)
    }

    pub fn group(&self) -> ViewGroup {
        match self {
            Route::UserHome | Route::UserOrders | Route::UserProfile => ViewGroup::Authenticated,
            Route::AdminHome | Route::AdminServices | Route::AdminOrders => ViewGroup::Admin,
            _ => ViewGroup::Public,
        }
    }

    /// Canonical path of the view
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Homepage => "/homepage".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Services => "/services".to_string(),
            Route::ServiceDetail { service_id } => format!("/services/{service_id}"),
            Route::AddUserService { service_id } => {
                format!("/services/{service_id}/add-user-service")
            }
            Route::EmailVerification { token } => format!("/email-verification/{token}"),
            Route::UserHome => "/user".to_string(),
            Route::UserOrders => "/user/orders".to_string(),
            Route::UserProfile => "/user/profile".to_string(),
            Route::AdminHome => "/admin".to_string(),
            Route::AdminServices => "/admin/services".to_string(),
            Route::AdminOrders => "/admin/orders".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
