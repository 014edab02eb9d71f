use crate::guard_admin;

use dl_core::User;

/// What a navigation entry does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Go(&'static str),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub action: NavAction,
}

const fn go(label: &'static str, path: &'static str) -> NavLink {
    NavLink {
        label,
        action: NavAction::Go(path),
    }
}

/// Links of the navigation bar for the current user
pub fn navigation_menu(user: Option<&User>) -> Vec<NavLink> {
    let mut links = vec![go("Home", "/"), go("Services", "/services")];

    let Some(user) = user else {
        links.push(go("Login", "/login"));
        links.push(go("Sign up", "/signup"));
        return links;
    };

    if guard_admin(Some(user)) {
        links.push(go("Admin Services", "/admin/services"));
        links.push(go("Admin Orders", "/admin/orders"));
    }

    links.push(go("Profile", "/user/profile"));
    links.push(go("Orders", "/user/orders"));
    links.push(NavLink {
        label: "Logout",
        action: NavAction::Logout,
    });

    links
}

/// Notice shown to a logged-in user whose email is unverified
pub fn verification_notice(user: Option<&User>) -> Option<String> {
    match user {
        Some(user) if !user.is_verified => Some(
            "Your email is not verified. Please verify your email from /user/profile.".to_string(),
        ),
        _ => None,
    }
}
