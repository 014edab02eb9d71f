pub(crate) mod access;
pub(crate) mod navigation;
pub(crate) mod role_router;
pub(crate) mod route;

pub use access::Access;
pub use navigation::{NavAction, NavLink, navigation_menu, verification_notice};
pub use role_router::{RoleRouter, guard_admin, guard_authenticated};
pub use route::{Route, ViewGroup};
