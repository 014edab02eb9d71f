use crate::Route;

/// Outcome of evaluating a path for the current user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Permit(Route),
    Redirect(String),
}

impl Access {
    pub fn is_permitted(&self) -> bool {
        matches!(self, Access::Permit(_))
    }

    /// Redirect target, if access was denied
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Access::Permit(_) => None,
            Access::Redirect(target) => Some(target),
        }
    }
}
