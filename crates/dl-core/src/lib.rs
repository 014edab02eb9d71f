pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::login_data::LoginData;
pub use models::order::Order;
pub use models::price::Price;
pub use models::profile_update::ProfileUpdate;
pub use models::review::{Review, ReviewDraft};
pub use models::service::{Service, ServiceDraft};
pub use models::signup_data::SignupData;
pub use models::user::User;
pub use models::user_status::UserStatus;
