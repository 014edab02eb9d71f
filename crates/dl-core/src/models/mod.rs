pub mod login_data;
pub mod order;
pub mod price;
pub mod profile_update;
pub mod review;
pub mod service;
pub mod signup_data;
pub mod user;
pub mod user_status;
