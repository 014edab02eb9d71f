mod price;
mod profile_update;
mod review;
mod user;
mod user_status;
