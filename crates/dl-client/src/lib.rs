//! dl-client
//!
//! Typed HTTP client for the DeadEye Laser Works REST API.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, ClientError, ClientResult, NewOrder, NewReview, normalize_messages};
