pub(crate) mod api_client;
pub(crate) mod envelopes;
pub(crate) mod error;
pub(crate) mod requests;

pub use api_client::ApiClient;
pub use error::{ClientError, Result as ClientResult, normalize_messages};
pub use requests::{NewOrder, NewReview};
