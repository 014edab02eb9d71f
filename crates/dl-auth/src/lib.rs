pub mod claims;
pub mod credential;
pub mod credential_decoder;
pub mod error;

pub use claims::Claims;
pub use credential::Credential;
pub use credential_decoder::CredentialDecoder;
pub use error::{AuthError, Result};
