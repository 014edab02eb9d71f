use crate::{AuthError, Claims, Credential, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerance applied to `exp`
const EXPIRY_LEEWAY_SECS: u64 = 30;

/// Local credential decoder.
///
/// Signatures are NOT verified: the client never holds the signing key, and
/// decoded claims are used only to pick which user record to fetch from the
/// API. Expiry is still checked so an expired credential is dropped without
/// a round trip.
pub struct CredentialDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl CredentialDecoder {
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = true;
        validation.leeway = EXPIRY_LEEWAY_SECS;

        Self {
            decoding_key: DecodingKey::from_secret(&[]),
            validation,
        }
    }

    /// Decode a credential and return its claims
    #[track_caller]
    pub fn decode(&self, credential: &Credential) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let token_data =
            decode::<Claims>(credential.as_str(), &self.decoding_key, &self.validation).map_err(
                |e| match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired { location },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location,
                    },
                },
            )?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Decode a credential and return only the subject username
    #[track_caller]
    pub fn subject(&self, credential: &Credential) -> AuthErrorResult<String> {
        self.decode(credential).map(|claims| claims.username)
    }
}

impl Default for CredentialDecoder {
    fn default() -> Self {
        Self::new()
    }
}
