use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Signs and verifies bearer tokens with a symmetric HS256 secret.
///
/// The secret is injected at construction; there is no environment
/// fallback here. Blacklist lookups are the caller's responsibility,
/// this type only covers signature and expiry.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Signature-only validation used when revoking: the expiry claim
    /// is read but not enforced.
    revocation_validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        let mut revocation_validation = Validation::new(Algorithm::HS256);
        revocation_validation.validate_exp = false;
        revocation_validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            revocation_validation,
        }
    }

    /// Issue a signed token for `user_id` expiring after `ttl`.
    #[track_caller]
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> AuthErrorResult<String> {
        let claims = Claims::new(user_id, ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and expiry and return the claims.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Read the expiry claim from a token for revocation bookkeeping.
    ///
    /// The signature is still checked (a forged token never reaches the
    /// blacklist) but an already-expired token decodes fine. Returns
    /// `None` for anything undecodable: revoking a malformed token is a
    /// no-op, not an error.
    pub fn decode_expiry(&self, token: &str) -> Option<i64> {
        decode::<Claims>(token, &self.decoding_key, &self.revocation_validation)
            .ok()
            .map(|data| data.claims.exp)
    }
}
