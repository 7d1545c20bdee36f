use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Algorithm, Argon2, Params, ParamsBuilder, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

/// Argon2id password hashing with server-wide parameters.
///
/// Verification goes through the hashing primitive itself, so the only
/// timing signal is the one the primitive already has.
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    // ~64 MiB / 3 iterations is a solid server baseline without
    // dedicated tuning.
    const DEFAULT_MEMORY_KIB: u32 = 64 * 1024;
    const DEFAULT_ITERATIONS: u32 = 3;
    const DEFAULT_PARALLELISM: u32 = 1;

    #[track_caller]
    pub fn new() -> AuthErrorResult<Self> {
        let params = ParamsBuilder::new()
            .m_cost(Self::DEFAULT_MEMORY_KIB)
            .t_cost(Self::DEFAULT_ITERATIONS)
            .p_cost(Self::DEFAULT_PARALLELISM)
            .output_len(32)
            .build()
            .map_err(|e| AuthError::PasswordHash {
                message: format!("invalid Argon2 parameters: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self::with_params(params))
    }

    /// Caller-specified parameters, mainly for tests where the default
    /// memory cost is overkill.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a password with a fresh random salt. Returns a PHC string
    /// suitable for storage.
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored PHC hash.
    #[track_caller]
    pub fn verify(&self, password: &str, password_hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| AuthError::PasswordHash {
            message: format!("stored hash is malformed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
