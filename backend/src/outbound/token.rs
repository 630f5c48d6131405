//! HS256 session tokens signed with the configured secret.
//!
//! Expiry is checked against the injected clock rather than the system time
//! so tests can move time without sleeping.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use zeroize::Zeroizing;

use crate::domain::ports::{SessionTokenError, SessionTokens};
use crate::domain::{AdminId, SessionClaims};

/// Minimum accepted secret length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Signs and verifies [`SessionClaims`].
#[derive(Clone)]
pub struct JwtSessionTokens {
    secret: Arc<Zeroizing<Vec<u8>>>,
    clock: Arc<dyn Clock>,
}

impl JwtSessionTokens {
    /// Build a token service.
    ///
    /// # Errors
    /// Returns [`SessionTokenError::Issue`] when `secret` is shorter than
    /// [`MIN_SECRET_LEN`] bytes.
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Result<Self, SessionTokenError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(SessionTokenError::issue(format!(
                "secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(Self {
            secret: Arc::new(Zeroizing::new(secret.to_vec())),
            clock,
        })
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify` against the injected clock.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }

    fn now_secs(&self) -> u64 {
        u64::try_from(self.clock.utc().timestamp()).unwrap_or(0)
    }
}

impl SessionTokens for JwtSessionTokens {
    fn issue(&self, admin_id: &AdminId) -> Result<String, SessionTokenError> {
        let claims = SessionClaims::for_admin(admin_id, self.clock.utc());
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_slice()),
        )
        .map_err(|err| SessionTokenError::issue(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<AdminId, SessionTokenError> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_slice()),
            &Self::validation(),
        )
        .map_err(|err| SessionTokenError::invalid(err.to_string()))?;
        let claims = data.claims;
        if claims.exp <= self.now_secs() {
            return Err(SessionTokenError::invalid("token expired"));
        }
        claims
            .admin_id()
            .ok_or_else(|| SessionTokenError::invalid("subject is not an admin id"))
    }
}
