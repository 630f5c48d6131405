//! Driven port for minting and checking admin session tokens.

use crate::domain::AdminId;

use super::define_port_error;

define_port_error! {
    /// Token failures.
    pub enum SessionTokenError {
        /// Signing failed.
        Issue { message: String } => "session token could not be issued: {message}",
        /// Signature, shape, expiry, or subject check failed.
        Invalid { message: String } => "session token rejected: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait SessionTokens: Send + Sync {
    /// Sign a token for `admin_id` valid for the session lifetime.
    fn issue(&self, admin_id: &AdminId) -> Result<String, SessionTokenError>;

    /// Check a token and return the admin it was issued for.
    fn verify(&self, token: &str) -> Result<AdminId, SessionTokenError>;
}
