//! Driven port for password hashing.

use super::define_port_error;

define_port_error! {
    /// Hashing failures. Verification mismatches are not errors.
    pub enum CredentialHashError {
        /// The hasher could not produce a hash.
        Hash { message: String } => "password hashing failed: {message}",
    }
}

/// Produces and checks password hashes.
///
/// Implementations are CPU-bound and synchronous; callers decide whether to
/// move the work off the async executor.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, CredentialHashError>;

    /// Return whether `password` matches `stored_hash`. An unparsable stored
    /// hash never matches.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}
