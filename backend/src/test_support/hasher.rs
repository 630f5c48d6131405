use crate::domain::ports::{CredentialHashError, CredentialHasher};

/// Reversible stand-in for argon2 so HTTP tests stay fast.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixHasher;

const PREFIX: &str = "plain$";

impl CredentialHasher for PrefixHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialHashError> {
        Ok(format!("{PREFIX}{password}"))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        stored_hash
            .strip_prefix(PREFIX)
            .is_some_and(|stored| stored == password)
    }
}
