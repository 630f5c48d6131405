//! Driven port for admin account persistence.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Admin, AdminId, AdminName, EmailAddress};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by admin repository adapters.
    pub enum AdminRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "admin repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "admin repository query failed: {message}",
        /// The email is already registered to another admin.
        DuplicateEmail => "admin email already registered",
    }
}

/// Row to insert for a new admin. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdminRecord {
    pub id: AdminId,
    pub name: AdminName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_date: NaiveDate,
}

/// Credential material loaded for login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub id: AdminId,
    pub password_hash: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Insert a new admin, failing with `DuplicateEmail` when the email is taken.
    async fn insert(&self, record: &NewAdminRecord) -> Result<Admin, AdminRepositoryError>;

    /// Look up login credentials by normalised email.
    async fn find_credentials(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, AdminRepositoryError>;
}
