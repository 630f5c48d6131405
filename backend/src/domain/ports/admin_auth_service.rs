//! Driving port for admin sign-up and login.
//!
//! HTTP handlers call this port; tests substitute a mock so handler
//! behaviour can be checked without hashing or persistence.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Admin, AdminAuthError, AdminId, LoginCredentials, NewAdmin};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminAuthService: Send + Sync {
    /// Register a new admin created on `created_date`.
    async fn sign_up(
        &self,
        admin: NewAdmin,
        created_date: NaiveDate,
    ) -> Result<Admin, AdminAuthError>;

    /// Check credentials and return the admin id.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AdminId, AdminAuthError>;
}
