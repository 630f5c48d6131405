//! Authentication primitives: login credentials and the admin auth failure
//! taxonomy.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use zeroize::Zeroizing;

use super::admin::{AdminValidationErrors, EmailAddress};

/// Failures raised by admin sign-up and login.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminAuthError {
    /// No admin is registered under the supplied email.
    #[error("incorrect email")]
    IncorrectEmail,
    /// The admin exists but the password does not verify.
    #[error("incorrect password")]
    IncorrectPassword,
    /// Another admin already uses the email (unique constraint).
    #[error("email already registered")]
    DuplicateEmail,
    /// Sign-up input failed validation.
    #[error("admin validation failed: {0}")]
    Validation(AdminValidationErrors),
    /// Store or runtime failure; the message is for logs only.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AdminAuthError {
    /// Convenience constructor for [`AdminAuthError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for failures caused by client input rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}

impl From<AdminValidationErrors> for AdminAuthError {
    fn from(value: AdminValidationErrors) -> Self {
        Self::Validation(value)
    }
}

/// Login credentials.
///
/// ## Invariants
/// - `email` is trimmed and lower-cased, matching sign-up normalisation.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use book_admin::domain::{AdminAuthError, LoginCredentials};
///
/// let creds = LoginCredentials::try_from_parts("Ada@Example.com", "secret1").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
///
/// let err = LoginCredentials::try_from_parts("", "secret1").unwrap_err();
/// assert_eq!(err, AdminAuthError::IncorrectEmail);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    ///
    /// A blank email can never match an admin and a blank password can never
    /// verify, so they map straight to the corresponding login failures.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AdminAuthError> {
        let email = EmailAddress::lookup_key(email).ok_or(AdminAuthError::IncorrectEmail)?;
        if password.is_empty() {
            return Err(AdminAuthError::IncorrectPassword);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email used for the admin lookup.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
