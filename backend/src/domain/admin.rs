//! Administrator identity and sign-up input.
//!
//! Sign-up validation reports every failing field at once as a list of
//! typed [`AdminValidationCode`]s so adapters can build a per-field error
//! object without inspecting message strings.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Minimum number of characters accepted for an admin password.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Sign-up field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminField {
    Name,
    Email,
    Password,
}

impl AdminField {
    /// Field name as used in client payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Validation failure codes for admin sign-up input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminValidationCode {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingPassword,
    PasswordTooShort,
}

impl AdminValidationCode {
    /// Field the code applies to.
    pub fn field(self) -> AdminField {
        match self {
            Self::MissingName => AdminField::Name,
            Self::MissingEmail | Self::InvalidEmail => AdminField::Email,
            Self::MissingPassword | Self::PasswordTooShort => AdminField::Password,
        }
    }

    /// Client-facing message for the code.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingName => "Please enter a name",
            Self::MissingEmail => "Please enter an email",
            Self::InvalidEmail => "Please enter a valid email",
            Self::MissingPassword => "Please enter a password",
            Self::PasswordTooShort => "Minimum password length is 6 characters",
        }
    }
}

impl fmt::Display for AdminValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field().as_str(), self.message())
    }
}

/// Non-empty collection of validation failures, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminValidationErrors(Vec<AdminValidationCode>);

impl AdminValidationErrors {
    fn from_codes(codes: Vec<AdminValidationCode>) -> Option<Self> {
        if codes.is_empty() {
            None
        } else {
            Some(Self(codes))
        }
    }

    /// A single failure.
    pub fn single(code: AdminValidationCode) -> Self {
        Self(vec![code])
    }

    /// Failing codes in field order (name, email, password).
    pub fn codes(&self) -> &[AdminValidationCode] {
        &self.0
    }

    /// Code reported for `field`, if that field failed.
    pub fn for_field(&self, field: AdminField) -> Option<AdminValidationCode> {
        self.0.iter().copied().find(|code| code.field() == field)
    }
}

impl fmt::Display for AdminValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for code in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

/// Stable admin identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, format = Uuid)]
pub struct AdminId(Uuid);

impl AdminId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. read from storage).
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse an identifier from its hyphenated string form.
    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw).map(Self)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, non-empty admin display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdminName(String);

impl AdminName {
    /// Validate and construct a name.
    pub fn new(raw: &str) -> Result<Self, AdminValidationCode> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AdminValidationCode::MissingName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for AdminName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Normalised (trimmed, lower-cased) email address.
///
/// # Examples
/// ```
/// use book_admin::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Ada@Example.COM ").unwrap();
/// assert_eq!(email.as_ref(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    pub fn new(raw: &str) -> Result<Self, AdminValidationCode> {
        let normalised = raw.trim().to_lowercase();
        if normalised.is_empty() {
            return Err(AdminValidationCode::MissingEmail);
        }
        if !looks_like_email(&normalised) {
            return Err(AdminValidationCode::InvalidEmail);
        }
        Ok(Self(normalised))
    }

    /// Normalise a login lookup key without shape validation.
    ///
    /// Login only needs the same normalisation as sign-up; a malformed address
    /// simply finds no admin.
    pub fn lookup_key(raw: &str) -> Option<Self> {
        let normalised = raw.trim().to_lowercase();
        if normalised.is_empty() {
            None
        } else {
            Some(Self(normalised))
        }
    }
}

fn looks_like_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated sign-up input. The password is still plaintext here and is
/// hashed by the account service before it reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmin {
    name: AdminName,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl NewAdmin {
    /// Validate raw sign-up fields, collecting every failure.
    ///
    /// # Examples
    /// ```
    /// use book_admin::domain::{AdminField, AdminValidationCode, NewAdmin};
    ///
    /// let err = NewAdmin::try_from_parts("", "not-an-email", "abc").unwrap_err();
    /// assert_eq!(err.codes().len(), 3);
    /// assert_eq!(
    ///     err.for_field(AdminField::Password),
    ///     Some(AdminValidationCode::PasswordTooShort)
    /// );
    /// ```
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AdminValidationErrors> {
        let name_result = AdminName::new(name);
        let email_result = EmailAddress::new(email);
        let password_result = validate_password(password);

        let codes: Vec<AdminValidationCode> = [
            name_result.as_ref().err().copied(),
            email_result.as_ref().err().copied(),
            password_result.err(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if let Some(errors) = AdminValidationErrors::from_codes(codes) {
            return Err(errors);
        }

        match (name_result, email_result) {
            (Ok(name), Ok(email)) => Ok(Self {
                name,
                email,
                password: Zeroizing::new(password.to_owned()),
            }),
            (Err(code), _) | (_, Err(code)) => Err(AdminValidationErrors::single(code)),
        }
    }

    /// Validated display name.
    pub fn name(&self) -> &AdminName {
        &self.name
    }

    /// Normalised email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

fn validate_password(password: &str) -> Result<(), AdminValidationCode> {
    if password.is_empty() {
        return Err(AdminValidationCode::MissingPassword);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(AdminValidationCode::PasswordTooShort);
    }
    Ok(())
}

/// Administrator record as exposed to clients. The password hash never
/// leaves the persistence layer through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminId,
    #[schema(value_type = String)]
    pub name: AdminName,
    #[schema(value_type = String)]
    pub email: EmailAddress,
    pub created_date: NaiveDate,
}
