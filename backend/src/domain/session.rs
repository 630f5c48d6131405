//! Session token claims bound to an admin identifier.
//!
//! Tokens are stateless: expiry is the only invalidation path. Logging out
//! clears the cookie on the client but a copied token remains valid until
//! `exp`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::admin::AdminId;

/// Session lifetime in seconds (three days).
pub const SESSION_TTL_SECS: u64 = 3 * 24 * 60 * 60;

/// Claims carried by the signed session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin identifier in hyphenated UUID form.
    pub id: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: u64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
}

impl SessionClaims {
    /// Build claims for `admin_id` issued at `issued_at`.
    ///
    /// Instants before the Unix epoch clamp to zero.
    ///
    /// # Examples
    /// ```
    /// use book_admin::domain::{AdminId, SESSION_TTL_SECS, SessionClaims};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let issued = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let claims = SessionClaims::for_admin(&AdminId::random(), issued);
    /// assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECS);
    /// ```
    pub fn for_admin(admin_id: &AdminId, issued_at: DateTime<Utc>) -> Self {
        let iat = u64::try_from(issued_at.timestamp()).unwrap_or(0);
        Self {
            id: admin_id.to_string(),
            iat,
            exp: iat.saturating_add(SESSION_TTL_SECS),
        }
    }

    /// Parse the admin identifier out of the claims.
    pub fn admin_id(&self) -> Option<AdminId> {
        AdminId::parse(&self.id).ok()
    }
}
