//! The `admin` session cookie.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};

use crate::domain::SESSION_TTL_SECS;

/// Cookie carrying the signed session token.
pub const ADMIN_COOKIE: &str = "admin";

/// Cookie attributes that vary by deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieSettings {
    /// Send the cookie over HTTPS only.
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self { secure: true }
    }
}

impl CookieSettings {
    /// Cookie set on sign-up and login; lives as long as the token.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let max_age = i64::try_from(SESSION_TTL_SECS).unwrap_or(i64::MAX);
        Cookie::build(ADMIN_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(max_age))
            .finish()
    }

    /// Empty cookie with `Max-Age=0`, set on logout.
    pub fn cleared_cookie(&self) -> Cookie<'static> {
        Cookie::build(ADMIN_COOKIE, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::ZERO)
            .finish()
    }
}
