//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on domain ports,
//! so tests can swap every collaborator for an in-memory double.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;

use crate::domain::ports::{AdminAuthService, DashboardQuery, SessionTokens};
use crate::inbound::http::cookies::CookieSettings;

/// Dependency bundle for the admin handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AdminAuthService>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub tokens: Arc<dyn SessionTokens>,
    pub clock: Arc<dyn Clock>,
    pub cookies: CookieSettings,
}

impl HttpState {
    pub fn new(
        auth: Arc<dyn AdminAuthService>,
        dashboard: Arc<dyn DashboardQuery>,
        tokens: Arc<dyn SessionTokens>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            auth,
            dashboard,
            tokens,
            clock,
            cookies: CookieSettings::default(),
        }
    }

    pub fn with_cookie_settings(mut self, cookies: CookieSettings) -> Self {
        self.cookies = cookies;
        self
    }

    /// Calendar date stamped on new admin records.
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}
