//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`AdminAuthService`, `DashboardQuery`) are called by inbound
//! adapters. Driven ports (`AdminRepository`, `ReportingRepository`,
//! `CredentialHasher`, `SessionTokens`) are implemented in `outbound`.

mod macros;
pub(crate) use macros::define_port_error;

mod admin_auth_service;
mod admin_repository;
mod credential_hasher;
mod dashboard_query;
mod reporting_repository;
mod session_tokens;

pub use admin_auth_service::AdminAuthService;
#[cfg(test)]
pub use admin_auth_service::MockAdminAuthService;
#[cfg(test)]
pub use admin_repository::MockAdminRepository;
pub use admin_repository::{
    AdminRepository, AdminRepositoryError, NewAdminRecord, StoredCredentials,
};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHashError, CredentialHasher};
pub use dashboard_query::DashboardQuery;
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
#[cfg(test)]
pub use reporting_repository::MockReportingRepository;
pub use reporting_repository::{ReportingRepository, ReportingRepositoryError};
#[cfg(test)]
pub use session_tokens::MockSessionTokens;
pub use session_tokens::{SessionTokenError, SessionTokens};
