//! Domain primitives, services, and ports.
//!
//! Purpose: keep admin account rules and reporting arithmetic free of HTTP
//! and SQL concerns. Adapters in `inbound` and `outbound` talk to this layer
//! through the traits in [`ports`].
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `Admin`, `AdminId`, `NewAdmin`: administrator identity and sign-up input.
//! - `AdminAuthError`: sign-up and login failure taxonomy.
//! - `DashboardStats`, `TransactionRecord`, `PaymentRecord`: reporting aggregates.
//! - `AdminAccountService`, `ReportingService`: use-case implementations.

pub mod admin;
pub mod admin_service;
pub mod auth;
pub mod error;
pub mod payments;
pub mod ports;
pub mod reporting;
pub mod reporting_service;
pub mod session;

pub use self::admin::{
    Admin, AdminField, AdminId, AdminName, AdminValidationCode, AdminValidationErrors,
    EmailAddress, NewAdmin, PASSWORD_MIN_LEN,
};
pub use self::admin_service::AdminAccountService;
pub use self::auth::{AdminAuthError, LoginCredentials};
pub use self::error::{Error, ErrorCode};
pub use self::payments::{
    BookSummary, PaymentRecord, ServiceType, TransactionRecord, UserSummary, combine_payments,
};
pub use self::reporting::{CollectionCounts, DashboardStats, RevenueTotals, parse_price, sum_prices};
pub use self::reporting_service::ReportingService;
pub use self::session::{SESSION_TTL_SECS, SessionClaims};
