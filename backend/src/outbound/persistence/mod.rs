//! PostgreSQL adapters built on Diesel, `diesel-async`, and `bb8`.
//!
//! Row structs and table definitions stay private to this module; the
//! repositories translate them into domain types and map Diesel failures
//! into port errors.
//!
//! ```ignore
//! let pool = DbPool::new(PoolConfig::new(database_url)).await?;
//! let admins = DieselAdminRepository::new(pool.clone());
//! let reporting = DieselReportingRepository::new(pool);
//! ```

mod diesel_admin_repository;
mod diesel_reporting_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_admin_repository::DieselAdminRepository;
pub use diesel_reporting_repository::DieselReportingRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
