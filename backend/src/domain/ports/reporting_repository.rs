//! Driven port for read-only reporting queries over the store.

use async_trait::async_trait;

use crate::domain::{ServiceType, TransactionRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by reporting adapters.
    pub enum ReportingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "reporting repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "reporting repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportingRepository: Send + Sync {
    async fn count_users(&self) -> Result<u64, ReportingRepositoryError>;

    async fn count_books(&self) -> Result<u64, ReportingRepositoryError>;

    /// Number of rows in the purchase or rental table.
    async fn count_transactions(&self, kind: ServiceType)
    -> Result<u64, ReportingRepositoryError>;

    /// Raw `price` column of the purchase or rental table.
    async fn prices(&self, kind: ServiceType) -> Result<Vec<String>, ReportingRepositoryError>;

    /// Purchases or rentals with book and user resolved, oldest first.
    async fn list_transactions(
        &self,
        kind: ServiceType,
    ) -> Result<Vec<TransactionRecord>, ReportingRepositoryError>;
}
