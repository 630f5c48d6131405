//! Driving port for the admin dashboard pages.

use async_trait::async_trait;

use crate::domain::{DashboardStats, Error, PaymentRecord, TransactionRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Counts and revenue for the dashboard summary.
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error>;

    async fn all_purchases(&self) -> Result<Vec<TransactionRecord>, Error>;

    async fn all_rentals(&self) -> Result<Vec<TransactionRecord>, Error>;

    /// Purchases then rentals, each tagged with its service type.
    async fn all_payments(&self) -> Result<Vec<PaymentRecord>, Error>;
}
