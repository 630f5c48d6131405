//! Dashboard queries over the [`ReportingRepository`] port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{DashboardQuery, ReportingRepository, ReportingRepositoryError};
use crate::domain::{
    CollectionCounts, DashboardStats, Error, PaymentRecord, RevenueTotals, ServiceType,
    TransactionRecord, combine_payments,
};

/// Implements [`DashboardQuery`] by fanning out independent reads.
///
/// No transaction spans the reads, so a write landing mid-request can make
/// the counts and totals describe slightly different snapshots.
#[derive(Clone)]
pub struct ReportingService {
    repository: Arc<dyn ReportingRepository>,
}

impl ReportingService {
    pub fn new(repository: Arc<dyn ReportingRepository>) -> Self {
        Self { repository }
    }
}

fn map_reporting_error(err: ReportingRepositoryError) -> Error {
    error!(error = %err, "reporting read failed");
    Error::internal(err.to_string())
}

#[async_trait]
impl DashboardQuery for ReportingService {
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error> {
        let repo = &self.repository;
        let (users, books, purchases, rentals, purchase_prices, rental_prices) = tokio::try_join!(
            repo.count_users(),
            repo.count_books(),
            repo.count_transactions(ServiceType::Purchase),
            repo.count_transactions(ServiceType::Rental),
            repo.prices(ServiceType::Purchase),
            repo.prices(ServiceType::Rental),
        )
        .map_err(map_reporting_error)?;

        Ok(DashboardStats::new(
            CollectionCounts {
                users,
                books,
                purchases,
                rentals,
            },
            RevenueTotals::from_prices(purchase_prices, rental_prices),
        ))
    }

    async fn all_purchases(&self) -> Result<Vec<TransactionRecord>, Error> {
        self.repository
            .list_transactions(ServiceType::Purchase)
            .await
            .map_err(map_reporting_error)
    }

    async fn all_rentals(&self) -> Result<Vec<TransactionRecord>, Error> {
        self.repository
            .list_transactions(ServiceType::Rental)
            .await
            .map_err(map_reporting_error)
    }

    async fn all_payments(&self) -> Result<Vec<PaymentRecord>, Error> {
        let (purchases, rentals) = tokio::try_join!(self.all_purchases(), self.all_rentals())?;
        Ok(combine_payments(purchases, rentals))
    }
}
