use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::domain::ports::{ReportingRepository, ReportingRepositoryError};
use crate::domain::{BookSummary, ServiceType, TransactionRecord, UserSummary};

#[derive(Debug, Clone)]
struct StoredTransaction {
    id: Uuid,
    book_id: Option<Uuid>,
    user_id: Option<Uuid>,
    price: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Store {
    users: Vec<UserSummary>,
    books: Vec<BookSummary>,
    purchases: Vec<StoredTransaction>,
    rentals: Vec<StoredTransaction>,
    ticks: i64,
    failure: Option<ReportingRepositoryError>,
}

impl Store {
    fn next_instant(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(self.ticks)
    }

    fn table(&self, kind: ServiceType) -> &[StoredTransaction] {
        match kind {
            ServiceType::Purchase => &self.purchases,
            ServiceType::Rental => &self.rentals,
        }
    }

    fn check_failure(&self) -> Result<(), ReportingRepositoryError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn resolve(&self, row: &StoredTransaction) -> TransactionRecord {
        TransactionRecord {
            id: row.id,
            book: row
                .book_id
                .and_then(|id| self.books.iter().find(|book| book.id == id).cloned()),
            user: row
                .user_id
                .and_then(|id| self.users.iter().find(|user| user.id == id).cloned()),
            price: row.price.clone(),
            created_at: row.created_at,
        }
    }
}

/// Seedable reporting store. Rows are ordered by insertion.
#[derive(Debug, Default)]
pub struct InMemoryReportingRepository {
    store: Mutex<Store>,
}

impl InMemoryReportingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn add_user(&self, name: &str, email: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().users.push(UserSummary {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
        });
        id
    }

    pub fn add_book(&self, title: &str, author: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().books.push(BookSummary {
            id,
            title: title.to_owned(),
            author: author.to_owned(),
        });
        id
    }

    /// Record a purchase or rental. References need not exist.
    pub fn add_transaction(
        &self,
        kind: ServiceType,
        book_id: Option<Uuid>,
        user_id: Option<Uuid>,
        price: &str,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let mut store = self.lock();
        let created_at = store.next_instant();
        let row = StoredTransaction {
            id,
            book_id,
            user_id,
            price: price.to_owned(),
            created_at,
        };
        match kind {
            ServiceType::Purchase => store.purchases.push(row),
            ServiceType::Rental => store.rentals.push(row),
        }
        id
    }

    /// Make every subsequent read fail with `error`.
    pub fn fail_with(&self, error: ReportingRepositoryError) {
        self.lock().failure = Some(error);
    }
}

#[async_trait]
impl ReportingRepository for InMemoryReportingRepository {
    async fn count_users(&self) -> Result<u64, ReportingRepositoryError> {
        let store = self.lock();
        store.check_failure()?;
        Ok(store.users.len() as u64)
    }

    async fn count_books(&self) -> Result<u64, ReportingRepositoryError> {
        let store = self.lock();
        store.check_failure()?;
        Ok(store.books.len() as u64)
    }

    async fn count_transactions(
        &self,
        kind: ServiceType,
    ) -> Result<u64, ReportingRepositoryError> {
        let store = self.lock();
        store.check_failure()?;
        Ok(store.table(kind).len() as u64)
    }

    async fn prices(&self, kind: ServiceType) -> Result<Vec<String>, ReportingRepositoryError> {
        let store = self.lock();
        store.check_failure()?;
        Ok(store
            .table(kind)
            .iter()
            .map(|row| row.price.clone())
            .collect())
    }

    async fn list_transactions(
        &self,
        kind: ServiceType,
    ) -> Result<Vec<TransactionRecord>, ReportingRepositoryError> {
        let store = self.lock();
        store.check_failure()?;
        Ok(store
            .table(kind)
            .iter()
            .map(|row| store.resolve(row))
            .collect())
    }
}
