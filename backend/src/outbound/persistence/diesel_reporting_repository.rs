//! PostgreSQL-backed `ReportingRepository`.
//!
//! Purchases and rentals share a shape but live in separate tables, so the
//! per-table queries are generated by `transaction_queries!`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::pooled_connection::bb8::PooledConnection;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{ReportingRepository, ReportingRepositoryError};
use crate::domain::{BookSummary, ServiceType, TransactionRecord, UserSummary};

use super::error_mapping::{reporting_diesel_error, reporting_pool_error};
use super::models::TransactionJoinRow;
use super::pool::DbPool;
use super::schema::{books, purchases, rentals, users};

type Conn<'a> = PooledConnection<'a, AsyncPgConnection>;

/// Diesel implementation of [`ReportingRepository`].
#[derive(Clone)]
pub struct DieselReportingRepository {
    pool: DbPool,
}

impl DieselReportingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> Result<Conn<'_>, ReportingRepositoryError> {
        self.pool.get().await.map_err(reporting_pool_error)
    }
}

fn to_count(raw: i64, operation: &str) -> Result<u64, ReportingRepositoryError> {
    u64::try_from(raw)
        .map_err(|_| ReportingRepositoryError::query(format!("{operation}: negative count {raw}")))
}

/// Generates count, price, and listing queries for one transaction table.
macro_rules! transaction_queries {
    ($table:ident, $count_fn:ident, $prices_fn:ident, $list_fn:ident) => {
        async fn $count_fn(conn: &mut Conn<'_>) -> Result<u64, ReportingRepositoryError> {
            let operation = concat!("count ", stringify!($table));
            let raw: i64 = $table::table
                .count()
                .get_result(conn)
                .await
                .map_err(|err| reporting_diesel_error(err, operation))?;
            to_count(raw, operation)
        }

        async fn $prices_fn(conn: &mut Conn<'_>) -> Result<Vec<String>, ReportingRepositoryError> {
            $table::table
                .select($table::price)
                .load(conn)
                .await
                .map_err(|err| {
                    reporting_diesel_error(err, concat!("load ", stringify!($table), " prices"))
                })
        }

        async fn $list_fn(
            conn: &mut Conn<'_>,
        ) -> Result<Vec<TransactionRecord>, ReportingRepositoryError> {
            let rows: Vec<TransactionJoinRow> = $table::table
                .left_join(books::table)
                .left_join(users::table)
                .order(($table::created_at.asc(), $table::id.asc()))
                .select((
                    $table::id,
                    $table::price,
                    $table::created_at,
                    books::id.nullable(),
                    books::title.nullable(),
                    books::author.nullable(),
                    users::id.nullable(),
                    users::name.nullable(),
                    users::email.nullable(),
                ))
                .load(conn)
                .await
                .map_err(|err| reporting_diesel_error(err, concat!("list ", stringify!($table))))?;
            Ok(rows.into_iter().map(row_to_record).collect())
        }
    };
}

transaction_queries!(purchases, count_purchases, purchase_prices, list_purchases);
transaction_queries!(rentals, count_rentals, rental_prices, list_rentals);

fn row_to_record(row: TransactionJoinRow) -> TransactionRecord {
    let book = match (row.book_id, row.book_title, row.book_author) {
        (Some(id), Some(title), Some(author)) => Some(BookSummary { id, title, author }),
        _ => None,
    };
    let user = match (row.user_id, row.user_name, row.user_email) {
        (Some(id), Some(name), Some(email)) => Some(UserSummary { id, name, email }),
        _ => None,
    };
    TransactionRecord {
        id: row.id,
        book,
        user,
        price: row.price,
        created_at: row.created_at,
    }
}

#[async_trait]
impl ReportingRepository for DieselReportingRepository {
    async fn count_users(&self) -> Result<u64, ReportingRepositoryError> {
        let mut conn = self.conn().await?;
        let raw: i64 = users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| reporting_diesel_error(err, "count users"))?;
        to_count(raw, "count users")
    }

    async fn count_books(&self) -> Result<u64, ReportingRepositoryError> {
        let mut conn = self.conn().await?;
        let raw: i64 = books::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| reporting_diesel_error(err, "count books"))?;
        to_count(raw, "count books")
    }

    async fn count_transactions(
        &self,
        kind: ServiceType,
    ) -> Result<u64, ReportingRepositoryError> {
        let mut conn = self.conn().await?;
        match kind {
            ServiceType::Purchase => count_purchases(&mut conn).await,
            ServiceType::Rental => count_rentals(&mut conn).await,
        }
    }

    async fn prices(&self, kind: ServiceType) -> Result<Vec<String>, ReportingRepositoryError> {
        let mut conn = self.conn().await?;
        match kind {
            ServiceType::Purchase => purchase_prices(&mut conn).await,
            ServiceType::Rental => rental_prices(&mut conn).await,
        }
    }

    async fn list_transactions(
        &self,
        kind: ServiceType,
    ) -> Result<Vec<TransactionRecord>, ReportingRepositoryError> {
        let mut conn = self.conn().await?;
        match kind {
            ServiceType::Purchase => list_purchases(&mut conn).await,
            ServiceType::Rental => list_rentals(&mut conn).await,
        }
    }
}
