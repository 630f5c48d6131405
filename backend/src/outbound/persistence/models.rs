//! Diesel row structs. Internal to the persistence layer.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::admins;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = admins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AdminRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = admins)]
pub(crate) struct NewAdminRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone, Queryable)]
pub(crate) struct CredentialRow {
    pub id: Uuid,
    pub password_hash: String,
}

/// A purchase or rental row left-joined with its book and user.
///
/// Joined columns are all `None` when the reference is null or dangling.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct TransactionJoinRow {
    pub id: Uuid,
    pub price: String,
    pub created_at: DateTime<Utc>,
    pub book_id: Option<Uuid>,
    pub book_title: Option<String>,
    pub book_author: Option<String>,
    pub user_id: Option<Uuid>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}
