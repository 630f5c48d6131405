//! PostgreSQL-backed `AdminRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    AdminRepository, AdminRepositoryError, NewAdminRecord, StoredCredentials,
};
use crate::domain::{Admin, AdminId, AdminName, EmailAddress};

use super::error_mapping::{admin_diesel_error, admin_pool_error};
use super::models::{AdminRow, CredentialRow, NewAdminRow};
use super::pool::DbPool;
use super::schema::admins;

/// Diesel implementation of [`AdminRepository`].
#[derive(Clone)]
pub struct DieselAdminRepository {
    pool: DbPool,
}

impl DieselAdminRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_admin(row: AdminRow) -> Result<Admin, AdminRepositoryError> {
    let name = AdminName::new(&row.name).map_err(|code| {
        AdminRepositoryError::query(format!("stored admin {} has invalid name: {code}", row.id))
    })?;
    let email = EmailAddress::new(&row.email).map_err(|code| {
        AdminRepositoryError::query(format!("stored admin {} has invalid email: {code}", row.id))
    })?;
    Ok(Admin {
        id: AdminId::from_uuid(row.id),
        name,
        email,
        created_date: row.created_date,
    })
}

#[async_trait]
impl AdminRepository for DieselAdminRepository {
    async fn insert(&self, record: &NewAdminRecord) -> Result<Admin, AdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(admin_pool_error)?;
        let row = NewAdminRow {
            id: *record.id.as_uuid(),
            name: record.name.as_ref(),
            email: record.email.as_ref(),
            password_hash: record.password_hash.as_str(),
            created_date: record.created_date,
        };
        let inserted: AdminRow = diesel::insert_into(admins::table)
            .values(&row)
            .returning(AdminRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| admin_diesel_error(err, "insert admin"))?;
        row_to_admin(inserted)
    }

    async fn find_credentials(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, AdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(admin_pool_error)?;
        let row: Option<CredentialRow> = admins::table
            .filter(admins::email.eq(email.as_ref()))
            .select((admins::id, admins::password_hash))
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| admin_diesel_error(err, "find admin by email"))?;
        Ok(row.map(|row| StoredCredentials {
            id: AdminId::from_uuid(row.id),
            password_hash: row.password_hash,
        }))
    }
}
