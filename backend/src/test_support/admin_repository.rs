use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    AdminRepository, AdminRepositoryError, NewAdminRecord, StoredCredentials,
};
use crate::domain::{Admin, EmailAddress};

/// Admin store backed by a vector; enforces unique emails.
#[derive(Debug, Default)]
pub struct InMemoryAdminRepository {
    admins: Mutex<Vec<NewAdminRecord>>,
    failure: Mutex<Option<AdminRepositoryError>>,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored admins.
    pub fn len(&self) -> usize {
        lock(&self.admins).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored password hash for `email`, if any.
    pub fn password_hash(&self, email: &str) -> Option<String> {
        lock(&self.admins)
            .iter()
            .find(|record| record.email.as_ref() == email)
            .map(|record| record.password_hash.clone())
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: AdminRepositoryError) {
        *lock(&self.failure) = Some(error);
    }

    fn check_failure(&self) -> Result<(), AdminRepositoryError> {
        match lock(&self.failure).clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn insert(&self, record: &NewAdminRecord) -> Result<Admin, AdminRepositoryError> {
        self.check_failure()?;
        let mut admins = lock(&self.admins);
        if admins.iter().any(|existing| existing.email == record.email) {
            return Err(AdminRepositoryError::duplicate_email());
        }
        admins.push(record.clone());
        Ok(Admin {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            created_date: record.created_date,
        })
    }

    async fn find_credentials(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, AdminRepositoryError> {
        self.check_failure()?;
        Ok(lock(&self.admins)
            .iter()
            .find(|record| &record.email == email)
            .map(|record| StoredCredentials {
                id: record.id,
                password_hash: record.password_hash.clone(),
            }))
    }
}
