//! Admin sign-up and login on top of the repository and hasher ports.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::domain::ports::{
    AdminAuthService, AdminRepository, AdminRepositoryError, CredentialHasher, NewAdminRecord,
};
use crate::domain::{Admin, AdminAuthError, AdminId, LoginCredentials, NewAdmin};

/// Account use-cases backed by an [`AdminRepository`] and a
/// [`CredentialHasher`].
///
/// Hashing and verification run on the blocking pool so argon2 work does not
/// stall the executor.
#[derive(Clone)]
pub struct AdminAccountService {
    repository: Arc<dyn AdminRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AdminAccountService {
    pub fn new(repository: Arc<dyn AdminRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { repository, hasher }
    }

    async fn hash_password(&self, password: &str) -> Result<String, AdminAuthError> {
        let hasher = Arc::clone(&self.hasher);
        let password = zeroize::Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|err| AdminAuthError::internal(format!("hash task failed: {err}")))?
            .map_err(|err| AdminAuthError::internal(err.to_string()))
    }

    async fn verify_password(
        &self,
        password: &str,
        stored_hash: String,
    ) -> Result<bool, AdminAuthError> {
        let hasher = Arc::clone(&self.hasher);
        let password = zeroize::Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(password.as_str(), &stored_hash))
            .await
            .map_err(|err| AdminAuthError::internal(format!("verify task failed: {err}")))
    }
}

fn map_repository_error(error: AdminRepositoryError) -> AdminAuthError {
    match error {
        AdminRepositoryError::DuplicateEmail => AdminAuthError::DuplicateEmail,
        other => AdminAuthError::internal(other.to_string()),
    }
}

#[async_trait]
impl AdminAuthService for AdminAccountService {
    async fn sign_up(
        &self,
        admin: NewAdmin,
        created_date: NaiveDate,
    ) -> Result<Admin, AdminAuthError> {
        let password_hash = self.hash_password(admin.password()).await?;
        let record = NewAdminRecord {
            id: AdminId::random(),
            name: admin.name().clone(),
            email: admin.email().clone(),
            password_hash,
            created_date,
        };
        let created = self
            .repository
            .insert(&record)
            .await
            .map_err(map_repository_error)?;
        debug!(admin_id = %created.id, "admin registered");
        Ok(created)
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<AdminId, AdminAuthError> {
        let stored = self
            .repository
            .find_credentials(credentials.email())
            .await
            .map_err(map_repository_error)?;
        let Some(stored) = stored else {
            debug!("login rejected: email not registered");
            return Err(AdminAuthError::IncorrectEmail);
        };
        if !self
            .verify_password(credentials.password(), stored.password_hash)
            .await?
        {
            debug!(admin_id = %stored.id, "login rejected: password mismatch");
            return Err(AdminAuthError::IncorrectPassword);
        }
        Ok(stored.id)
    }
}

#[cfg(test)]
mod tests {
    //! Service behaviour against mocked ports.
    use super::*;
    use crate::domain::ports::{
        CredentialHashError, MockAdminRepository, MockCredentialHasher, StoredCredentials,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn new_admin() -> NewAdmin {
        NewAdmin::try_from_parts("Ada", "Ada@Example.com", "secret1").expect("valid admin")
    }

    #[fixture]
    fn created_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    fn service(repo: MockAdminRepository, hasher: MockCredentialHasher) -> AdminAccountService {
        AdminAccountService::new(Arc::new(repo), Arc::new(hasher))
    }

    fn hashing_stub() -> MockCredentialHasher {
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .returning(|password| Ok(format!("hashed:{password}")));
        hasher
            .expect_verify()
            .returning(|password, stored| stored == format!("hashed:{password}"));
        hasher
    }

    #[rstest]
    #[tokio::test]
    async fn sign_up_persists_hashed_password(new_admin: NewAdmin, created_on: NaiveDate) {
        let mut repo = MockAdminRepository::new();
        repo.expect_insert()
            .withf(|record| {
                record.password_hash == "hashed:secret1"
                    && record.email.as_ref() == "ada@example.com"
            })
            .times(1)
            .returning(|record| {
                Ok(Admin {
                    id: record.id,
                    name: record.name.clone(),
                    email: record.email.clone(),
                    created_date: record.created_date,
                })
            });

        let admin = service(repo, hashing_stub())
            .sign_up(new_admin, created_on)
            .await
            .expect("sign-up succeeds");

        assert_eq!(admin.email.as_ref(), "ada@example.com");
        assert_eq!(admin.created_date, created_on);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_surfaces_as_duplicate(new_admin: NewAdmin, created_on: NaiveDate) {
        let mut repo = MockAdminRepository::new();
        repo.expect_insert()
            .returning(|_| Err(AdminRepositoryError::duplicate_email()));

        let err = service(repo, hashing_stub())
            .sign_up(new_admin, created_on)
            .await
            .expect_err("duplicate must fail");

        assert_eq!(err, AdminAuthError::DuplicateEmail);
    }

    #[rstest]
    #[tokio::test]
    async fn hash_failure_is_internal(new_admin: NewAdmin, created_on: NaiveDate) {
        let mut repo = MockAdminRepository::new();
        repo.expect_insert().never();
        let mut hasher = MockCredentialHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Err(CredentialHashError::hash("rng unavailable")));

        let err = service(repo, hasher)
            .sign_up(new_admin, created_on)
            .await
            .expect_err("hash failure must fail");

        assert!(matches!(err, AdminAuthError::Internal { .. }));
    }

    #[rstest]
    #[case("secret1", None)]
    #[case("wrong-pw", Some(AdminAuthError::IncorrectPassword))]
    #[tokio::test]
    async fn login_checks_password(
        #[case] password: &str,
        #[case] expected_error: Option<AdminAuthError>,
    ) {
        let id = AdminId::random();
        let mut repo = MockAdminRepository::new();
        repo.expect_find_credentials()
            .withf(|email| email.as_ref() == "ada@example.com")
            .returning(move |_| {
                Ok(Some(StoredCredentials {
                    id,
                    password_hash: "hashed:secret1".to_owned(),
                }))
            });
        let creds =
            LoginCredentials::try_from_parts("ADA@example.com", password).expect("credentials");

        let result = service(repo, hashing_stub()).login(&creds).await;

        match expected_error {
            None => assert_eq!(result, Ok(id)),
            Some(expected) => assert_eq!(result, Err(expected)),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn login_with_unknown_email_is_incorrect_email() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_credentials().returning(|_| Ok(None));
        let mut hasher = MockCredentialHasher::new();
        hasher.expect_verify().never();
        let creds = LoginCredentials::try_from_parts("ghost@example.com", "pw").expect("creds");

        let err = service(repo, hasher)
            .login(&creds)
            .await
            .expect_err("unknown email");

        assert_eq!(err, AdminAuthError::IncorrectEmail);
    }

    #[rstest]
    #[tokio::test]
    async fn store_failure_on_login_is_internal() {
        let mut repo = MockAdminRepository::new();
        repo.expect_find_credentials()
            .returning(|_| Err(AdminRepositoryError::connection("refused")));
        let creds = LoginCredentials::try_from_parts("ada@example.com", "pw").expect("creds");

        let err = service(repo, hashing_stub())
            .login(&creds)
            .await
            .expect_err("store failure");

        assert!(!err.is_client_error());
    }
}
