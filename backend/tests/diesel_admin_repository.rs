//! `DieselAdminRepository` against embedded PostgreSQL.
//!
//! Exercises the insert and credential lookup queries and the
//! `admins_email_key` constraint on the real schema.

use std::sync::Arc;

use book_admin::domain::ports::{
    AdminAuthService, AdminRepository, AdminRepositoryError, NewAdminRecord,
};
use book_admin::domain::{
    AdminAccountService, AdminAuthError, AdminId, AdminName, EmailAddress, LoginCredentials,
    NewAdmin,
};
use book_admin::outbound::crypto::Argon2CredentialHasher;
use book_admin::outbound::persistence::DieselAdminRepository;
use chrono::NaiveDate;
use rstest::{fixture, rstest};

mod support;

use support::{MigratedDatabase, connect, handle_cluster_setup_failure};

const TEST_DB: &str = "diesel_admin_repository_test";

struct TestContext {
    database: MigratedDatabase,
    repository: DieselAdminRepository,
}

fn setup_context() -> Result<TestContext, String> {
    let database = support::migrated_database(TEST_DB)?;
    let repository = DieselAdminRepository::new(database.pool.clone());
    Ok(TestContext {
        database,
        repository,
    })
}

#[fixture]
fn admin_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn created_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

fn record(email: &str) -> NewAdminRecord {
    NewAdminRecord {
        id: AdminId::random(),
        name: AdminName::new("Ada").expect("valid name"),
        email: EmailAddress::new(email).expect("valid email"),
        password_hash: "$argon2id$stub".to_owned(),
        created_date: created_on(),
    }
}

#[rstest]
fn inserted_admin_is_found_by_email(admin_context: Option<TestContext>) {
    let Some(context) = admin_context else {
        eprintln!("SKIP-TEST-CLUSTER: inserted_admin_is_found_by_email skipped");
        return;
    };
    let repo = &context.repository;
    let new_admin = record("ada@example.com");

    let (inserted, found) = context.database.runtime.block_on(async {
        let inserted = repo.insert(&new_admin).await.expect("insert admin");
        let found = repo
            .find_credentials(&new_admin.email)
            .await
            .expect("lookup");
        (inserted, found)
    });

    assert_eq!(inserted.id, new_admin.id);
    assert_eq!(inserted.email.as_ref(), "ada@example.com");
    assert_eq!(inserted.created_date, created_on());
    let found = found.expect("stored credentials");
    assert_eq!(found.id, new_admin.id);
    assert_eq!(found.password_hash, "$argon2id$stub");
}

#[rstest]
fn unknown_email_finds_nothing(admin_context: Option<TestContext>) {
    let Some(context) = admin_context else {
        eprintln!("SKIP-TEST-CLUSTER: unknown_email_finds_nothing skipped");
        return;
    };
    let email = EmailAddress::new("ghost@example.com").expect("valid email");

    let found = context
        .database
        .runtime
        .block_on(context.repository.find_credentials(&email))
        .expect("lookup");

    assert!(found.is_none());
}

#[rstest]
fn unique_constraint_reports_duplicate_email(admin_context: Option<TestContext>) {
    let Some(context) = admin_context else {
        eprintln!("SKIP-TEST-CLUSTER: unique_constraint_reports_duplicate_email skipped");
        return;
    };
    let repo = &context.repository;

    let second = context.database.runtime.block_on(async {
        repo.insert(&record("ada@example.com"))
            .await
            .expect("first insert");
        repo.insert(&record("ADA@example.com")).await
    });

    assert_eq!(second, Err(AdminRepositoryError::DuplicateEmail));
    let mut client = connect(&context.database.url).expect("connect");
    let row = client
        .query_one("SELECT COUNT(*) FROM admins", &[])
        .expect("count admins");
    assert_eq!(row.get::<_, i64>(0), 1);
}

#[rstest]
fn sign_up_then_log_in_with_argon2(admin_context: Option<TestContext>) {
    let Some(context) = admin_context else {
        eprintln!("SKIP-TEST-CLUSTER: sign_up_then_log_in_with_argon2 skipped");
        return;
    };
    let service = AdminAccountService::new(
        Arc::new(context.repository.clone()),
        Arc::new(Argon2CredentialHasher::new()),
    );
    let new_admin =
        NewAdmin::try_from_parts("Ada", "ada@example.com", "secret1").expect("valid admin");
    let good = LoginCredentials::try_from_parts("ada@example.com", "secret1").expect("creds");
    let bad = LoginCredentials::try_from_parts("ada@example.com", "secret2").expect("creds");

    let (admin, logged_in, rejected) = context.database.runtime.block_on(async {
        let admin = service
            .sign_up(new_admin, created_on())
            .await
            .expect("sign up");
        (admin, service.login(&good).await, service.login(&bad).await)
    });

    assert_eq!(logged_in, Ok(admin.id));
    assert_eq!(rejected, Err(AdminAuthError::IncorrectPassword));
}
