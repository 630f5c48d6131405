//! Helpers shared by the embedded-PostgreSQL adapter suites.

pub mod pg_embed;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use tokio::runtime::Runtime;
use uuid::Uuid;

use book_admin::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

/// Skip instead of failing when `SKIP_TEST_CLUSTER` is truthy.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    let skip = std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    if skip {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Render a `postgres` error with its SQLSTATE and detail.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Drop and recreate `name` so each suite starts from an empty schema.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE); CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))
}

/// A freshly migrated database with a pool and a runtime to drive it.
pub struct MigratedDatabase {
    pub runtime: Runtime,
    pub url: String,
    pub pool: DbPool,
    pub cluster: TestCluster,
}

///
/// `prefix` is suffixed with a random id so parallel tests never share a
/// database.
pub fn migrated_database(prefix: &str) -> Result<MigratedDatabase, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = pg_embed::test_cluster()?;
    let name = format!("{prefix}_{}", Uuid::new_v4().simple());
    reset_database(&cluster, &name)?;
    let url = cluster.connection().database_url(&name);
    runtime
        .block_on(run_pending_migrations(&url))
        .map_err(|err| err.to_string())?;
    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(&url).with_max_size(4)))
        .map_err(|err| err.to_string())?;
    Ok(MigratedDatabase {
        runtime,
        url,
        pool,
        cluster,
    })
}

pub fn connect(url: &str) -> Result<Client, String> {
    Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))
}
