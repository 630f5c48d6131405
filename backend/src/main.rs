//! Backend entry-point: loads settings, wires adapters, and serves the admin
//! panel.

mod server;

use color_eyre::eyre::WrapErr;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{AdminSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AdminSettings::load_from(std::env::args_os())
        .and_then(AdminSettings::into_config)
        .wrap_err("invalid admin settings")?;
    let server = create_server(config)
        .await
        .wrap_err("failed to start admin server")?;
    server.await.wrap_err("admin server terminated")?;
    Ok(())
}
