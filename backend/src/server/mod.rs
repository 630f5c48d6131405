//! Server construction and adapter wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::{AdminSettings, ConfigError};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use book_admin::Trace;
#[cfg(debug_assertions)]
use book_admin::doc::ApiDoc;
use book_admin::domain::ports::SessionTokenError;
use book_admin::domain::{AdminAccountService, ReportingService};
use book_admin::inbound::http::admin;
use book_admin::inbound::http::cookies::CookieSettings;
use book_admin::inbound::http::state::HttpState;
use book_admin::outbound::crypto::Argon2CredentialHasher;
use book_admin::outbound::persistence::{
    DbPool, DieselAdminRepository, DieselReportingRepository, MigrationError, PoolConfig,
    PoolError, run_pending_migrations,
};
use book_admin::outbound::token::JwtSessionTokens;

/// Failures while assembling the server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("session token issuer rejected its secret: {0}")]
    Tokens(#[from] SessionTokenError),
    #[error("failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(admin::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

async fn build_http_state(config: &ServerConfig) -> Result<HttpState, StartupError> {
    if config.run_migrations {
        run_pending_migrations(&config.database_url).await?;
    }

    let pool = DbPool::new(
        PoolConfig::new(config.database_url.clone()).with_max_size(config.pool_max_size),
    )
    .await?;
    let clock = Arc::new(DefaultClock);
    let tokens = JwtSessionTokens::new(&config.secret, clock.clone())?;

    let auth = AdminAccountService::new(
        Arc::new(DieselAdminRepository::new(pool.clone())),
        Arc::new(Argon2CredentialHasher::new()),
    );
    let dashboard = ReportingService::new(Arc::new(DieselReportingRepository::new(pool)));

    Ok(HttpState::new(
        Arc::new(auth),
        Arc::new(dashboard),
        Arc::new(tokens),
        clock,
    )
    .with_cookie_settings(CookieSettings {
        secure: config.cookie_secure,
    }))
}

/// Migrate, connect, and bind an Actix server for `config`.
///
/// # Errors
/// Returns [`StartupError`] when migrations, pool construction, token
/// issuer setup, or socket binding fail.
pub async fn create_server(config: ServerConfig) -> Result<Server, StartupError> {
    let http_state = web::Data::new(build_http_state(&config).await?);
    let bind_addr = config.bind_addr();
    drop(config);

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "admin server listening");
    Ok(server)
}
