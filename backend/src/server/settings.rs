//! Startup settings loaded through OrthoConfig.
//!
//! Every key can come from the command line (`--database-url`), the
//! environment (`ADMIN_DATABASE_URL`), or a configuration file.

use std::ffi::OsString;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

use book_admin::outbound::token::MIN_SECRET_LEN;

use super::config::ServerConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Raw settings as loaded; see [`AdminSettings::into_config`] for checks.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADMIN")]
pub struct AdminSettings {
    /// HS256 signing secret for session tokens.
    pub secret: Option<String>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Listen address, `host:port`.
    pub bind_addr: Option<String>,
    /// Mark the `admin` cookie `Secure`. Defaults to `true`.
    pub cookie_secure: Option<bool>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving. Defaults to `true`.
    pub run_migrations: Option<bool>,
}

/// Invalid or missing settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration could not be loaded: {message}")]
    Load { message: String },
    #[error("ADMIN_SECRET is required")]
    MissingSecret,
    #[error("ADMIN_SECRET must be at least {min} bytes")]
    SecretTooShort { min: usize },
    #[error("ADMIN_DATABASE_URL is required")]
    MissingDatabaseUrl,
    #[error("ADMIN_BIND_ADDR {value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl AdminSettings {
    /// Load from the given arguments, the environment, and config files.
    pub fn load_from<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|err| ConfigError::Load {
            message: err.to_string(),
        })
    }

    /// Validate and resolve defaults.
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let secret = Zeroizing::new(
            self.secret
                .filter(|secret| !secret.is_empty())
                .ok_or(ConfigError::MissingSecret)?
                .into_bytes(),
        );
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort {
                min: MIN_SECRET_LEN,
            });
        }
        let database_url = self
            .database_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        let raw_addr = self
            .bind_addr
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr: SocketAddr =
            raw_addr
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    value: raw_addr.clone(),
                    source,
                })?;

        Ok(ServerConfig {
            secret,
            database_url,
            bind_addr,
            cookie_secure: self.cookie_secure.unwrap_or(true),
            pool_max_size: self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE),
            run_migrations: self.run_migrations.unwrap_or(true),
        })
    }
}
