//! Validated server configuration.

use std::net::SocketAddr;

use zeroize::Zeroizing;

/// Settings after validation and default resolution.
pub struct ServerConfig {
    pub(crate) secret: Zeroizing<Vec<u8>>,
    pub(crate) database_url: String,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cookie_secure: bool,
    pub(crate) pool_max_size: u32,
    pub(crate) run_migrations: bool,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("secret", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("cookie_secure", &self.cookie_secure)
            .field("pool_max_size", &self.pool_max_size)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
