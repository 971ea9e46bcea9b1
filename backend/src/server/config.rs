//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::cookie::Key;

use crate::inbound::http::session_config::session_key;
use crate::settings::Settings;

use super::state_builders::RepositoryPorts;

/// Everything needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repositories: RepositoryPorts,
}

impl ServerConfig {
    /// Construct a configuration from its parts.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        bind_addr: SocketAddr,
        repositories: RepositoryPorts,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
            repositories,
        }
    }

    /// Derive the cookie key, security flag and bind address from settings.
    #[must_use]
    pub fn from_settings(settings: &Settings, repositories: RepositoryPorts) -> Self {
        Self::new(
            session_key(&settings.secret),
            settings.cookie_secure,
            settings.bind_addr(),
            repositories,
        )
    }

    /// Listen address.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
