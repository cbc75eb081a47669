//! HTTP server configuration loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use homework::domain::DueDatePolicy;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Settings read from CLI flags and `HOMEWORK_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOMEWORK")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Reject answers submitted after an assignment's due instant.
    #[ortho_config(default = false)]
    pub enforce_due_dates: bool,
}

impl ServerSettings {
    /// Socket address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Late-submission policy selected by `enforce_due_dates`.
    pub fn due_date_policy(&self) -> DueDatePolicy {
        if self.enforce_due_dates {
            DueDatePolicy::Enforce
        } else {
            DueDatePolicy::AcceptLate
        }
    }
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) due_dates: DueDatePolicy,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, due_dates: DueDatePolicy) -> Self {
        Self {
            bind_addr,
            due_dates,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self::new(settings.bind_addr(), settings.due_date_policy())
    }
}
