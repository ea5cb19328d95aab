use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Application-level constants
pub const APP_NAME: &str = "MediCitas";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the booking API listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 8001;

/// Base URL the reporter fetches from unless told otherwise.
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

pub const HOST_ENV: &str = "MEDICITAS_HOST";
pub const PORT_ENV: &str = "MEDICITAS_PORT";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,medicitas_lib=debug,tower_http=info"
}

/// Where the booking API binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Read `MEDICITAS_HOST` / `MEDICITAS_PORT`. Unparseable values fall
    /// back to the defaults with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup(HOST_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid {HOST_ENV}, using {}", defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid {PORT_ENV}, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}
