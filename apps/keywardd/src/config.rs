//! Daemon configuration loading and types.

use serde::Deserialize;

use crate::error::{DaemonError, DaemonResult};

/// Root daemon configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

impl DaemonConfig {
    /// Loads the configuration from `KEYWARD_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> DaemonResult<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("KEYWARD_HTTP_HOST") {
            if !host.trim().is_empty() {
                config.server.host = host;
            }
        }
        if let Ok(port) = std::env::var("KEYWARD_HTTP_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| DaemonError::Config(format!("invalid KEYWARD_HTTP_PORT: {port}")))?;
        }

        Ok(config)
    }

    /// The socket address to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
