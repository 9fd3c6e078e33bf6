use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use tally_core::error::{Result, TallyError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            log: LogSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Upper bound for one request/response exchange. Exceeding it yields 408.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Largest accepted header block (names + values). Exceeding it yields 431.
    #[serde(default = "default_max_header_bytes")]
    pub max_header_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            request_timeout_ms: default_request_timeout_ms(),
            max_header_bytes: default_max_header_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(100..=300_000).contains(&self.request_timeout_ms) {
            return Err(TallyError::BadRequest(
                "server.request_timeout_ms must be between 100 and 300000".into(),
            ));
        }
        if !(1024..=16 << 20).contains(&self.max_header_bytes) {
            return Err(TallyError::BadRequest(
                "server.max_header_bytes must be between 1024 and 16777216".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TallyError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_request_timeout_ms() -> u64 {
    10_000
}
fn default_max_header_bytes() -> usize {
    1 << 20
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl LogSection {
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(TallyError::BadRequest("log.filter must not be empty".into()));
        }
        Ok(())
    }
}

fn default_log_filter() -> String {
    "info".into()
}
