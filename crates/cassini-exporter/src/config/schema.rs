use std::net::SocketAddr;

use serde::Deserialize;
use tokio::time::Duration;

use cassini_core::error::{CassiniError, Result};

use crate::router::HEALTHZ_PATH;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub decay: DecaySection,

    #[serde(default)]
    pub errors: ErrorsSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
            decay: DecaySection::default(),
            errors: ErrorsSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CassiniError::UnsupportedVersion);
        }
        self.exporter.validate()?;
        self.decay.validate()?;
        self.errors.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            path: default_path(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.path.starts_with('/') {
            return Err(CassiniError::BadConfig("exporter.path must start with '/'".into()));
        }
        if self.path.contains([':', '*']) {
            return Err(CassiniError::BadConfig(
                "exporter.path must be a literal path (no ':' or '*' segments)".into(),
            ));
        }
        if self.path == HEALTHZ_PATH {
            return Err(CassiniError::BadConfig(format!(
                "exporter.path must not be {HEALTHZ_PATH} (reserved for liveness)"
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| CassiniError::BadConfig(format!("exporter.listen must be a valid SocketAddr: {e}")))
    }
}

fn default_listen() -> String {
    "0.0.0.0:39099".into()
}
fn default_path() -> String {
    "/metrics".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecaySection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for DecaySection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl DecaySection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=60000).contains(&self.interval_ms) {
            return Err(CassiniError::BadConfig(
                "decay.interval_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_interval_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsSection {
    #[serde(default = "default_sink_capacity")]
    pub sink_capacity: usize,
}

impl Default for ErrorsSection {
    fn default() -> Self {
        Self {
            sink_capacity: default_sink_capacity(),
        }
    }
}

impl ErrorsSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=65536).contains(&self.sink_capacity) {
            return Err(CassiniError::BadConfig(
                "errors.sink_capacity must be between 1 and 65536".into(),
            ));
        }
        Ok(())
    }
}

fn default_sink_capacity() -> usize {
    1024
}
