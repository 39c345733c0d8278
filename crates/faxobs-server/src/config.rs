//! Server configuration loaded from TOML.
//!
//! Every key is optional. A missing file yields [`ServerConfig::default`], so
//! the binary starts with no configuration at all.
//!
//! ```toml
//! log_level = "debug"
//! max_stub_size = 65536
//!
//! [server]
//! version = "4.0"
//! queue_directory = "/var/spool/fax"
//! mapi_profiles = ["Outlook"]
//!
//! [configuration]
//! retries = 3
//! retry_delay = 10
//!
//! [[logging_categories]]
//! name = "Outbound"
//! category = 2
//! level = 1
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use msrpc_dispatch::StubCodec;
use msrpc_faxobs::{FaxConfiguration, FaxLogCategory, FaxTime, FaxVersion, MAX_RPC_BUFFER, access, install};
use serde::{Deserialize, Deserializer, de};
use thiserror::Error;
use tracing::debug;

/// Every access right the interface defines.
pub const ALL_ACCESS: u32 = access::JOB_SUBMIT
    | access::JOB_QUERY
    | access::CONFIG_QUERY
    | access::CONFIG_SET
    | access::PORT_QUERY
    | access::PORT_SET
    | access::JOB_MANAGE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Default `tracing` filter; `RUST_LOG` and `--log-level` take precedence.
    pub log_level: String,
    /// Limit applied to request and reply stubs.
    pub max_stub_size: usize,
    pub server: ServerSettings,
    /// Initial server-wide fax configuration. Omitted keys keep the values
    /// of [`default_configuration`].
    #[serde(deserialize_with = "deserialize_configuration")]
    pub configuration: FaxConfiguration,
    /// Initial event logging categories.
    pub logging_categories: Vec<FaxLogCategory>,
}

/// Fixed facts the server reports about itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    #[serde(deserialize_with = "deserialize_version")]
    pub version: FaxVersion,
    pub install_type: u32,
    pub installed_platforms: u32,
    pub product_type: u32,
    pub queue_directory: PathBuf,
    pub mapi_profiles: Vec<String>,
    /// Rights granted to every caller, as an `access::*` mask.
    pub granted_access: u32,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            version: FaxVersion::new(4, 0),
            install_type: install::SERVER,
            installed_platforms: install::PLATFORM_X86,
            product_type: install::PRODUCT_SERVER,
            queue_directory: PathBuf::from("FaxQueue"),
            mapi_profiles: Vec::new(),
            granted_access: ALL_ACCESS,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            max_stub_size: MAX_RPC_BUFFER,
            server: ServerSettings::default(),
            configuration: default_configuration(),
            logging_categories: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load and validate the config at `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::from_toml(&raw)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stub_size == 0 {
            return Err(ConfigError::Invalid(
                "max_stub_size must be greater than zero".to_string(),
            ));
        }
        if self.server.queue_directory.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "server.queue_directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Stub codec honoring the configured size limit.
    pub fn codec(&self) -> StubCodec {
        StubCodec::with_max_stub_size(self.max_stub_size)
    }
}

/// Fax configuration the server starts with when none is configured.
pub fn default_configuration() -> FaxConfiguration {
    FaxConfiguration {
        retries: 3,
        retry_delay: 10,
        dirty_days: 30,
        start_cheap_time: FaxTime { hour: 20, minute: 0 },
        stop_cheap_time: FaxTime { hour: 7, minute: 0 },
        ..Default::default()
    }
}

// Overlays the `[configuration]` table on the defaults key by key.
fn deserialize_configuration<'de, D>(deserializer: D) -> Result<FaxConfiguration, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = toml::Table::deserialize(deserializer)?;
    let mut merged = match toml::Value::try_from(default_configuration()) {
        Ok(toml::Value::Table(table)) => table,
        Ok(other) => {
            return Err(de::Error::custom(format!(
                "default configuration is a {}, not a table",
                other.type_str()
            )));
        }
        Err(err) => return Err(de::Error::custom(err)),
    };
    for (key, value) in overrides {
        merged.insert(key, value);
    }
    toml::Value::Table(merged).try_into().map_err(de::Error::custom)
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<FaxVersion, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(de::Error::custom)
}
