//! Engine configuration.
//!
//! Resolved once at startup from environment variables and handed to the
//! composition root. Empty values count as unset.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use osrelay_domain::{PlayerName, ValidationError};

use crate::infrastructure::catfact::DEFAULT_CATFACT_BASE_URL;
use crate::infrastructure::hiscores::DEFAULT_HISCORES_BASE_URL;
use crate::infrastructure::templeosrs::DEFAULT_TEMPLE_BASE_URL;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },

    #[error("DEFAULT_PLAYER is not a valid player name: {0}")]
    InvalidDefaultPlayer(ValidationError),

    #[error("Invalid listen address {0:?}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub hiscores_base_url: String,
    pub temple_base_url: String,
    pub catfact_base_url: String,
    pub upstream_timeout: Duration,
    /// Player looked up when `/hiscores` is called without one.
    pub default_player: Option<PlayerName>,
    /// `*` or a comma-separated origin list. `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            hiscores_base_url: DEFAULT_HISCORES_BASE_URL.to_string(),
            temple_base_url: DEFAULT_TEMPLE_BASE_URL.to_string(),
            catfact_base_url: DEFAULT_CATFACT_BASE_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            default_player: None,
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = match get("SERVER_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidNumber {
                var: "SERVER_PORT",
                value: raw.clone(),
            })?,
            None => defaults.port,
        };

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidNumber {
                    var: "UPSTREAM_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Zero {
                        var: "UPSTREAM_TIMEOUT_SECS",
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.upstream_timeout,
        };

        let default_player = get("DEFAULT_PLAYER")
            .map(PlayerName::new)
            .transpose()
            .map_err(ConfigError::InvalidDefaultPlayer)?;

        Ok(Self {
            host: get("SERVER_HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            hiscores_base_url: get("HISCORES_BASE_URL").unwrap_or(defaults.hiscores_base_url),
            temple_base_url: get("TEMPLE_BASE_URL").unwrap_or(defaults.temple_base_url),
            catfact_base_url: get("CATFACT_BASE_URL").unwrap_or(defaults.catfact_base_url),
            upstream_timeout,
            default_player,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}
