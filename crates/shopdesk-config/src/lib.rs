//! Shared configuration for shopdesk tools.
//!
//! TOML profiles merged under `SHOPDESK_*` environment overrides, and
//! translation into the transport settings `shopdesk-api` consumes.
//! The CLI adds flag-aware wrappers on top; this crate never prompts.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use shopdesk_api::TransportConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{profile}' not found")]
    ProfileNotFound { profile: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named.
    pub default_profile: Option<String>,

    /// Global defaults, overridable per profile.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named back-office profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Accept self-signed TLS certificates.
    #[serde(default)]
    pub insecure: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            insecure: false,
        }
    }
}

fn default_timeout() -> u64 {
    10
}

/// A named back-office profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// API root (e.g. `https://shop.example.com/api`).
    pub api: String,

    /// Account to sign in as (the password is always prompted).
    pub account: Option<String>,

    /// Override the default timeout (seconds).
    pub timeout: Option<u64>,

    /// Override the insecure TLS setting.
    pub insecure: Option<bool>,
}

// ── Resolution ──────────────────────────────────────────────────────

/// A profile resolved against the defaults, ready for `AdminClient::new`.
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub base_url: Url,
    pub account: Option<String>,
    pub transport: TransportConfig,
}

impl Config {
    /// The profile name to use: explicit choice, `default_profile`, or
    /// `"default"`.
    pub fn active_profile_name(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into())
    }

    /// Resolve a named profile against the defaults.
    pub fn resolve(&self, name: &str) -> Result<ResolvedProfile, ConfigError> {
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                profile: name.to_owned(),
            })?;

        let base_url: Url = profile
            .api
            .parse()
            .map_err(|e| ConfigError::Validation {
                field: "api".into(),
                reason: format!("{e}: {}", profile.api),
            })?;

        let timeout = profile.timeout.unwrap_or(self.defaults.timeout);
        if timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be positive".into(),
            });
        }

        Ok(ResolvedProfile {
            base_url,
            account: profile.account.clone(),
            transport: TransportConfig {
                timeout: Duration::from_secs(timeout),
                accept_invalid_certs: profile.insecure.unwrap_or(self.defaults.insecure),
            },
        })
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Platform config file location (`…/shopdesk/config.toml`).
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "shopdesk", "shopdesk")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("shopdesk.toml"))
}

/// Load the config from the default location, merged under
/// `SHOPDESK_*` environment overrides. A missing file yields defaults.
pub fn load() -> Result<Config, ConfigError> {
    load_from(&config_path())
}

/// Load the config from an explicit path (tests, `--config`).
pub fn load_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHOPDESK_").split("__"))
        .extract()?;
    Ok(config)
}
