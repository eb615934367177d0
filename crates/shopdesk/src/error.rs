//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and config failures into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use shopdesk_config::ConfigError;
use shopdesk_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("No API root configured")]
    #[diagnostic(
        code(shopdesk::no_config),
        help(
            "Pass --api <url>, or create a profile in the config file.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(shopdesk::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(shopdesk::validation))]
    Validation { field: String, reason: String },

    #[error("config loading failed")]
    #[diagnostic(code(shopdesk::config))]
    Config(#[source] Box<ConfigError>),

    // ── Session ──────────────────────────────────────────────────────
    #[error("Not signed in")]
    #[diagnostic(
        code(shopdesk::auth),
        help("Run: shopdesk login --account <account>")
    )]
    AuthRequired,

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(shopdesk::api_error))]
    ApiError {
        message: String,
        code: Option<String>,
        status: Option<u16>,
    },

    #[error("request timed out, please retry")]
    #[diagnostic(
        code(shopdesk::timeout),
        help("Increase the timeout with --timeout or check the API host.")
    )]
    Timeout,

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON document: {0}")]
    #[diagnostic(
        code(shopdesk::json),
        help("Payloads are JSON objects, e.g. '{{\"name\": \"acme\"}}'.")
    )]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to a process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthRequired => exit_code::AUTH,
            Self::ApiError { status, .. } => match status {
                Some(401 | 403) => exit_code::AUTH,
                Some(404) => exit_code::NOT_FOUND,
                Some(_) => exit_code::GENERAL,
                None => exit_code::CONNECTION,
            },
            Self::Validation { .. } | Self::Json(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Timeout => CliError::Timeout,

            CoreError::Api {
                message,
                code,
                status,
            } => CliError::ApiError {
                message,
                code,
                status,
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::ApiError {
                message,
                code: Some("internal".into()),
                status: None,
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { profile } => CliError::ProfileNotFound {
                name: profile,
                available: String::new(),
            },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(Box::new(other)),
        }
    }
}
