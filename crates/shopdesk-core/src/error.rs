// ── Core error types ──
//
// User-facing errors from shopdesk-core. Network errors keep the
// normalized `{message, code?}` shape produced by shopdesk-api — the
// view layer shows `message()` directly and nothing in between rewrites
// it.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request was aborted before a response arrived.
    #[error("request timed out, please retry")]
    Timeout,

    /// Error reported by (or normalized from) the back office.
    #[error("{message}")]
    Api {
        message: String,
        code: Option<String>,
        status: Option<u16>,
    },

    /// Configuration error (bad base URL, missing profile data).
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Internal error (serialization, cache merge).
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The user-facing message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The server-reported error code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of the failing response, when one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shopdesk_api::Error> for CoreError {
    fn from(err: shopdesk_api::Error) -> Self {
        match err {
            shopdesk_api::Error::Timeout => CoreError::Timeout,
            shopdesk_api::Error::Api {
                message,
                code,
                status,
            } => CoreError::Api {
                message,
                code,
                status: Some(status),
            },
            // `unknown error[<status>]` is already the user-facing text.
            unknown @ shopdesk_api::Error::Unknown { .. } => {
                let status = unknown.status();
                CoreError::Api {
                    message: unknown.message(),
                    code: None,
                    status,
                }
            }
            shopdesk_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid URL: {e}"),
            },
            shopdesk_api::Error::Transport(e) => CoreError::Internal(e.to_string()),
            shopdesk_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn timeout_keeps_normalized_message() {
        let err = CoreError::from(shopdesk_api::Error::Timeout);
        assert_eq!(err.message(), "request timed out, please retry");
    }

    #[test]
    fn unknown_keeps_bracketed_status() {
        let err = CoreError::from(shopdesk_api::Error::Unknown { status: 503 });
        assert_eq!(err.message(), "unknown error[503]");
        assert_eq!(err.status(), Some(503));
    }
}
