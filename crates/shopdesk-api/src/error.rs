use thiserror::Error;

/// Top-level error type for the `shopdesk-api` crate.
///
/// Every network failure is normalized here before the caller sees it:
/// the view layer is expected to surface [`Error::message()`] directly,
/// so the messages below are the user-facing strings.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was aborted before a response arrived
    /// (connect failure or the fixed client timeout).
    #[error("request timed out, please retry")]
    Timeout,

    /// The server responded with a structured error body.
    /// `message` and `code` are propagated verbatim.
    #[error("{message}")]
    Api {
        message: String,
        code: Option<String>,
        status: u16,
    },

    /// Non-2xx response without a structured error body.
    /// `status` is `-1` when no HTTP status was available.
    #[error("unknown error[{status}]")]
    Unknown { status: i32 },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error that is neither an abort nor a server reply
    /// (e.g. a malformed request built by the caller).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The normalized, user-facing message. Identical to the `Display`
    /// output; named to mirror the `{message, code?}` error shape the
    /// back office reports.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The server-reported error code, if the server supplied one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of the failing response, when a response arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unknown { status } => u16::try_from(*status).ok(),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is the normalized request-abort error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if the server reported a "not found" condition.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::Error;

    #[test]
    fn timeout_message_is_user_facing() {
        assert_eq!(Error::Timeout.message(), "request timed out, please retry");
        assert!(Error::Timeout.code().is_none());
    }

    #[test]
    fn api_error_propagates_message_and_code() {
        let err = Error::Api {
            message: "brand name already used".into(),
            code: Some("brand-duplicate".into()),
            status: 400,
        };
        assert_eq!(err.message(), "brand name already used");
        assert_eq!(err.code(), Some("brand-duplicate"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn unknown_error_formats_status() {
        let err = Error::Unknown { status: 502 };
        assert_eq!(err.message(), "unknown error[502]");
        assert_eq!(err.status(), Some(502));

        let err = Error::Unknown { status: -1 };
        assert_eq!(err.message(), "unknown error[-1]");
        assert_eq!(err.status(), None);
    }
}
