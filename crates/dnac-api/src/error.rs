use thiserror::Error;

/// Top-level error type for the `dnac-api` crate.
///
/// Covers every failure mode across the crate: version dispatch,
/// authentication, transport, HTTP status, and response decoding.
/// Callers branch on the variant -- no failure is ever reduced to an
/// empty result.
#[derive(Debug, Error)]
pub enum Error {
    // ── Version dispatch ────────────────────────────────────────────
    /// The controller version has no known inventory resource path,
    /// or the version string failed to parse.
    #[error("Unsupported DNA Center version: {version}")]
    UnsupportedVersion { version: String },

    // ── Authentication ──────────────────────────────────────────────
    /// Token exchange failed (bad credentials, unusable token).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL construction error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-200 response from the controller.
    #[error("{context} failed with HTTP {status}")]
    RequestFailed { status: u16, context: String },

    /// 200 response whose body is not a well-formed intent envelope.
    #[error("Malformed controller response: {message}")]
    MalformedResponse { message: String, body: String },

    // ── Usage ───────────────────────────────────────────────────────
    /// A required argument was empty.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    /// Nothing is retried here -- retry policy belongs to the caller.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::RequestFailed { status, .. } => matches!(status, 502 | 503 | 504),
            _ => false,
        }
    }

    /// Returns `true` if the controller reported "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RequestFailed { status: 404, .. })
    }

    /// Returns `true` if re-authenticating might resolve this error.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::RequestFailed { status: 401, .. }
        )
    }
}
