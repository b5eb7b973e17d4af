use thiserror::Error;

/// Errors returned by [`crate::MatchingClient`].
#[derive(Debug, Error)]
pub enum MatchingError {
    /// The request could not complete: DNS, connect, TLS or body read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// A 2xx body that is not a JSON list.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid matching endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl MatchingError {
    /// `true` when the service was reached and answered with a failure status,
    /// as opposed to the call itself failing.
    #[must_use]
    pub fn is_status_failure(&self) -> bool {
        matches!(self, MatchingError::UnexpectedStatus { .. })
    }
}
