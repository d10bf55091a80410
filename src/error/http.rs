use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Connection pool size must be >= 1.")]
    EmptyPool,
}

/// Per-request failure. Never fatal; the dispatcher counts it as a failed result.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {source}")]
    Send {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },
    #[error("Transport unavailable: {reason}")]
    Unavailable { reason: String },
}

impl TransportError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Send { source } | Self::Body { source } => source.is_timeout(),
            Self::Unavailable { .. } => false,
        }
    }
}
