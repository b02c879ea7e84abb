use thiserror::Error;

/// Result type alias for transport operations
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Closed set of failure categories a transport can report.
///
/// The diagnostics layer classifies outcomes by matching exhaustively on this
/// enum; only `UpstreamStatus` carries a status that actually came from the
/// remote service, every other variant is mapped to a synthesized one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("no response within the configured deadline")]
    Timeout,

    #[error("connection refused by target host")]
    ConnectionRefused,

    #[error("host name could not be resolved")]
    DnsFailure,

    #[error("call rejected by open circuit breaker")]
    CircuitOpen,

    #[error("upstream returned error status {status} {status_text}")]
    UpstreamStatus {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("response body could not be decoded: {message}")]
    Decode { message: String },

    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("unexpected failure: {message}")]
    Unexpected { message: String },
}

impl TransportError {
    /// Create a new upstream status error
    pub fn upstream_status<S: Into<String>>(status: u16, status_text: S, body: S) -> Self {
        Self::UpstreamStatus {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new unexpected error
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// True for failures reported by the upstream service itself, as opposed
    /// to failures that occurred before or outside any upstream response.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamStatus { .. })
    }
}
