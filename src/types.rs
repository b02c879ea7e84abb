use serde::{Deserialize, Serialize};

/// Uniform outcome of one diagnosed call.
///
/// Exactly one of `body` and `error_message` is present: a result is never
/// simultaneously a success and a failure. `status` carries the real upstream
/// status whenever the upstream answered (success or error status alike) and
/// a synthesized status for failures that happened before or outside any
/// upstream response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResult<T> {
    pub status: Option<u16>,
    pub body: Option<T>,
    pub error_message: Option<String>,
    pub elapsed_ms: u64,
    pub tag: Option<String>,
}

impl<T> CallResult<T> {
    /// Build the success-path result
    pub fn success(status: u16, body: T, elapsed_ms: u64, tag: Option<&str>) -> Self {
        Self {
            status: Some(status),
            body: Some(body),
            error_message: None,
            elapsed_ms,
            tag: tag.map(str::to_string),
        }
    }

    /// Build the failure-path result
    pub fn failure<S: Into<String>>(
        status: u16,
        message: S,
        elapsed_ms: u64,
        tag: Option<&str>,
    ) -> Self {
        Self {
            status: Some(status),
            body: None,
            error_message: Some(message.into()),
            elapsed_ms,
            tag: tag.map(str::to_string),
        }
    }

    /// Check if the call succeeded (decoded body present)
    pub fn is_success(&self) -> bool {
        self.body.is_some()
    }

    /// Check if the call failed (classification message present)
    pub fn is_failure(&self) -> bool {
        self.error_message.is_some()
    }

    /// Status code, or the given fallback when the call never completed
    pub fn status_or(&self, fallback: u16) -> u16 {
        self.status.unwrap_or(fallback)
    }
}

/// Raw payload a transport hands back on success.
///
/// The status is always 2xx here; transports convert error statuses into
/// `TransportError::UpstreamStatus` before returning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    pub url: String,
}

impl RawResponse {
    /// Create a new raw response
    pub fn new(status: u16, body: String, url: String) -> Self {
        Self { status, body, url }
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
