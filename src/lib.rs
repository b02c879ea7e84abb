//! HTTP Diagnostics - Failure classification and timing for outbound HTTP calls
//!
//! This crate wraps one outbound HTTP call in a diagnostics layer: it invokes
//! the endpoint through a `Transport`, classifies any failure into a fixed
//! taxonomy, measures elapsed time, and returns a uniform `CallResult`
//! instead of letting heterogeneous errors escape to the caller.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Capability seams
pub mod logging;
pub mod traits;

// Main functionality modules
pub mod diagnostics;
pub mod transport;

// Test support
pub mod testing;

// Re-export main types for convenience
pub use config::{ConfigError, DiagnosticsConfig, DiagnosticsConfigBuilder};
pub use diagnostics::CallDiagnostics;
pub use error::{TransportError, TransportResult};
pub use logging::{LogEntry, LogLevel, TracingLogger};
pub use traits::{DiagnosticsLogger, Transport};
pub use transport::HttpTransport;
pub use types::{CallResult, RawResponse};

/// Execute one diagnosed GET call with a default transport and tracing logger
pub async fn call_with_diagnostics<B>(url: &str, tag: Option<&str>) -> CallResult<B>
where
    B: serde::de::DeserializeOwned,
{
    let transport = match HttpTransport::new(&DiagnosticsConfig::default()) {
        Ok(transport) => transport,
        Err(err) => {
            let failure = TransportError::unexpected(err.to_string());
            let (status, message) = diagnostics::classify(&failure);
            return CallResult::failure(status, message, 0, tag);
        }
    };

    CallDiagnostics::new(transport, TracingLogger::new())
        .execute(url, tag)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that error types work correctly
    #[test]
    fn test_error_types() {
        let error = TransportError::transport("socket closed");
        assert!(error.to_string().contains("transport failure"));

        let error = TransportError::CircuitOpen;
        assert!(error.to_string().contains("circuit breaker"));
    }

    /// Test that configuration defaults and validation work
    #[test]
    fn test_config_defaults() {
        let config = DiagnosticsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout_seconds(), 30);
    }

    /// Test type construction and invariants
    #[test]
    fn test_types() {
        let result = CallResult::success(200, "body", 5, Some("inventory-svc"));
        assert!(result.is_success());
        assert!(result.body.is_some() != result.error_message.is_some());

        let result: CallResult<String> = CallResult::failure(503, "Connection refused", 5, None);
        assert!(result.is_failure());
        assert!(result.body.is_some() != result.error_message.is_some());
    }

    /// Test that the real transport can be constructed from defaults
    #[test]
    fn test_transport_construction() {
        let transport = HttpTransport::new(&DiagnosticsConfig::default());
        assert!(transport.is_ok());
    }
}
