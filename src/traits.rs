use crate::error::TransportResult;
use crate::logging::LogEntry;
use crate::types::RawResponse;
use std::future::Future;

/// Trait for transport implementations.
///
/// A transport performs the actual network request and reports its outcome as
/// either a 2xx `RawResponse` or one of the closed `TransportError`
/// categories. Deadlines, connection pooling and any resilience policy
/// (retries, circuit breaking) live behind this seam.
pub trait Transport: Send + Sync {
    /// Perform a GET request against the given URL
    fn get(&self, url: &str) -> impl Future<Output = TransportResult<RawResponse>> + Send;
}

/// Trait for the logging capability consumed by the diagnostics layer.
///
/// Injected rather than ambient so the classifier is testable without a live
/// logging backend. Logging is best-effort and infallible.
pub trait DiagnosticsLogger: Send + Sync {
    /// Record one structured entry
    fn log(&self, entry: &LogEntry);
}
