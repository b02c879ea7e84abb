use crate::error::{TransportError, TransportResult};
use crate::logging::LogEntry;
use crate::traits::{DiagnosticsLogger, Transport};
use crate::types::RawResponse;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock transport for testing.
///
/// Returns a scripted response (status 200, empty JSON object by default) or
/// a scripted failure, after an optional injected delay for timing tests.
#[derive(Clone)]
pub struct MockTransport {
    status: u16,
    body: String,
    failure: Option<TransportError>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            status: 200,
            body: "{}".to_string(),
            failure: None,
            delay: None,
        }
    }

    pub fn with_response(mut self, status: u16, body: &str) -> Self {
        self.status = status;
        self.body = body.to_string();
        self.failure = None;
        self
    }

    pub fn with_failure(mut self, failure: TransportError) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> TransportResult<RawResponse> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        Ok(RawResponse::new(
            self.status,
            self.body.clone(),
            url.to_string(),
        ))
    }
}

/// Logger that records every entry for later assertions
#[derive(Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl DiagnosticsLogger for RecordingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use super::*;
    use crate::diagnostics::CallDiagnostics;

    /// Build a diagnostics instance around a mock transport, returning the
    /// recording logger alongside it for log assertions
    pub fn diagnostics_with(
        transport: MockTransport,
    ) -> (CallDiagnostics<MockTransport, RecordingLogger>, RecordingLogger) {
        let logger = RecordingLogger::new();
        (CallDiagnostics::new(transport, logger.clone()), logger)
    }

    /// Every failure category a transport can report
    pub fn all_failure_categories() -> Vec<TransportError> {
        vec![
            TransportError::Timeout,
            TransportError::ConnectionRefused,
            TransportError::DnsFailure,
            TransportError::CircuitOpen,
            TransportError::upstream_status(404, "Not Found", "not found"),
            TransportError::decode("expected value at line 1 column 1"),
            TransportError::transport("connection reset by peer"),
            TransportError::unexpected("boom"),
        ]
    }
}
