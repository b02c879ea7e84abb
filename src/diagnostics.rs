use crate::error::{TransportError, TransportResult};
use crate::logging::LogEntry;
use crate::traits::{DiagnosticsLogger, Transport};
use crate::types::{CallResult, RawResponse};
use serde::de::DeserializeOwned;
use std::time::Instant;

/// Diagnostics decorator around one outbound call.
///
/// Executes exactly one request through the transport, classifies any failure
/// into the fixed taxonomy, measures elapsed time and always yields a
/// `CallResult` — no failure escapes to the caller. Holds only immutable
/// references to its collaborators, so concurrent calls need no locking.
#[derive(Clone)]
pub struct CallDiagnostics<T, L> {
    transport: T,
    logger: L,
}

impl<T, L> CallDiagnostics<T, L>
where
    T: Transport,
    L: DiagnosticsLogger,
{
    /// Create a new diagnostics decorator around a transport and a logger
    pub fn new(transport: T, logger: L) -> Self {
        Self { transport, logger }
    }

    /// Execute one call and decode the response body as `B`.
    ///
    /// `tag` is an opaque caller-supplied label identifying the logical
    /// target service; it is propagated unchanged into the result and the
    /// log entry.
    pub async fn execute<B>(&self, url: &str, tag: Option<&str>) -> CallResult<B>
    where
        B: DeserializeOwned,
    {
        self.run(url, tag, |raw| {
            serde_json::from_str(&raw.body).map_err(|e| TransportError::decode(e.to_string()))
        })
        .await
    }

    /// Execute one call and return the raw response body without decoding
    pub async fn execute_text(&self, url: &str, tag: Option<&str>) -> CallResult<String> {
        self.run(url, tag, |raw| Ok(raw.body)).await
    }

    async fn run<B, F>(&self, url: &str, tag: Option<&str>, decode: F) -> CallResult<B>
    where
        F: FnOnce(RawResponse) -> TransportResult<B>,
    {
        let started = Instant::now();
        let outcome = self.transport.get(url).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let failure = match outcome {
            Ok(raw) => {
                let status = raw.status;
                match decode(raw) {
                    Ok(body) => {
                        self.logger.log(&LogEntry::info(
                            tag,
                            url,
                            status,
                            elapsed_ms,
                            "outbound call succeeded",
                        ));
                        return CallResult::success(status, body, elapsed_ms, tag);
                    }
                    Err(failure) => failure,
                }
            }
            Err(failure) => failure,
        };

        let (status, message) = classify(&failure);
        let response_body = match &failure {
            TransportError::UpstreamStatus { body, .. } => Some(body.clone()),
            _ => None,
        };
        self.logger.log(&LogEntry::error(
            tag,
            url,
            status,
            elapsed_ms,
            message.clone(),
            response_body,
        ));
        CallResult::failure(status, message, elapsed_ms, tag)
    }
}

/// Canonical status/message pairing for every failure category.
///
/// Kept in one place so the pairing cannot drift between call sites. The
/// underlying technical detail stays in the log entry, not in the message,
/// except for the categories that have no more specific classification.
pub(crate) fn classify(failure: &TransportError) -> (u16, String) {
    match failure {
        TransportError::Timeout => (504, "Timeout error".to_string()),
        TransportError::ConnectionRefused => (503, "Connection refused".to_string()),
        TransportError::DnsFailure => (503, "DNS resolution failed".to_string()),
        TransportError::CircuitOpen => (503, "Circuit breaker open".to_string()),
        TransportError::UpstreamStatus {
            status,
            status_text,
            ..
        } => (*status, format!("Server error: {}", status_text)),
        TransportError::Decode { .. } => (500, "Serialization error".to_string()),
        TransportError::Transport { .. } => (500, "Resource access error".to_string()),
        TransportError::Unexpected { message } => (500, format!("Unexpected error: {}", message)),
    }
}
