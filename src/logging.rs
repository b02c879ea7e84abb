use crate::traits::DiagnosticsLogger;

/// Severity of a diagnostics log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// One structured log entry, emitted exactly once per diagnosed call.
///
/// `response_body` is only populated for upstream HTTP errors, where the raw
/// error body is logged but deliberately kept out of the result's
/// classification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub tag: Option<String>,
    pub url: String,
    pub status: Option<u16>,
    pub elapsed_ms: u64,
    pub message: String,
    pub response_body: Option<String>,
}

impl LogEntry {
    /// Create an info entry for the success path
    pub fn info<S: Into<String>>(
        tag: Option<&str>,
        url: &str,
        status: u16,
        elapsed_ms: u64,
        message: S,
    ) -> Self {
        Self {
            level: LogLevel::Info,
            tag: tag.map(str::to_string),
            url: url.to_string(),
            status: Some(status),
            elapsed_ms,
            message: message.into(),
            response_body: None,
        }
    }

    /// Create an error entry for a classified failure
    pub fn error<S: Into<String>>(
        tag: Option<&str>,
        url: &str,
        status: u16,
        elapsed_ms: u64,
        message: S,
        response_body: Option<String>,
    ) -> Self {
        Self {
            level: LogLevel::Error,
            tag: tag.map(str::to_string),
            url: url.to_string(),
            status: Some(status),
            elapsed_ms,
            message: message.into(),
            response_body,
        }
    }
}

/// Logger backed by the `tracing` ecosystem
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticsLogger for TracingLogger {
    fn log(&self, entry: &LogEntry) {
        let tag = entry.tag.as_deref().unwrap_or("-");
        match entry.level {
            LogLevel::Info => {
                tracing::info!(
                    tag,
                    url = %entry.url,
                    status = entry.status,
                    elapsed_ms = entry.elapsed_ms,
                    "{}",
                    entry.message
                );
            }
            LogLevel::Error => {
                tracing::error!(
                    tag,
                    url = %entry.url,
                    status = entry.status,
                    elapsed_ms = entry.elapsed_ms,
                    response_body = entry.response_body.as_deref(),
                    "{}",
                    entry.message
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_entry() {
        let entry = LogEntry::info(Some("inventory-svc"), "http://svc/items", 200, 42, "ok");

        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.tag.as_deref(), Some("inventory-svc"));
        assert_eq!(entry.url, "http://svc/items");
        assert_eq!(entry.status, Some(200));
        assert_eq!(entry.elapsed_ms, 42);
        assert!(entry.response_body.is_none());
    }

    #[test]
    fn test_error_entry_carries_raw_body() {
        let entry = LogEntry::error(
            None,
            "http://svc/items",
            404,
            7,
            "Server error: Not Found",
            Some("not found".to_string()),
        );

        assert_eq!(entry.level, LogLevel::Error);
        assert!(entry.tag.is_none());
        assert_eq!(entry.status, Some(404));
        assert_eq!(entry.response_body.as_deref(), Some("not found"));
    }
}
