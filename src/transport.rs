use crate::config::{ConfigError, DiagnosticsConfig};
use crate::error::{TransportError, TransportResult};
use crate::traits::Transport;
use crate::types::RawResponse;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;

/// Transport implementation backed by `reqwest`.
///
/// Owns the only deadline for a call (the configured client timeout); the
/// diagnostics layer observes its outcome without imposing a second one.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport from configuration
    pub fn new(config: &DiagnosticsConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        if let Some(configured) = &config.headers {
            for (name, value) in configured {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|_| ConfigError::invalid(format!("invalid header name: {}", name)))?;
                let value = HeaderValue::from_str(value)
                    .map_err(|_| ConfigError::invalid(format!("invalid header value for {}", name)))?;
                headers.insert(name, value);
            }
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .redirect(if config.follow_redirects() {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .default_headers(headers);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder.build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> TransportResult<RawResponse> {
        // The taxonomy has no dedicated category for a malformed locator
        let target = url::Url::parse(url)
            .map_err(|e| TransportError::unexpected(format!("invalid URL '{}': {}", url, e)))?;

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        let final_url = response.url().to_string();
        let body = response.text().await.map_err(classify_reqwest_error)?;

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown Status");
            return Err(TransportError::upstream_status(
                status.as_u16(),
                status_text,
                body.as_str(),
            ));
        }

        Ok(RawResponse::new(status.as_u16(), body, final_url))
    }
}

/// Map a `reqwest` failure onto the closed transport taxonomy
fn classify_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout;
    }

    if err.is_connect() {
        if source_chain_has_kind(&err, std::io::ErrorKind::ConnectionRefused) {
            return TransportError::ConnectionRefused;
        }
        if source_chain_mentions_dns(&err) {
            return TransportError::DnsFailure;
        }
        return TransportError::transport(err.to_string());
    }

    if err.is_decode() {
        return TransportError::decode(err.to_string());
    }

    if err.is_request() || err.is_body() || err.is_redirect() {
        return TransportError::transport(err.to_string());
    }

    TransportError::unexpected(err.to_string())
}

/// Walk the source chain looking for an io error of the given kind
fn source_chain_has_kind(err: &(dyn StdError + 'static), kind: std::io::ErrorKind) -> bool {
    let mut current = err.source();
    while let Some(cause) = current {
        if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
            if io_err.kind() == kind {
                return true;
            }
        }
        current = cause.source();
    }
    false
}

/// Hostname resolution failures surface as connect errors whose chain names
/// the lookup, not as a distinct reqwest category
fn source_chain_mentions_dns(err: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(cause) = current {
        let text = cause.to_string().to_ascii_lowercase();
        if text.contains("dns error")
            || text.contains("failed to lookup address")
            || text.contains("name or service not known")
            || text.contains("no such host")
        {
            return true;
        }
        current = cause.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct ChainedError {
        message: &'static str,
        source: std::io::Error,
    }

    impl fmt::Display for ChainedError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl StdError for ChainedError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn test_transport_creation() {
        let config = DiagnosticsConfig::default();
        assert!(HttpTransport::new(&config).is_ok());
    }

    #[test]
    fn test_transport_creation_with_options() {
        let config = DiagnosticsConfig::builder()
            .timeout(60)
            .follow_redirects(false)
            .header("X-Scope", "test")
            .user_agent("http-diagnostics/0.1")
            .build()
            .unwrap();

        assert!(HttpTransport::new(&config).is_ok());
    }

    #[test]
    fn test_invalid_header_name_rejected() {
        let config = DiagnosticsConfig::builder()
            .header("bad name", "value")
            .build()
            .unwrap();

        let error = HttpTransport::new(&config).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_source_chain_kind_detection() {
        let chained = ChainedError {
            message: "client error (Connect)",
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        };

        assert!(source_chain_has_kind(
            &chained,
            std::io::ErrorKind::ConnectionRefused
        ));
        assert!(!source_chain_has_kind(
            &chained,
            std::io::ErrorKind::TimedOut
        ));
    }

    #[test]
    fn test_dns_detection_in_chain() {
        let chained = ChainedError {
            message: "client error (Connect)",
            source: std::io::Error::other("failed to lookup address information"),
        };

        assert!(source_chain_mentions_dns(&chained));

        let refused = ChainedError {
            message: "client error (Connect)",
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert!(!source_chain_mentions_dns(&refused));
    }
}
