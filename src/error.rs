//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini answered with a non-success status. `details` is the response
    /// body, parsed as JSON when possible and kept as a string otherwise.
    #[error("Gemini API error (status {status}): {details}")]
    Provider {
        status: StatusCode,
        details: serde_json::Value,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Status reported by the downstream provider, if it got that far.
    pub fn downstream_status(&self) -> Option<StatusCode> {
        match self {
            Error::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Failure detail suitable for returning to the caller.
    pub fn details(&self) -> serde_json::Value {
        match self {
            Error::Provider { details, .. } => details.clone(),
            Error::Http(e) if e.is_timeout() => {
                serde_json::Value::String(format!("request timed out: {}", describe_chain(e)))
            }
            Error::Http(e) => serde_json::Value::String(describe_chain(e)),
            other => serde_json::Value::String(other.to_string()),
        }
    }
}

/// Render an error and all of its sources as `outer: cause: root cause`.
fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.ends_with(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_exposes_status_and_details() {
        let err = Error::Provider {
            status: StatusCode::TOO_MANY_REQUESTS,
            details: serde_json::json!({ "error": { "code": 429 } }),
        };

        assert_eq!(err.downstream_status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(err.details()["error"]["code"], 429);
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct SendFailure(#[source] ConnectFailure);

    #[derive(Debug, Error)]
    #[error("tcp connect error")]
    struct ConnectFailure(#[source] std::io::Error);

    #[test]
    fn test_describe_chain_includes_every_cause() {
        let err = SendFailure(ConnectFailure(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));

        assert_eq!(
            describe_chain(&err),
            "error sending request: tcp connect error: Connection refused"
        );
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = Error::Config("GEMINI_API_KEY not set".to_string());

        assert_eq!(err.downstream_status(), None);
        assert_eq!(
            err.details(),
            serde_json::Value::String("Configuration error: GEMINI_API_KEY not set".to_string())
        );
    }
}
