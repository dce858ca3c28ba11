//! Error taxonomy for the console
//!
//! Request-path errors all funnel into [`RequestError`], which the panel
//! renders as one error fragment plus one error toast. Settings failures are
//! recovered into the fallback catalog and only ever logged.

use thiserror::Error;

/// Failures of a single user-triggered execution of one endpoint panel
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RequestError {
    /// One or more required parameters were empty after trimming
    #[error("Missing required parameter(s): {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// The request never produced an HTTP response (DNS, refused, reset...)
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// 2xx transport, but the JSON payload carries an `error` field
    #[error("API Error: {message}")]
    ApiReported { message: String },

    /// Content type promised JSON but the body did not parse
    #[error("Malformed JSON response: {0}")]
    MalformedJson(String),

    /// The response body could not be read to completion
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// A media body could not be materialized for display
    #[error("Failed to store media response: {0}")]
    Media(String),
}

impl RequestError {
    /// Short label used by the status badge of a failed panel
    pub fn badge(&self) -> String {
        match self {
            RequestError::HttpStatus { status, .. } => format!("Error {status}"),
            RequestError::Validation { .. } => "Invalid".to_string(),
            _ => "Error".to_string(),
        }
    }
}

/// Failures loading `/settings`; never shown to the user
#[derive(Debug, Error)]
pub enum SettingsFetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("settings endpoint returned HTTP {0}")]
    Status(u16),

    #[error("invalid settings document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Copy-to-clipboard failures; surfaced as a toast only
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to copy: {0}")]
    Write(String),

    #[error("nothing to copy")]
    Empty,
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::Write(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = RequestError::Validation {
            missing: vec!["url".to_string(), "apikey".to_string()],
        };
        assert_eq!(err.to_string(), "Missing required parameter(s): url, apikey");
    }

    #[test]
    fn test_http_status_message_and_badge() {
        let err = RequestError::HttpStatus {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert_eq!(err.badge(), "Error 404");
    }

    #[test]
    fn test_api_reported_message() {
        let err = RequestError::ApiReported {
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API Error: rate limited");
        assert_eq!(err.badge(), "Error");
    }
}
