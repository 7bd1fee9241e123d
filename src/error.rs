//! Error types for the Draft Sport API client

use serde_json::Value;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, DraftSportError>;

#[derive(Error, Debug)]
pub enum DraftSportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// A required configuration value is missing or malformed.
    #[error("No {value} available. {hint}")]
    Configuration { value: String, hint: String },

    /// The caller misused the request API (empty path, unknown method).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A 200 response whose body was not valid JSON after large-integer guarding.
    #[error("Failed to decode API response body: {source}")]
    Decoding {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Any response other than 200 or 404.
    #[error("API returned status {status}{}", .content.as_ref().map(|c| format!(": {c}")).unwrap_or_default())]
    Api { status: u16, content: Option<Value> },

    /// A parsed payload did not have the shape of the requested type.
    #[error("Failed to decode {message}")]
    Decode { message: String },

    #[error("Pick {pick} has position {position} without category membership")]
    MissingCategoryMembership { pick: String, position: String },
}

impl DraftSportError {
    pub(crate) fn configuration(value: &str, hint: impl Into<String>) -> Self {
        DraftSportError::Configuration {
            value: value.to_string(),
            hint: hint.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        DraftSportError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        DraftSportError::Decode {
            message: message.into(),
        }
    }

    /// HTTP status carried by an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            DraftSportError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
