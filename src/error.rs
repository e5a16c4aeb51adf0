//! Error types for the Wallets Africa client.
//!
//! Every fallible operation in this crate returns [`Result<T>`], and every
//! failure is one of the [`WalletsError`] variants below. Errors are
//! propagated, never recovered from internally; the endpoint method a caller
//! invoked is the only error surface.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WalletsError>;

/// Errors produced by the Wallets Africa client.
#[derive(Debug, Error)]
pub enum WalletsError {
    /// The client configuration was rejected before any request was made.
    #[error("malformed config - {message}")]
    Config { message: String },

    /// A call argument failed a local check; no request was sent.
    #[error("{message}")]
    Validation { message: String },

    /// The request could not be executed or the response body could not be
    /// read (connect failure, timeout, TLS error).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The API answered with a non-success HTTP status. `code` and `message`
    /// come from the response envelope when it carries them, otherwise from
    /// the raw HTTP status line.
    #[error("Request Failed - Error Code: {code} | Message: {message}")]
    RequestFailed { code: String, message: String },

    /// A response field the result mapping relies on was absent, `null`, or
    /// of the wrong JSON type.
    #[error("missing or invalid response field `{field}` (expected {expected})")]
    MissingField {
        field: String,
        expected: &'static str,
    },
}

impl WalletsError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an argument validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an API failure error from an extracted code and message.
    pub fn request_failed(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a missing/mistyped response field error. `field` names the
    /// response field, `expected` the JSON type the mapping needed.
    pub fn missing_field(field: impl Into<String>, expected: &'static str) -> Self {
        Self::MissingField {
            field: field.into(),
            expected,
        }
    }
}
