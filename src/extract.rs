//! Null-safe field extraction over loosely typed API responses.
//!
//! The API mixes two conventions for optional data (`null` values and absent
//! keys) and three envelope shapes (a `Response`/`Data` wrapper, a bare
//! array, and a flat object). Every result mapping in the crate reads fields
//! through the helpers here so the policy lives in exactly one place:
//!
//! * required field: absent, `null`, or wrong type all fail
//! * optional field: absent or `null` reads as the zero value; a present
//!   value of the wrong type still fails

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{Result, WalletsError};

/// Reads a required string field.
pub(crate) fn required_str(value: &Value, field: &str) -> Result<String> {
    match value.get(field).and_then(Value::as_str) {
        Some(s) => Ok(s.to_string()),
        None => Err(WalletsError::missing_field(field, "string")),
    }
}

/// Reads a required numeric field.
pub(crate) fn required_f64(value: &Value, field: &str) -> Result<f64> {
    match value.get(field).and_then(Value::as_f64) {
        Some(n) => Ok(n),
        None => Err(WalletsError::missing_field(field, "number")),
    }
}

/// Reads an optional string field. Absent or `null` reads as `""`.
pub(crate) fn optional_str(value: &Value, field: &str) -> Result<String> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(WalletsError::missing_field(field, "string")),
    }
}

/// Reads an optional numeric field. Absent or `null` reads as `0.0`.
pub(crate) fn optional_f64(value: &Value, field: &str) -> Result<f64> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(0.0),
        Some(other) => other
            .as_f64()
            .ok_or_else(|| WalletsError::missing_field(field, "number")),
    }
}

/// Navigates to a nested object, typically the `Data` wrapper.
pub(crate) fn object<'a>(value: &'a Value, field: &str) -> Result<&'a Value> {
    match value.get(field) {
        Some(inner) if inner.is_object() => Ok(inner),
        _ => Err(WalletsError::missing_field(field, "object")),
    }
}

/// Navigates to a nested array, e.g. `Data.Transactions`.
pub(crate) fn array<'a>(value: &'a Value, field: &str) -> Result<&'a [Value]> {
    match value.get(field).and_then(Value::as_array) {
        Some(items) => Ok(items.as_slice()),
        None => Err(WalletsError::missing_field(field, "array")),
    }
}

/// Treats the whole response body as an array. The bank listing endpoint is
/// the one place the API answers with a bare top-level array.
pub(crate) fn elements(body: &Value) -> Result<&[Value]> {
    body.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| WalletsError::missing_field("response body", "array"))
}

/// Builds the error for a non-success HTTP status.
///
/// When the decoded body carries the standard envelope (a `Response` object
/// with string `ResponseCode` and `Message`), those are surfaced. Bodies
/// without it, which includes the bare-array and flat-object endpoints, fall
/// back to the raw status code and its reason phrase.
pub(crate) fn failure(status: StatusCode, body: &Value) -> WalletsError {
    if let Some(response) = body.get("Response") {
        if let (Some(code), Some(message)) = (
            response.get("ResponseCode").and_then(Value::as_str),
            response.get("Message").and_then(Value::as_str),
        ) {
            return WalletsError::request_failed(code, message);
        }
    }

    WalletsError::request_failed(
        status.as_str(),
        status.canonical_reason().unwrap_or("Unknown Status"),
    )
}
