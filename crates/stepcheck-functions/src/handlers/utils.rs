//! Shared helpers for the step handlers

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a request record from an invocation payload
///
/// Only JSON objects are accepted. Inside an object, absent or badly typed
/// fields are left to the validators.
pub fn parse_request<T: DeserializeOwned>(payload: Value) -> Result<T> {
    if !payload.is_object() {
        return Err(Error::invalid_event(&payload));
    }
    Ok(serde_json::from_value(payload)?)
}
