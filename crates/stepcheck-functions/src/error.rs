//! Error types for the function front end
//!
//! Rejected requests are not errors; they come back as `approved: false`.
//! The variants here are faults that the runtime reports as a failed
//! invocation.

/// Result type alias for function operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for function invocations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload was not a JSON object
    #[error("Invalid event: expected a JSON object, found {found}")]
    InvalidEvent { found: &'static str },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Create an invalid event error naming the JSON type that was received
    pub fn invalid_event(payload: &serde_json::Value) -> Self {
        Self::InvalidEvent {
            found: json_type_name(payload),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
