//! Request and response records for the approval steps
//!
//! Requests are decoded from whatever JSON object the workflow hands over.
//! Every field is optional, and a field holding anything other than a JSON
//! string decodes as absent so that it fails validation instead of failing
//! decoding.
//!
//! Copyright (c) 2025 Stepcheck Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Address submitted for the address step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRequest {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Identity details submitted for the identity step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRequest {
    /// Social security number, grouped or ungrouped
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Which approval step produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Address,
    Identity,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Address => "address",
            Subject::Identity => "identity",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome returned to the workflow
///
/// The message is always derived from `approved`, so the pair can only be
/// built through [`ValidationResponse::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResponse {
    approved: bool,
    message: String,
}

impl ValidationResponse {
    /// Build the response for a subject and outcome
    pub fn new(subject: Subject, approved: bool) -> Self {
        let outcome = if approved { "passed" } else { "failed" };
        Self {
            approved,
            message: format!("{} validation {}", subject, outcome),
        }
    }

    pub fn approved(&self) -> bool {
        self.approved
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Decode a field as a string, treating `null` and non-string values as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
