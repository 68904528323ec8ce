//! Response envelope returned to the workflow
//!
//! The workflow expects `{"statusCode": 200, "body": "<json>"}` with the
//! validation outcome encoded as a string inside `body`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use stepcheck_core::ValidationResponse;

/// Status code carried by every envelope
pub const STATUS_OK: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,
    pub body: String,
}

impl LambdaResponse {
    /// Wrap a validation outcome
    pub fn ok(response: &ValidationResponse) -> Result<Self> {
        Ok(Self {
            status_code: STATUS_OK,
            body: serde_json::to_string(response)?,
        })
    }
}
