//! Address step handler

use super::utils::parse_request;
use crate::error::Result;
use crate::logging::{invocation_span, redaction::shown, timing::Timer};
use crate::response::LambdaResponse;
use lambda_runtime::LambdaEvent;
use serde_json::Value;
use stepcheck_core::{AddressRequest, AddressValidator, RequestValidator};
use tracing::{debug, info};

/// Function name used in invocation spans
pub const ADDRESS_FUNCTION: &str = "check-address";

/// Validate an address payload and wrap the outcome
pub fn handle_address(payload: Value) -> Result<LambdaResponse> {
    let request: AddressRequest = parse_request(payload)?;

    info!(
        street = shown(request.street.as_deref()),
        city = shown(request.city.as_deref()),
        state = shown(request.state.as_deref()),
        zip = shown(request.zip.as_deref()),
        "Address information received"
    );

    let verdict = AddressValidator.check(&request);
    if verdict.approved() {
        debug!("Address approved");
    } else {
        debug!(failed = ?verdict.failed_fields(), "Address rejected");
    }

    LambdaResponse::ok(&verdict.response())
}

/// Runtime entry point for the address function
pub async fn check_address(event: LambdaEvent<Value>) -> Result<LambdaResponse> {
    let span = invocation_span(ADDRESS_FUNCTION, &event.context.request_id);

    span.in_scope(|| {
        let _timer = Timer::new("address_validation");
        handle_address(event.payload)
    })
}
