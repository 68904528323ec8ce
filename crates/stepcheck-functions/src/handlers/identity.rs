//! Identity step handler

use super::utils::parse_request;
use crate::config::FunctionConfig;
use crate::error::Result;
use crate::logging::{
    invocation_span,
    redaction::{mask_email, mask_ssn, shown},
    timing::Timer,
};
use crate::response::LambdaResponse;
use lambda_runtime::LambdaEvent;
use serde_json::Value;
use stepcheck_core::{IdentityRequest, IdentityValidator, RequestValidator};
use tracing::{debug, info};

/// Function name used in invocation spans
pub const IDENTITY_FUNCTION: &str = "check-identity";

/// Validate an identity payload and wrap the outcome
pub fn handle_identity(payload: Value, config: &FunctionConfig) -> Result<LambdaResponse> {
    let request: IdentityRequest = parse_request(payload)?;

    let (ssn, email) = diagnostic_fields(&request, config.redact_pii());
    info!(ssn = %ssn, email = %email, redacted = config.redact_pii(), "Identity information received");

    let verdict = IdentityValidator.check(&request);
    if verdict.approved() {
        debug!("Identity approved");
    } else {
        debug!(failed = ?verdict.failed_fields(), "Identity rejected");
    }

    LambdaResponse::ok(&verdict.response())
}

/// Runtime entry point for the identity function
pub async fn check_identity(
    event: LambdaEvent<Value>,
    config: &FunctionConfig,
) -> Result<LambdaResponse> {
    let span = invocation_span(IDENTITY_FUNCTION, &event.context.request_id);

    span.in_scope(|| {
        let _timer = Timer::new("identity_validation");
        handle_identity(event.payload, config)
    })
}

/// SSN and email as they appear in the diagnostic line
pub(crate) fn diagnostic_fields(request: &IdentityRequest, redact: bool) -> (String, String) {
    let ssn = request.ssn.as_deref();
    let email = request.email.as_deref();

    if redact {
        (
            ssn.map_or_else(|| shown(None).to_string(), mask_ssn),
            email.map_or_else(|| shown(None).to_string(), mask_email),
        )
    } else {
        (shown(ssn).to_string(), shown(email).to_string())
    }
}
