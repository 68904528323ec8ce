//! Identity step: SSN and email against fixed patterns

use super::patterns::{is_email, is_ssn};
use super::{RequestValidator, Violation};
use crate::types::{IdentityRequest, Subject};

/// Approves identity details when both the SSN and the email match
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityValidator;

impl RequestValidator for IdentityValidator {
    type Input = IdentityRequest;

    fn subject(&self) -> Subject {
        Subject::Identity
    }

    fn violations(&self, input: &IdentityRequest) -> Vec<Violation> {
        let mut violations = Vec::new();

        match input.ssn.as_deref() {
            None => violations.push(Violation::missing("ssn")),
            Some(ssn) if !is_ssn(ssn) => violations.push(Violation::pattern_mismatch("ssn")),
            Some(_) => {}
        }

        match input.email.as_deref() {
            None => violations.push(Violation::missing("email")),
            Some(email) if !is_email(email) => {
                violations.push(Violation::pattern_mismatch("email"))
            }
            Some(_) => {}
        }

        violations
    }
}
