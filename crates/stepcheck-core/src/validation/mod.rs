//! Validators for the address and identity steps
//!
//! Each validator reports the [`Violation`]s it finds. An empty list means
//! the request is approved; the list itself never reaches the workflow, which
//! only sees the [`ValidationResponse`].
//!
//! Copyright (c) 2025 Stepcheck Team
//! Licensed under the Apache-2.0 license

pub mod address;
pub mod identity;
pub mod patterns;
pub mod violation;

pub use address::AddressValidator;
pub use identity::IdentityValidator;
pub use violation::{Rule, Verdict, Violation};

use crate::types::{Subject, ValidationResponse};

/// Base trait for request validators
pub trait RequestValidator {
    /// The request type being validated
    type Input;

    /// Step this validator answers for
    fn subject(&self) -> Subject;

    /// Every rule the input breaks, in field order
    fn violations(&self, input: &Self::Input) -> Vec<Violation>;

    /// Run the validator and keep the violations
    fn check(&self, input: &Self::Input) -> Verdict {
        Verdict::new(self.subject(), self.violations(input))
    }

    /// Run the validator and reduce the outcome to the workflow response
    fn validate(&self, input: &Self::Input) -> ValidationResponse {
        self.check(input).response()
    }

    fn is_approved(&self, input: &Self::Input) -> bool {
        self.violations(input).is_empty()
    }
}
