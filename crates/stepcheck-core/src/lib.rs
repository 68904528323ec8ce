//! Stepcheck Core - validators for workflow approval steps
//!
//! This crate holds the pure part of the two approval steps:
//!
//! - **Address**: all of `street`, `city`, `state` and `zip` must be present
//!   and non-blank.
//! - **Identity**: `ssn` must be nine digits (plain or `DDD-DD-DDDD`) and
//!   `email` must match a fixed address pattern.
//!
//! Nothing here performs I/O or logs. The function front end lives in
//! `stepcheck-functions`.
//!
//! # Example
//!
//! ```rust
//! use stepcheck_core::{IdentityRequest, IdentityValidator, RequestValidator};
//!
//! let request = IdentityRequest {
//!     ssn: Some("123-45-6789".to_string()),
//!     email: Some("a@b.co".to_string()),
//! };
//!
//! let response = IdentityValidator.validate(&request);
//! assert!(response.approved());
//! assert_eq!(response.message(), "identity validation passed");
//! ```
//!
//! Copyright (c) 2025 Stepcheck Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod validation;

pub use types::{AddressRequest, IdentityRequest, Subject, ValidationResponse};
pub use validation::{
    AddressValidator, IdentityValidator, RequestValidator, Rule, Verdict, Violation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
