//! Handlers for the Stepcheck functions
//!
//! Each step has a synchronous handler that turns a payload into an
//! envelope, and an async adapter that the function runtime calls.

mod address;
mod identity;
pub mod utils;

pub use address::{check_address, handle_address, ADDRESS_FUNCTION};
pub use identity::{check_identity, handle_identity, IDENTITY_FUNCTION};
