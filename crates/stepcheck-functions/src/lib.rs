//! Stepcheck Functions - function front end for the approval steps
//!
//! Two functions are built from this crate:
//!
//! - `check-address` runs [`handlers::check_address`]
//! - `check-identity` runs [`handlers::check_identity`]
//!
//! Both take the workflow's JSON object, log one diagnostic line, validate,
//! and answer with `{"statusCode": 200, "body": "{\"approved\":..,\"message\":..}"}`.
//! A payload that is not a JSON object fails the invocation.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod response;

pub use config::FunctionConfig;
pub use error::{Error, Result};
pub use handlers::{check_address, check_identity, handle_address, handle_identity};
pub use response::LambdaResponse;

/// Load configuration and initialize logging for a function binary
///
/// Rejected configuration values are logged as warnings once logging is up.
/// A logging failure is reported on stderr, along with those warnings, and
/// does not stop the function.
pub fn bootstrap() -> FunctionConfig {
    let (config, warnings) = FunctionConfig::from_env();

    match logging::init_logging(&config.logging) {
        Ok(()) => {
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
        }
        Err(e) => {
            for line in stderr_report(&e, &warnings) {
                eprintln!("{}", line);
            }
        }
    }

    config
}

/// Lines written to stderr when logging could not be initialized
fn stderr_report(error: &Error, warnings: &[String]) -> Vec<String> {
    std::iter::once(error.to_string())
        .chain(warnings.iter().cloned())
        .collect()
}
