//! Fixed patterns for the identity step
//!
//! Both patterns match the whole string. Digit classes are spelled `[0-9]`
//! because `\d` in the regex crate matches every Unicode decimal digit.

use regex::Regex;
use std::sync::OnceLock;

/// Nine digits, either ungrouped or grouped as `DDD-DD-DDDD`
pub const SSN_PATTERN: &str = r"^(?:[0-9]{9}|[0-9]{3}-[0-9]{2}-[0-9]{4})$";

/// Local part, `@`, dotted domain, 2-4 letter top-level label
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$";

static SSN_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn ssn_regex() -> &'static Regex {
    SSN_REGEX.get_or_init(|| Regex::new(SSN_PATTERN).unwrap())
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

pub fn is_ssn(value: &str) -> bool {
    ssn_regex().is_match(value)
}

pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}
