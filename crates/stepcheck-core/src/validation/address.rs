//! Address step: every field present and non-blank

use super::{RequestValidator, Violation};
use crate::types::{AddressRequest, Subject};

/// Approves an address when street, city, state and zip are all filled in
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressValidator;

impl RequestValidator for AddressValidator {
    type Input = AddressRequest;

    fn subject(&self) -> Subject {
        Subject::Address
    }

    fn violations(&self, input: &AddressRequest) -> Vec<Violation> {
        [
            ("street", input.street.as_deref()),
            ("city", input.city.as_deref()),
            ("state", input.state.as_deref()),
            ("zip", input.zip.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| check_filled(field, value))
        .collect()
    }
}

fn check_filled(field: &'static str, value: Option<&str>) -> Option<Violation> {
    match value {
        None => Some(Violation::missing(field)),
        Some(v) if trim(v).is_empty() => Some(Violation::blank(field)),
        Some(_) => None,
    }
}

/// Trim the ECMAScript whitespace set from both ends
///
/// That set is Unicode `White_Space` without U+0085, plus the byte order mark.
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
