//! Property-based tests for the validators
//!
//! These check the approval rules and determinism across generated inputs
//! rather than hand-picked examples.

use proptest::prelude::*;
use stepcheck_core::{
    AddressRequest, AddressValidator, IdentityRequest, IdentityValidator, RequestValidator,
};

/// Strategy for a field value with at least one visible character
fn filled_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[a-zA-Z0-9#.,]{1,20}[ \t]{0,3}"
}

/// Strategy for empty or whitespace-only values
fn blank_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r'), Just('\u{00a0}'), Just('\u{feff}')],
        0..6,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn address_strategy() -> impl Strategy<Value = AddressRequest> {
    (
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,12}"),
    )
        .prop_map(|(street, city, state, zip)| AddressRequest { street, city, state, zip })
}

fn digits(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, len).prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

fn ssn_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        digits(9),
        (digits(3), digits(2), digits(4)).prop_map(|(a, b, c)| format!("{}-{}-{}", a, b, c)),
    ]
}

fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-zA-Z0-9._-]{1,10}", "[a-zA-Z0-9-]{1,10}", "[a-zA-Z]{2,4}")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

proptest! {
    #[test]
    fn prop_filled_address_is_approved(
        street in filled_strategy(),
        city in filled_strategy(),
        state in filled_strategy(),
        zip in filled_strategy(),
    ) {
        let request = AddressRequest {
            street: Some(street),
            city: Some(city),
            state: Some(state),
            zip: Some(zip),
        };
        prop_assert!(AddressValidator.validate(&request).approved());
    }

    #[test]
    fn prop_one_blank_field_rejects_address(
        position in 0usize..4,
        blank in blank_strategy(),
        filler in filled_strategy(),
    ) {
        let mut fields: Vec<Option<String>> = vec![Some(filler); 4];
        fields[position] = Some(blank);
        let request = AddressRequest {
            street: fields[0].clone(),
            city: fields[1].clone(),
            state: fields[2].clone(),
            zip: fields[3].clone(),
        };

        let verdict = AddressValidator.check(&request);
        prop_assert!(!verdict.approved());
        prop_assert_eq!(verdict.violations().len(), 1);
    }

    #[test]
    fn prop_address_validation_is_deterministic(request in address_strategy()) {
        let first = AddressValidator.validate(&request);
        let second = AddressValidator.validate(&request);
        prop_assert_eq!(&first, &second);

        let expected = if first.approved() {
            "address validation passed"
        } else {
            "address validation failed"
        };
        prop_assert_eq!(first.message(), expected);
    }

    #[test]
    fn prop_accepted_ssn_shapes_are_approved(ssn in ssn_strategy(), email in email_strategy()) {
        let request = IdentityRequest { ssn: Some(ssn), email: Some(email) };
        prop_assert!(IdentityValidator.is_approved(&request));
    }

    #[test]
    fn prop_partial_hyphenation_is_rejected(
        ssn in digits(9),
        position in prop_oneof![Just(3usize), Just(5usize)],
        email in email_strategy(),
    ) {
        let mut partial = ssn;
        partial.insert(position, '-');
        let request = IdentityRequest { ssn: Some(partial), email: Some(email) };
        prop_assert!(!IdentityValidator.is_approved(&request));
    }

    #[test]
    fn prop_email_without_at_is_rejected(ssn in ssn_strategy(), email in "[a-zA-Z0-9._-]{0,20}") {
        let request = IdentityRequest { ssn: Some(ssn), email: Some(email) };
        let response = IdentityValidator.validate(&request);
        prop_assert!(!response.approved());
        prop_assert_eq!(response.message(), "identity validation failed");
    }

    #[test]
    fn prop_identity_validation_is_deterministic(
        ssn in proptest::option::of("[0-9-]{0,12}"),
        email in proptest::option::of("[a-z@.]{0,12}"),
    ) {
        let request = IdentityRequest { ssn, email };
        prop_assert_eq!(IdentityValidator.validate(&request), IdentityValidator.validate(&request));
    }
}
