//! Integration tests for dialing-code to country resolution.
//!
//! These tests verify the embedded dial_codes.json table through the
//! public lookup API.

use country_flags::{PhoneCode, countries_from_phone_code, country_from_phone_code};

/// Test that popular dialing codes resolve to the expected countries.
#[test]
fn test_popular_dialing_codes() {
    let expected = [
        ("1", "US"),
        ("7", "RU"),
        ("20", "EG"),
        ("33", "FR"),
        ("34", "ES"),
        ("39", "IT"),
        ("44", "GB"),
        ("49", "DE"),
        ("55", "BR"),
        ("61", "AU"),
        ("81", "JP"),
        ("82", "KR"),
        ("86", "CN"),
        ("91", "IN"),
        ("380", "UA"),
        ("420", "CZ"),
        ("971", "AE"),
    ];

    for (code, country) in expected {
        let resolved = country_from_phone_code(code);
        assert_eq!(
            resolved.as_ref().map(|c| c.as_str()),
            Some(country),
            "dialing code '{}' should resolve to '{}'",
            code,
            country
        );
    }
}

/// Test that a leading '+' never changes the result.
#[test]
fn test_plus_prefix_is_ignored() {
    for code in ["1", "44", "420", "380", "971"] {
        let with_plus = country_from_phone_code(format!("+{}", code));
        let without = country_from_phone_code(code);
        assert_eq!(
            with_plus, without,
            "'+{}' and '{}' should resolve identically",
            code, code
        );
        assert!(without.is_some(), "dialing code '{}' should resolve", code);
    }
}

/// Test that unknown dialing codes return None.
#[test]
fn test_unknown_dialing_codes() {
    for code in ["999999", "0", "12345678", "+999999"] {
        assert_eq!(
            country_from_phone_code(code),
            None,
            "dialing code '{}' should not resolve",
            code
        );
    }
}

/// Test that lookup requires an exact match, never a prefix match.
#[test]
fn test_no_prefix_matching() {
    // "442" is not a code even though "44" is
    assert_eq!(country_from_phone_code("442"), None);
    // "4" is not a code even though "44" and "49" are
    assert_eq!(country_from_phone_code("4"), None);
}

/// Test that garbage input resolves to None rather than panicking.
#[test]
fn test_garbage_input() {
    for input in ["", "+", "abc", "+4a2", "四二零"] {
        assert_eq!(
            country_from_phone_code(input),
            None,
            "input '{}' should not resolve",
            input
        );
    }
}

/// Test the shared-code candidate lists.
#[test]
fn test_shared_dialing_code_candidates() {
    // North American Numbering Plan: 20 territories behind "1"
    let nanp = countries_from_phone_code("1").unwrap();
    assert_eq!(nanp.len(), 20);
    for territory in ["US", "CA", "PR", "JM", "BS"] {
        assert!(
            nanp.iter().any(|c| c.as_str() == territory),
            "NANP candidates should include '{}'",
            territory
        );
    }

    // UK and crown dependencies behind "44"
    let uk = countries_from_phone_code("+44").unwrap();
    assert_eq!(
        uk.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        ["GB", "GG", "IM", "JE"]
    );

    // Norway and Svalbard behind "47"
    let no = countries_from_phone_code("47").unwrap();
    assert_eq!(no.len(), 2);
}

/// Test that unshared codes yield a single-candidate list.
#[test]
fn test_single_candidate_codes() {
    for (code, country) in [("420", "CZ"), ("81", "JP"), ("33", "FR")] {
        let candidates = countries_from_phone_code(code).unwrap();
        assert_eq!(candidates.len(), 1, "dialing code '{}'", code);
        assert_eq!(candidates[0].as_str(), country);
    }
}

/// Test that the candidate list agrees with the canonical resolution.
#[test]
fn test_canonical_is_a_candidate() {
    for code in ["1", "44", "47", "61", "262", "500", "590", "595"] {
        let canonical = country_from_phone_code(code).unwrap();
        let candidates = countries_from_phone_code(code).unwrap();
        assert!(
            candidates.contains(&canonical),
            "canonical country for '{}' should be among its candidates",
            code
        );
    }
}

/// Test resolution through the PhoneCode newtype.
#[test]
fn test_phone_code_newtype_resolution() {
    let pc: PhoneCode = "+420".parse().unwrap();
    assert_eq!(pc.as_str(), "420");
    assert_eq!(pc.country().unwrap().as_str(), "CZ");

    let unmapped: PhoneCode = "999999".parse().unwrap();
    assert_eq!(unmapped.country(), None);
}
