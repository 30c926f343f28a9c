//! Integration tests for the phone number grammar.
//!
//! Grammar: an optional leading `+`, then exactly ten ASCII digits.

use checkout_core::{PhoneError, PhoneNumber};
use checkout_screen::PhoneValidator;

// =============================================================================
// Accepted Input
// =============================================================================

#[test]
fn test_accepts_plus_and_ten_digits() {
    assert!(PhoneValidator::is_valid("+1234567890"));
}

#[test]
fn test_accepts_ten_digits_without_plus() {
    assert!(PhoneValidator::is_valid("5551234567"));
}

// =============================================================================
// Rejected Input
// =============================================================================

#[test]
fn test_rejects_short_number() {
    assert!(!PhoneValidator::is_valid("12345"));
}

#[test]
fn test_rejects_empty() {
    assert!(!PhoneValidator::is_valid(""));
    assert_eq!(PhoneValidator::check(""), Err(PhoneError::Empty));
}

#[test]
fn test_rejects_separators() {
    assert!(!PhoneValidator::is_valid("+12-345-67890"));
    assert!(!PhoneValidator::is_valid("+1 234 567 890"));
}

#[test]
fn test_rejects_arbitrary_text_without_panicking() {
    for candidate in ["🙂", "null", "+", "+-", "0x1234567890", "\t", "+١٢٣٤٥٦٧٨٩٠"] {
        assert!(!PhoneValidator::is_valid(candidate), "{candidate:?}");
    }
    let long = "9".repeat(10_000);
    assert!(!PhoneValidator::is_valid(&long));
}

// =============================================================================
// Consistency
// =============================================================================

#[test]
fn test_validator_matches_phone_number_type() {
    for candidate in ["+1234567890", "1234567890", "12345", "", "++1234567890"] {
        assert_eq!(
            PhoneValidator::is_valid(candidate),
            candidate.parse::<PhoneNumber>().is_ok()
        );
    }
}

#[test]
fn test_repeated_calls_agree() {
    let inputs = ["+1234567890", "12345", ""];
    let first: Vec<bool> = inputs.iter().map(|s| PhoneValidator::is_valid(s)).collect();
    let second: Vec<bool> = inputs.iter().map(|s| PhoneValidator::is_valid(s)).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![true, false, false]);
}
