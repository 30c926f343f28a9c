//! Phone number validation for the checkout form.
//!
//! The accepted grammar is defined once, by [`PhoneNumber::parse`]: an
//! optional leading `+` followed by exactly ten ASCII digits, nothing else.

use checkout_core::{PhoneError, PhoneNumber};

/// Classifies candidate phone numbers.
///
/// Both methods are pure: they never panic, hold no state, and return the
/// same answer for the same input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneValidator;

impl PhoneValidator {
    /// Returns `true` if `candidate` is an acceptable phone number.
    ///
    /// Empty, partial, and malformed input simply yields `false`.
    #[must_use]
    pub fn is_valid(candidate: &str) -> bool {
        Self::check(candidate).is_ok()
    }

    /// Parses `candidate`, returning the reason when it is rejected.
    ///
    /// # Errors
    ///
    /// Returns the [`PhoneError`] describing the first grammar violation.
    pub fn check(candidate: &str) -> Result<PhoneNumber, PhoneError> {
        PhoneNumber::parse(candidate)
    }
}
