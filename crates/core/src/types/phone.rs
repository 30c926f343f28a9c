//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains something other than a digit or a leading `+`.
    #[error("phone number contains invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character position (not byte offset) in the input.
        position: usize,
    },
    /// A `+` appears anywhere other than the first position.
    #[error("'+' is only allowed as the first character (found at position {position})")]
    MisplacedPlus {
        /// Character position of the misplaced `+`.
        position: usize,
    },
    /// The number of digits is not the required count.
    #[error("phone number must have exactly {expected} digits (got {found})")]
    WrongDigitCount {
        /// Required digit count.
        expected: usize,
        /// Digits found in the input.
        found: usize,
    },
}

/// A phone number as accepted by the checkout form.
///
/// ## Grammar
///
/// ```text
/// phone := "+"? DIGIT{10}
/// DIGIT := '0'..='9'   (ASCII only)
/// ```
///
/// The input is taken as typed: no whitespace trimming, and separators such
/// as `-`, spaces, dots, or parentheses are rejected.
///
/// ## Examples
///
/// ```
/// use checkout_core::PhoneNumber;
///
/// // Valid numbers
/// assert!(PhoneNumber::parse("+1234567890").is_ok());
/// assert!(PhoneNumber::parse("1234567890").is_ok());
///
/// // Invalid numbers
/// assert!(PhoneNumber::parse("").is_err());              // empty
/// assert!(PhoneNumber::parse("12345").is_err());         // too short
/// assert!(PhoneNumber::parse("+12-345-67890").is_err()); // separators
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Number of digits a phone number must contain.
    pub const DIGIT_COUNT: usize = 10;

    /// Optional international prefix.
    pub const PLUS: char = '+';

    /// Parse a `PhoneNumber` from the raw field text.
    ///
    /// Character errors are reported before the digit count is checked, so
    /// `"12-3"` yields [`PhoneError::InvalidCharacter`] rather than
    /// [`PhoneError::WrongDigitCount`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Contains a character other than an ASCII digit or a leading `+`
    /// - Contains a `+` after the first position
    /// - Does not contain exactly [`Self::DIGIT_COUNT`] digits
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let mut digits = 0_usize;
        for (position, character) in s.chars().enumerate() {
            if character == Self::PLUS {
                if position != 0 {
                    return Err(PhoneError::MisplacedPlus { position });
                }
            } else if character.is_ascii_digit() {
                digits += 1;
            } else {
                return Err(PhoneError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }

        if digits != Self::DIGIT_COUNT {
            return Err(PhoneError::WrongDigitCount {
                expected: Self::DIGIT_COUNT,
                found: digits,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the digits without the optional `+` prefix.
    #[must_use]
    pub fn digits(&self) -> &str {
        self.0.strip_prefix(Self::PLUS).unwrap_or(&self.0)
    }

    /// Whether the number was entered with the international `+` prefix.
    #[must_use]
    pub fn has_plus_prefix(&self) -> bool {
        self.0.starts_with(Self::PLUS)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
