//! One-shot phone number validation.

use std::io::Write;

use checkout_screen::PhoneValidator;
use tracing::debug;

use super::CommandError;

/// Check each phone number and report the verdict on its own line.
///
/// Returns `Ok(true)` when every number is valid.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn phones<W: Write>(phones: &[String], out: &mut W) -> Result<bool, CommandError> {
    let mut all_valid = true;
    for phone in phones {
        match PhoneValidator::check(phone) {
            Ok(number) => writeln!(out, "{number}: valid")?,
            Err(e) => {
                all_valid = false;
                writeln!(out, "{phone}: invalid ({e})")?;
            }
        }
    }
    debug!(count = phones.len(), all_valid, "Validated phone numbers");
    Ok(all_valid)
}
