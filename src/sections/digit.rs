//! Digit section - checks for at least one numeric character.

use secrecy::{ExposeSecret, SecretString};
use super::{SectionResult, is_decimal_digit};

/// Checks if the password contains a decimal digit.
///
/// Any script's decimal digits count, not only ASCII `0-9`. Fractions,
/// superscripts and numerals such as `½`, `²` or `Ⅻ` do not.
///
/// # Returns
/// - `Some(reason)` if no decimal digit is present
/// - `None` otherwise
pub fn digit_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(is_decimal_digit) {
        return None;
    }
    Some("Add at least one number".to_string())
}
