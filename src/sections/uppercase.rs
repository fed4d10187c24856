//! Uppercase section - checks for at least one uppercase letter.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password contains an uppercase letter.
///
/// # Returns
/// - `Some(reason)` if no uppercase letter is present
/// - `None` otherwise
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(|c| c.is_uppercase()) {
        return None;
    }
    Some("Add at least one uppercase letter".to_string())
}
