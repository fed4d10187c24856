//! Symbol section - checks for a character that is neither a letter nor a digit.

use secrecy::{ExposeSecret, SecretString};
use super::{SectionResult, is_decimal_digit, is_letter};

/// Checks if the password contains a symbol.
///
/// Whitespace, punctuation, emoji and non-decimal numbers such as `½` all
/// count as symbols.
///
/// # Returns
/// - `Some(reason)` if every character is a letter or a decimal digit
/// - `None` otherwise
pub fn symbol_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(|c| !(is_letter(c) || is_decimal_digit(c))) {
        return None;
    }
    Some("Add at least one symbol".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_section_missing() {
        let pwd = SecretString::new("NoSpecial123".to_string().into());
        let result = symbol_section(&pwd);
        assert!(matches!(result, Some(ref reason) if reason.contains("symbol")));
    }

    #[test]
    fn test_symbol_section_punctuation() {
        let pwd = SecretString::new("HasAll123!".to_string().into());
        assert_eq!(symbol_section(&pwd), None);
    }

    #[test]
    fn test_symbol_section_whitespace_and_emoji() {
        let space = SecretString::new("two words".to_string().into());
        assert_eq!(symbol_section(&space), None);

        let emoji = SecretString::new("lock\u{1F512}".to_string().into());
        assert_eq!(symbol_section(&emoji), None);
    }

    #[test]
    fn test_symbol_section_accented_letters_are_not_symbols() {
        let pwd = SecretString::new("café".to_string().into());
        assert!(symbol_section(&pwd).is_some());
    }

    #[test]
    fn test_symbol_section_non_decimal_numbers_are_symbols() {
        for pwd in ["Abcdefg1\u{00BD}", "x\u{00B2}", "\u{216B}"] {
            let pwd = SecretString::new(pwd.to_string().into());
            assert_eq!(symbol_section(&pwd), None);
        }
    }

    #[test]
    fn test_symbol_section_non_ascii_digits_are_not_symbols() {
        let pwd = SecretString::new("abc\u{0663}".to_string().into());
        assert!(symbol_section(&pwd).is_some());
    }
}
