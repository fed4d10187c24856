//! Password strength rules
//!
//! Each section checks one rule. A satisfied rule is worth one point.

mod digit;
mod length;
mod symbol;
mod uppercase;

pub use digit::digit_section;
pub use length::length_section;
pub use symbol::symbol_section;
pub use uppercase::uppercase_section;

/// Result type for section evaluation functions.
/// - `Some(reason)` - Rule not satisfied, with a hint for the user
/// - `None` - Rule satisfied
pub type SectionResult = Option<String>;

use unicode_general_category::{GeneralCategory, get_general_category};

/// Decimal digit: general category `Nd` only, so `½`, `²` or `Ⅻ` do not count.
pub(crate) fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Letter: any of the `L*` general categories.
pub(crate) fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
