//! Strength meter presentation: the label and colour shown under the
//! password field.

use std::fmt;

use crate::evaluator::classify;
use crate::types::StrengthLevel;

/// Packed `0xAARRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthIndicator {
    pub label: &'static str,
    pub color: Argb,
}

impl StrengthIndicator {
    /// Shown while the password field is empty.
    pub const HIDDEN: StrengthIndicator = StrengthIndicator {
        label: "",
        color: Argb::TRANSPARENT,
    };

    pub fn for_level(level: Option<StrengthLevel>) -> Self {
        let Some(level) = level else {
            return Self::HIDDEN;
        };
        let color = match level {
            StrengthLevel::Weak => Argb(0xFFFF_CDD2),
            StrengthLevel::Medium => Argb(0xFFFF_F9C4),
            StrengthLevel::Strong => Argb(0xFFC8_E6C9),
        };
        Self {
            label: level.label(),
            color,
        }
    }

    /// Classifies `password` and picks the matching indicator.
    pub fn for_password(password: &str) -> Self {
        Self::for_level(classify(password))
    }

    pub fn is_visible(&self) -> bool {
        *self != Self::HIDDEN
    }
}
