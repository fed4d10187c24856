//! Score, level and evaluation types shared by the evaluator and the indicator.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of rules a password can satisfy.
pub const MAX_SCORE: u8 = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStrengthError {
    #[error("Unknown strength label: {0:?}")]
    UnknownLabel(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Strength score {0} is out of range (max {max})", max = MAX_SCORE)]
pub struct ScoreOutOfRange(pub u8);

/// Count of satisfied strength rules, always in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const ZERO: Self = Self(0);

    pub fn value(self) -> u8 {
        self.0
    }

    /// Adds one satisfied rule, saturating at [`MAX_SCORE`].
    pub(crate) fn bump(self) -> Self {
        Self((self.0 + 1).min(MAX_SCORE))
    }

    pub fn level(self) -> StrengthLevel {
        StrengthLevel::from_score(self)
    }
}

impl TryFrom<u8> for StrengthScore {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_SCORE {
            return Err(ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Categorical strength shown by the meter.
///
/// An empty password has no level at all; callers model that as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: StrengthScore) -> Self {
        match score.value() {
            0 | 1 => StrengthLevel::Weak,
            2 | 3 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StrengthLevel {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(StrengthLevel::Weak),
            "medium" => Ok(StrengthLevel::Medium),
            "strong" => Ok(StrengthLevel::Strong),
            _ => Err(ParseStrengthError::UnknownLabel(s.to_string())),
        }
    }
}

/// Result of a detailed evaluation.
///
/// `score` is `None` when there was nothing to score (empty password) or the
/// evaluation was cancelled. `reasons` lists one hint per unmet rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: Option<StrengthScore>,
    pub reasons: Vec<String>,
}

pub(crate) const CANCELLED_REASON: &str = "Evaluation cancelled";

impl PasswordEvaluation {
    pub fn strength(&self) -> Option<StrengthLevel> {
        self.score.map(StrengthLevel::from_score)
    }

    pub fn is_cancelled(&self) -> bool {
        self.score.is_none() && self.reasons == [CANCELLED_REASON]
    }

    pub(crate) fn cancelled() -> Self {
        Self {
            score: None,
            reasons: vec![CANCELLED_REASON.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u8) -> StrengthScore {
        StrengthScore::try_from(v).expect("score in range")
    }

    #[test]
    fn test_level_from_score_mapping() {
        assert_eq!(StrengthLevel::from_score(score(0)), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(score(1)), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(score(2)), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(score(3)), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(score(4)), StrengthLevel::Strong);
    }

    #[test]
    fn test_score_out_of_range() {
        assert_eq!(StrengthScore::try_from(5), Err(ScoreOutOfRange(5)));
        assert!(StrengthScore::try_from(MAX_SCORE).is_ok());
    }

    #[test]
    fn test_score_bump_saturates() {
        let full = score(4).bump();
        assert_eq!(full.value(), MAX_SCORE);
        assert_eq!(StrengthScore::ZERO.bump().value(), 1);
    }

    #[test]
    fn test_parse_level_labels() {
        assert_eq!("Weak".parse::<StrengthLevel>(), Ok(StrengthLevel::Weak));
        assert_eq!("medium".parse::<StrengthLevel>(), Ok(StrengthLevel::Medium));
        assert_eq!(" STRONG ".parse::<StrengthLevel>(), Ok(StrengthLevel::Strong));
        assert_eq!(
            "epic".parse::<StrengthLevel>(),
            Err(ParseStrengthError::UnknownLabel("epic".to_string()))
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(StrengthLevel::Medium.to_string(), "Medium");
        assert_eq!(score(3).to_string(), "3/4");
    }

    #[test]
    fn test_evaluation_strength_and_cancellation() {
        let evaluation = PasswordEvaluation {
            score: Some(score(2)),
            reasons: vec!["Add at least one symbol".to_string()],
        };
        assert_eq!(evaluation.strength(), Some(StrengthLevel::Medium));
        assert!(!evaluation.is_cancelled());

        let cancelled = PasswordEvaluation::cancelled();
        assert_eq!(cancelled.strength(), None);
        assert!(cancelled.is_cancelled());

        assert!(!PasswordEvaluation::default().is_cancelled());
    }

    #[test]
    fn test_cancellation_needs_exactly_the_cancel_reason() {
        let scored = PasswordEvaluation {
            score: Some(score(0)),
            reasons: vec![CANCELLED_REASON.to_string()],
        };
        assert!(!scored.is_cancelled());

        let extra = PasswordEvaluation {
            score: None,
            reasons: vec![CANCELLED_REASON.to_string(), "Add at least one symbol".to_string()],
        };
        assert!(!extra.is_cancelled());
    }
}
