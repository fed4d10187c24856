//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::config::MeterConfig;
use crate::sections::{
    SectionResult, digit_section, length_section, symbol_section, uppercase_section,
};
use crate::types::{PasswordEvaluation, StrengthLevel, StrengthScore};

type Section = fn(&SecretString) -> SectionResult;

/// Rules in evaluation order. Each satisfied rule is worth one point.
const SECTIONS: [(&str, Section); 4] = [
    ("length", length_section),
    ("digit", digit_section),
    ("uppercase", uppercase_section),
    ("symbol", symbol_section),
];

/// Classifies a password for the strength meter.
///
/// Returns `None` for an empty password, otherwise the level reached by
/// counting satisfied rules (length >= 8, a digit, an uppercase letter, a
/// symbol): 0-1 is weak, 2-3 medium, 4 strong.
///
/// ```
/// use pwd_meter::{classify, StrengthLevel};
///
/// assert_eq!(classify(""), None);
/// assert_eq!(classify("abcdefg1"), Some(StrengthLevel::Medium));
/// assert_eq!(classify("Abcdefg1!"), Some(StrengthLevel::Strong));
/// ```
pub fn classify(password: &str) -> Option<StrengthLevel> {
    let password = SecretString::new(password.into());

    #[cfg(feature = "async")]
    let evaluation = evaluate_password_strength(&password, None);

    #[cfg(not(feature = "async"))]
    let evaluation = evaluate_password_strength(&password);

    evaluation.strength()
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` with the score and one reason per unmet rule.
/// The score is `None` for an empty password or a cancelled evaluation.
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    if password.expose_secret().is_empty() {
        return PasswordEvaluation::default();
    }

    let mut reasons = Vec::new();
    let mut score = StrengthScore::ZERO;

    for (_name, section) in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Evaluation cancelled before section: {}", _name);
                    return PasswordEvaluation::cancelled();
                }
            }
        }

        match section(password) {
            Some(reason) => reasons.push(reason),
            None => score = score.bump(),
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: score {}, {} unmet rule(s)",
        score,
        reasons.len()
    );

    PasswordEvaluation {
        score: Some(score),
        reasons,
    }
}

/// Async version that waits for the configured debounce, then sends the
/// evaluation result via channel.
///
/// Meant to be re-spawned on every keystroke: cancel the previous token so a
/// stale evaluation comes back as cancelled instead of scored.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
    config: &MeterConfig,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(config.debounce).await;
    let evaluation = evaluate_password_strength(password, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
