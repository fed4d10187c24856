//! Password strength meter library
//!
//! Scores a password against four rules (length >= 8, a digit, an uppercase
//! letter, a symbol) and maps the score to a weak / medium / strong level
//! for the sign-up form's strength meter.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_DEBOUNCE_MS`: Delay before an async evaluation runs
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{classify, evaluate_password_strength, StrengthIndicator, StrengthLevel};
//! use secrecy::SecretString;
//!
//! assert_eq!(classify("Abcdefg1!"), Some(StrengthLevel::Strong));
//!
//! let password = SecretString::new("abcdefg1".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Score: {:?}", evaluation.score);
//! println!("Hints: {:?}", evaluation.reasons);
//!
//! let indicator = StrengthIndicator::for_level(evaluation.strength());
//! assert_eq!(indicator.label, "Medium");
//! ```

// Internal modules
mod config;
mod evaluator;
mod indicator;
mod sections;
mod types;

// Public API
pub use config::{ConfigError, MeterConfig, DEBOUNCE_ENV, DEFAULT_DEBOUNCE};
pub use evaluator::{classify, evaluate_password_strength};
pub use indicator::{Argb, StrengthIndicator};
pub use types::{
    MAX_SCORE, ParseStrengthError, PasswordEvaluation, ScoreOutOfRange, StrengthLevel,
    StrengthScore,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
