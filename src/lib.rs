//! Password strength meter and generator
//!
//! This library scores passwords against a fixed set of heuristics and
//! generates random passwords that satisfy basic composition rules.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation over a channel with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Common passwords
//!
//! [`evaluate_password_strength`] rejects a fixed built-in list. To reject
//! more, load a [`Blacklist`] and call [`evaluate_password_strength_with`].
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, generate_password, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&Xq9z".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! assert_eq!(evaluation.strength(), PasswordStrength::Strong);
//! assert_eq!(evaluation.score.value(), 100);
//!
//! let generated = generate_password(16, true);
//! let evaluation = evaluate_password_strength(&generated);
//! assert!(evaluation.strength() >= PasswordStrength::Moderate);
//! ```

// Internal modules
mod blacklist;
mod charset;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use blacklist::{Blacklist, BlacklistError, COMMON_PASSWORDS, is_common_password};
pub use charset::SPECIAL as SPECIAL_CHARACTERS;
pub use evaluator::{evaluate_password_strength, evaluate_password_strength_with};
pub use generator::{GenerationConfig, generate_password, generate_password_with};
pub use types::{
    Criterion, CriterionStatus, PasswordEvaluation, PasswordScore, PasswordStrength,
    StrengthColor,
};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_password_strength_tx};
