//! Character variety sections - check for mixed case, digits and special chars.

use secrecy::{ExposeSecret, SecretString};
use super::{Check, ScoreEffect};
use crate::charset::is_special;
use crate::types::Criterion;

/// Requires at least one ASCII uppercase and one ASCII lowercase letter.
pub fn case_section(password: &SecretString) -> Check {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if has_upper && has_lower {
        return Check::pass(Criterion::Case, 1.0);
    }
    Check::fail(
        Criterion::Case,
        ScoreEffect::Adjust(0.0),
        "Include both uppercase and lowercase letters.",
    )
}

/// Requires at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> Check {
    if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Check::pass(Criterion::Digit, 1.0);
    }
    Check::fail(
        Criterion::Digit,
        ScoreEffect::Adjust(0.0),
        "Add at least one number (0-9).",
    )
}

/// Requires at least one character from `!@#$%^&*`.
pub fn special_section(password: &SecretString) -> Check {
    if password.expose_secret().chars().any(is_special) {
        return Check::pass(Criterion::Special, 1.0);
    }
    Check::fail(
        Criterion::Special,
        ScoreEffect::Adjust(0.0),
        "Include at least one special character (!@#$%^&*).",
    )
}
