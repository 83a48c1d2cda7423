//! Pattern analysis sections - detect sequential and repetitive patterns.

use secrecy::{ExposeSecret, SecretString};
use super::{Check, ScoreEffect};
use crate::charset::{SEQUENCE_WINDOW, sequential_windows};
use crate::types::Criterion;

const PATTERN_PENALTY: f64 = -0.5;
const MAX_REPEAT: usize = 2;

/// Penalizes any ascending 3-character run such as `abc` or `890`.
/// The password is lowercased first.
pub fn sequential_section(password: &SecretString) -> Check {
    let lowered = password.expose_secret().to_lowercase();
    let bytes = lowered.as_bytes();

    // Windows are ASCII and UTF-8 continuation bytes never are,
    // so matching on bytes cannot produce false positives.
    let found = bytes
        .windows(SEQUENCE_WINDOW)
        .any(|window| sequential_windows().any(|seq| seq == window));

    if found {
        return Check::fail(
            Criterion::NoPatterns,
            ScoreEffect::Adjust(PATTERN_PENALTY),
            "Avoid sequential characters like 'abc', '123', etc.",
        );
    }
    Check::pass(Criterion::NoPatterns, 0.0)
}

/// Penalizes a character repeated three or more times in a row.
pub fn repetition_section(password: &SecretString) -> Check {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count > MAX_REPEAT {
                return Check::fail(
                    Criterion::NoPatterns,
                    ScoreEffect::Adjust(PATTERN_PENALTY),
                    "Avoid repeating the same character more than twice.",
                );
            }
        } else {
            repeated_count = 1;
        }
    }

    Check::pass(Criterion::NoPatterns, 0.0)
}
