//! Length section - checks password minimum and recommended length.

use secrecy::{ExposeSecret, SecretString};
use super::{Check, ScoreEffect};
use crate::types::{Criterion, CriterionStatus};

pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;

/// Awards a full point at the recommended length and half a point at the
/// minimum. Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> Check {
    let len = password.expose_secret().chars().count();
    if len >= RECOMMENDED_LENGTH {
        Check::pass(Criterion::Length, 1.0)
    } else if len >= MIN_LENGTH {
        Check {
            criterion: Criterion::Length,
            status: CriterionStatus::Partial,
            effect: ScoreEffect::Adjust(0.5),
            reason: Some(
                "Password should ideally be at least 12 characters long for better security.",
            ),
        }
    } else {
        Check::fail(
            Criterion::Length,
            ScoreEffect::Adjust(0.0),
            "Password must be at least 8 characters long.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let check = length_section(&pwd);
        assert_eq!(check.status, CriterionStatus::Fail);
        assert_eq!(check.effect, ScoreEffect::Adjust(0.0));
        assert_eq!(check.reason, Some("Password must be at least 8 characters long."));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        let check = length_section(&pwd);
        assert_eq!(check.status, CriterionStatus::Partial);
        assert_eq!(check.effect, ScoreEffect::Adjust(0.5));
        assert!(check.reason.is_some_and(|r| r.contains("at least 12")));
    }

    #[test]
    fn test_length_section_recommended() {
        let pwd = SecretString::new("LongEnough12".to_string().into());
        let check = length_section(&pwd);
        assert_eq!(check, Check::pass(Criterion::Length, 1.0));
    }

    #[test]
    fn test_length_section_counts_characters() {
        // 8 characters, 15 bytes
        let pwd = SecretString::new("ééééééé1".to_string().into());
        assert_eq!(length_section(&pwd).status, CriterionStatus::Partial);

        // 6 characters, 12 bytes
        let pwd = SecretString::new("ñañañá".to_string().into());
        assert_eq!(length_section(&pwd).status, CriterionStatus::Fail);
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(length_section(&pwd).status, CriterionStatus::Fail);
    }
}
