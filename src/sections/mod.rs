//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and reports
//! on exactly one criterion.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::common_password_section;
pub use length::length_section;
pub use pattern::{repetition_section, sequential_section};
pub use variety::{case_section, digit_section, special_section};

use crate::types::{Criterion, CriterionStatus};

/// How a section changes the running raw score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreEffect {
    Adjust(f64),
    /// Discard everything accumulated so far.
    Reset,
}

/// Outcome of a single section.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub criterion: Criterion,
    pub status: CriterionStatus,
    pub effect: ScoreEffect,
    pub reason: Option<&'static str>,
}

impl Check {
    fn pass(criterion: Criterion, points: f64) -> Self {
        Check {
            criterion,
            status: CriterionStatus::Pass,
            effect: ScoreEffect::Adjust(points),
            reason: None,
        }
    }

    fn fail(criterion: Criterion, effect: ScoreEffect, reason: &'static str) -> Self {
        Check {
            criterion,
            status: CriterionStatus::Fail,
            effect,
            reason: Some(reason),
        }
    }
}

/// Signature shared by all sections.
pub type Section = fn(&secrecy::SecretString) -> Check;
