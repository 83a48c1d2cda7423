//! Password strength evaluator - main evaluation logic.

use std::collections::BTreeMap;

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::Blacklist;
use crate::sections::{
    Check, ScoreEffect, Section, case_section, common_password_section, digit_section,
    length_section, repetition_section, sequential_section, special_section,
};
use crate::types::{
    Criterion, CriterionStatus, PasswordEvaluation, PasswordScore, PasswordStrength,
};

/// Sections in evaluation order. Feedback is reported in this order; the
/// common password section runs after all of them.
const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("case", case_section),
    ("digit", digit_section),
    ("special", special_section),
    ("sequential", sequential_section),
    ("repetition", repetition_section),
];

/// Evaluates password strength and returns a detailed evaluation.
///
/// Only the built-in common password list is consulted, so the result
/// depends on the password alone.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    evaluate(password, None)
}

/// Same as [`evaluate_password_strength`], also rejecting every password
/// in `blacklist`.
pub fn evaluate_password_strength_with(
    password: &SecretString,
    blacklist: &Blacklist,
) -> PasswordEvaluation {
    evaluate(password, Some(blacklist))
}

#[derive(Default)]
struct Tally {
    raw_score: f64,
    feedback: Vec<String>,
    checks: BTreeMap<Criterion, CriterionStatus>,
}

impl Tally {
    fn record(&mut self, _section_name: &str, check: Check) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            section = _section_name,
            criterion = check.criterion.as_str(),
            status = ?check.status,
            effect = ?check.effect,
            "password section evaluated"
        );

        match check.effect {
            ScoreEffect::Adjust(delta) => self.raw_score += delta,
            ScoreEffect::Reset => self.raw_score = 0.0,
        }

        if let Some(reason) = check.reason {
            self.feedback.push(reason.to_string());
        }

        self.checks
            .entry(check.criterion)
            .and_modify(|status| *status = check.status.merge(*status))
            .or_insert(check.status);
    }
}

fn evaluate(password: &SecretString, extra: Option<&Blacklist>) -> PasswordEvaluation {
    let mut tally = Tally::default();

    for (section_name, section_fn) in SECTIONS {
        tally.record(section_name, section_fn(password));
    }
    // Must run last: a match resets everything accumulated above.
    tally.record("common", common_password_section(password, extra));

    let raw_score = tally.raw_score.max(0.0);
    let strength = PasswordStrength::classify(raw_score);

    PasswordEvaluation {
        score: PasswordScore::from_raw(raw_score),
        raw_score,
        strength,
        message: strength.message(),
        feedback: tally.feedback,
        checks: tally.checks,
        color: strength.color(),
    }
}

/// Delay before a queued evaluation runs, so that fast typing only
/// evaluates the latest input.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the evaluation result via channel.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
