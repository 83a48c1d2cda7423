//! Value types returned by the evaluator.

use std::collections::BTreeMap;
use std::fmt;

/// A named check contributing to the raw score.
///
/// Variants are declared in evaluation order, so maps keyed by `Criterion`
/// iterate the way the checklist is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    Length,
    Case,
    Digit,
    Special,
    NoPatterns,
    NotCommon,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Length,
        Criterion::Case,
        Criterion::Digit,
        Criterion::Special,
        Criterion::NoPatterns,
        Criterion::NotCommon,
    ];

    /// Stable machine name of the criterion.
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Case => "case",
            Criterion::Digit => "digit",
            Criterion::Special => "special",
            Criterion::NoPatterns => "no_patterns",
            Criterion::NotCommon => "not_common",
        }
    }

    /// Checklist text for the criterion.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "Length (8+ chars, 12+ recommended)",
            Criterion::Case => "Upper & lowercase letters",
            Criterion::Digit => "Contains numbers",
            Criterion::Special => "Contains special characters",
            Criterion::NoPatterns => "No common patterns",
            Criterion::NotCommon => "Not a common password",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single criterion. Only `Length` ever reports `Partial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionStatus {
    Pass,
    Partial,
    Fail,
}

impl CriterionStatus {
    /// Combines two outcomes of the same criterion, keeping the worse one.
    pub fn merge(self, other: CriterionStatus) -> CriterionStatus {
        use CriterionStatus::*;
        match (self, other) {
            (Fail, _) | (_, Fail) => Fail,
            (Partial, _) | (_, Partial) => Partial,
            (Pass, Pass) => Pass,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CriterionStatus::Pass => "✅",
            CriterionStatus::Partial => "⚠️",
            CriterionStatus::Fail => "❌",
        }
    }
}

/// Color hint attached to a strength category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthColor {
    Red,
    Orange,
    Green,
}

impl StrengthColor {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthColor::Red => "red",
            StrengthColor::Orange => "orange",
            StrengthColor::Green => "green",
        }
    }
}

impl fmt::Display for StrengthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Classifies a raw (pre-normalization) score.
    ///
    /// Thresholds apply to the raw score, so a raw 3.5 is `Moderate`
    /// even though it normalizes to 87.
    pub fn classify(raw_score: f64) -> PasswordStrength {
        if raw_score >= 4.0 {
            PasswordStrength::Strong
        } else if raw_score >= 3.0 {
            PasswordStrength::Moderate
        } else {
            PasswordStrength::Weak
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            PasswordStrength::Weak => StrengthColor::Red,
            PasswordStrength::Moderate => StrengthColor::Orange,
            PasswordStrength::Strong => StrengthColor::Green,
        }
    }

    /// Summary message shown next to the strength label.
    pub fn message(self) -> &'static str {
        match self {
            PasswordStrength::Strong => {
                "Strong Password! Your password meets all security criteria."
            }
            PasswordStrength::Moderate => {
                "Moderate Password - Consider improving using the suggestions below."
            }
            PasswordStrength::Weak => {
                "Weak Password - Please improve it using the suggestions below."
            }
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Display score in the range 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Normalizes a raw score: clamp at zero, scale by 25, floor, cap at 100.
    pub fn from_raw(raw_score: f64) -> PasswordScore {
        let scaled = (raw_score.max(0.0) * 25.0).floor();
        PasswordScore(scaled.min(Self::MAX as f64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Full result of a password evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    /// Accumulated score after clamping, in `0.0..=4.0`.
    pub raw_score: f64,
    pub strength: PasswordStrength,
    pub message: &'static str,
    /// Improvement suggestions in the order the checks ran.
    pub feedback: Vec<String>,
    pub checks: BTreeMap<Criterion, CriterionStatus>,
    pub color: StrengthColor,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Status of a criterion. Every evaluation records all of them.
    pub fn status(&self, criterion: Criterion) -> Option<CriterionStatus> {
        self.checks.get(&criterion).copied()
    }

    /// Extra line shown for very high or very low scores.
    pub fn remark(&self) -> Option<&'static str> {
        match self.score.value() {
            90.. => Some("Excellent password! Your digital security is in good hands."),
            ..=30 => Some("This password needs significant improvement to be secure!"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_from_raw() {
        assert_eq!(PasswordScore::from_raw(4.0).value(), 100);
        assert_eq!(PasswordScore::from_raw(3.5).value(), 87);
        assert_eq!(PasswordScore::from_raw(0.5).value(), 12);
        assert_eq!(PasswordScore::from_raw(0.0).value(), 0);
        assert_eq!(PasswordScore::from_raw(-1.0).value(), 0);
        assert_eq!(PasswordScore::from_raw(9.0).value(), 100);
    }

    #[test]
    fn test_classify_uses_raw_thresholds() {
        assert_eq!(PasswordStrength::classify(4.0), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::classify(3.5), PasswordStrength::Moderate);
        assert_eq!(PasswordStrength::classify(3.0), PasswordStrength::Moderate);
        assert_eq!(PasswordStrength::classify(2.5), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::classify(0.0), PasswordStrength::Weak);
    }

    #[test]
    fn test_strength_colors() {
        assert_eq!(PasswordStrength::Weak.color().as_str(), "red");
        assert_eq!(PasswordStrength::Moderate.color().as_str(), "orange");
        assert_eq!(PasswordStrength::Strong.color().as_str(), "green");
    }

    #[test]
    fn test_status_merge_keeps_worse() {
        use CriterionStatus::*;
        assert_eq!(Pass.merge(Pass), Pass);
        assert_eq!(Pass.merge(Fail), Fail);
        assert_eq!(Fail.merge(Pass), Fail);
        assert_eq!(Partial.merge(Pass), Partial);
        assert_eq!(Partial.merge(Fail), Fail);
    }

    #[test]
    fn test_criterion_labels() {
        let labels: Vec<_> = Criterion::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "Length (8+ chars, 12+ recommended)",
                "Upper & lowercase letters",
                "Contains numbers",
                "Contains special characters",
                "No common patterns",
                "Not a common password",
            ]
        );
        assert_eq!(Criterion::NoPatterns.to_string(), "no_patterns");
    }

    #[test]
    fn test_status_symbols() {
        assert_eq!(CriterionStatus::Pass.symbol(), "✅");
        assert_eq!(CriterionStatus::Partial.symbol(), "⚠️");
        assert_eq!(CriterionStatus::Fail.symbol(), "❌");
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(PasswordStrength::Weak.to_string(), "Weak");
        assert_eq!(PasswordStrength::Moderate.to_string(), "Moderate");
        assert_eq!(PasswordStrength::Strong.to_string(), "Strong");

        assert_eq!(StrengthColor::Red.to_string(), "red");
        assert_eq!(StrengthColor::Orange.to_string(), "orange");
        assert_eq!(StrengthColor::Green.to_string(), "green");

        assert_eq!(PasswordScore::from_raw(3.5).to_string(), "87/100");
    }

    #[test]
    fn test_criterion_names_follow_evaluation_order() {
        let names: Vec<_> = Criterion::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["length", "case", "digit", "special", "no_patterns", "not_common"]
        );
        let mut sorted = Criterion::ALL;
        sorted.sort();
        assert_eq!(sorted, Criterion::ALL);
    }
}
