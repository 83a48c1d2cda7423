//! Common password section - forces the score to zero for well-known passwords.

use crate::blacklist::{Blacklist, is_common_password};
use secrecy::{ExposeSecret, SecretString};
use super::{Check, ScoreEffect};
use crate::types::Criterion;

/// Checks the password against the built-in common password list and,
/// when given, a caller-supplied extra list.
///
/// A match discards every point awarded by earlier sections.
pub fn common_password_section(password: &SecretString, extra: Option<&Blacklist>) -> Check {
    let pwd = password.expose_secret();
    if is_common_password(pwd) || extra.is_some_and(|bl| bl.contains(pwd)) {
        return Check::fail(
            Criterion::NotCommon,
            ScoreEffect::Reset,
            "This is a commonly used password and very insecure.",
        );
    }
    Check::pass(Criterion::NotCommon, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CriterionStatus;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_common_password_builtin() {
        for pwd in ["password", "PASSWORD", "Password123", "admin", "Welcome"] {
            let check = common_password_section(&secret(pwd), None);
            assert_eq!(check.status, CriterionStatus::Fail, "{pwd}");
            assert_eq!(check.effect, ScoreEffect::Reset);
        }
    }

    #[test]
    fn test_common_password_requires_exact_match() {
        let check = common_password_section(&secret("password1234"), None);
        assert_eq!(check, Check::pass(Criterion::NotCommon, 0.0));
    }

    #[test]
    fn test_common_password_extra_list() {
        let extra = Blacklist::from_entries(["letmein", "trustno1"]);

        let check = common_password_section(&secret("TrustNo1"), Some(&extra));
        assert_eq!(check.status, CriterionStatus::Fail);

        let check = common_password_section(&secret("TrustNo1"), None);
        assert_eq!(check.status, CriterionStatus::Pass);

        // built-in entries still apply alongside an extra list
        let check = common_password_section(&secret("qwerty"), Some(&extra));
        assert_eq!(check.status, CriterionStatus::Fail);
    }
}
