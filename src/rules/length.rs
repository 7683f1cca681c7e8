//! Length rule - checks password minimum length.

use crate::policy::Policy;
use crate::result::Violation;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_rule(candidate: &str, policy: &Policy) -> Option<Violation> {
    (candidate.chars().count() < policy.min_length()).then_some(Violation::TooShort)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_too_short() {
        assert_eq!(
            length_rule("Short1!", &Policy::UNIFIED),
            Some(Violation::TooShort)
        );
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        assert_eq!(length_rule("12345678", &Policy::UNIFIED), None);
    }

    #[test]
    fn test_length_rule_empty() {
        assert_eq!(length_rule("", &Policy::UNIFIED), Some(Violation::TooShort));
    }

    #[test]
    fn test_length_rule_counts_chars_not_bytes() {
        // 7 characters, 14 bytes
        let arabic = "كلمةسرّ";
        assert!(arabic.len() >= 8);
        assert_eq!(
            length_rule(arabic, &Policy::UNIFIED),
            Some(Violation::TooShort)
        );

        // 8 characters
        assert_eq!(length_rule("éééééééé", &Policy::UNIFIED), None);
    }
}
