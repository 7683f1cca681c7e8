//! Character variety rules - uppercase, lowercase and digit presence.
//!
//! Only ASCII ranges count: `A-Z`, `a-z`, `0-9`.

use crate::policy::Policy;
use crate::result::Violation;

pub fn uppercase_rule(candidate: &str, _policy: &Policy) -> Option<Violation> {
    (!candidate.chars().any(|c| c.is_ascii_uppercase())).then_some(Violation::MissingUppercase)
}

pub fn lowercase_rule(candidate: &str, _policy: &Policy) -> Option<Violation> {
    (!candidate.chars().any(|c| c.is_ascii_lowercase())).then_some(Violation::MissingLowercase)
}

pub fn digit_rule(candidate: &str, _policy: &Policy) -> Option<Violation> {
    (!candidate.chars().any(|c| c.is_ascii_digit())).then_some(Violation::MissingDigit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: &Policy = &Policy::UNIFIED;

    #[test]
    fn test_uppercase_rule() {
        assert_eq!(uppercase_rule("lowercase123", P), Some(Violation::MissingUppercase));
        assert_eq!(uppercase_rule("lowercasE123", P), None);
    }

    #[test]
    fn test_lowercase_rule() {
        assert_eq!(lowercase_rule("UPPERCASE123", P), Some(Violation::MissingLowercase));
        assert_eq!(lowercase_rule("UPPERCASe123", P), None);
    }

    #[test]
    fn test_digit_rule() {
        assert_eq!(digit_rule("NoNumbers!", P), Some(Violation::MissingDigit));
        assert_eq!(digit_rule("One1", P), None);
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        assert_eq!(uppercase_rule("ÉÀÜ", P), Some(Violation::MissingUppercase));
        assert_eq!(lowercase_rule("éàü", P), Some(Violation::MissingLowercase));
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        // Arabic-Indic digits
        assert_eq!(digit_rule("١٢٣٤", P), Some(Violation::MissingDigit));
    }
}
