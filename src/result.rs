//! Outcome types returned by the validator.

use std::fmt;
use thiserror::Error;

/// A single rule the candidate failed to satisfy.
///
/// Variants are declared in rule evaluation order, so the derived `Ord`
/// sorts violations the same way the validator reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Violation {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
}

impl Violation {
    /// Every violation, in evaluation order.
    pub const ALL: [Violation; 4] = [
        Violation::TooShort,
        Violation::MissingUppercase,
        Violation::MissingLowercase,
        Violation::MissingDigit,
    ];

    /// Stable identifier for callers that map violations to their own
    /// display strings.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::TooShort => "too_short",
            Violation::MissingUppercase => "missing_uppercase",
            Violation::MissingLowercase => "missing_lowercase",
            Violation::MissingDigit => "missing_digit",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Violation::TooShort => "Password is shorter than the minimum length",
            Violation::MissingUppercase => "Password must contain an uppercase letter (A-Z)",
            Violation::MissingLowercase => "Password must contain a lowercase letter (a-z)",
            Violation::MissingDigit => "Password must contain a digit (0-9)",
        };
        f.write_str(msg)
    }
}

/// Result of checking one candidate against a policy.
///
/// Validity is derived from the violation list, so the two can never
/// disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyResult {
    violations: Vec<Violation>,
}

impl PolicyResult {
    pub(crate) fn from_violations(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// `true` when every rule passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Failed rules in evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Converts a failing result into an error for `?`-style form handling.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyViolations`] carrying the failed rules when the
    /// candidate is not valid.
    pub fn into_result(self) -> Result<(), PolicyViolations> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PolicyViolations(self.violations))
        }
    }
}

impl IntoIterator for PolicyResult {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a PolicyResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// A rejected candidate, as an error value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("password rejected: {}", codes(.0))]
pub struct PolicyViolations(pub Vec<Violation>);

fn codes(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::code)
        .collect::<Vec<_>>()
        .join(", ")
}
