//! Password policy rules
//!
//! Each rule checks one requirement and reports its own violation.

mod length;
mod variety;

pub use length::length_rule;
pub use variety::{digit_rule, lowercase_rule, uppercase_rule};

use crate::policy::Policy;
use crate::result::Violation;

/// Signature shared by every rule.
/// - `Some(violation)` - rule failed
/// - `None` - rule passed
pub type RuleFn = fn(&str, &Policy) -> Option<Violation>;

/// Rules in evaluation order.
pub(crate) const RULES: [(&str, RuleFn); 4] = [
    ("length", length_rule),
    ("uppercase", uppercase_rule),
    ("lowercase", lowercase_rule),
    ("digit", digit_rule),
];
