//! Password policy validation library
//!
//! Checks a candidate password against the unified password policy and
//! reports every rule it fails:
//!
//! 1. at least 8 characters
//! 2. an uppercase letter `A-Z`
//! 3. a lowercase letter `a-z`
//! 4. a digit `0-9`
//!
//! Validation is pure and total: any string is accepted, and a rejected
//! password is a normal result, not an error.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced, cancellable form helper
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_MIN_LENGTH`: minimum length used by [`Policy::from_env`]
//!   (the free functions always use the unified policy)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{validate_password, Violation};
//!
//! let result = validate_password("abcdefg1");
//! assert!(!result.is_valid());
//! assert_eq!(result.violations(), &[Violation::MissingUppercase]);
//!
//! for violation in &result {
//!     println!("{}: {}", violation.code(), violation);
//! }
//! ```

mod policy;
mod result;
mod rules;
mod validator;

// Public API
pub use policy::{MIN_LENGTH_ENV, Policy, PolicyError};
pub use result::{PolicyResult, PolicyViolations, Violation};
pub use rules::{RuleFn, digit_rule, length_rule, lowercase_rule, uppercase_rule};
pub use validator::{validate_password, validate_secret_password};

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
