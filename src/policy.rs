//! Policy configuration
//!
//! Holds the tunable parts of the password policy. The rule set itself is
//! fixed; only the minimum length can be configured.

use thiserror::Error;

use crate::result::PolicyResult;
use crate::rules::RULES;

/// Environment variable read by [`Policy::from_env`].
pub const MIN_LENGTH_ENV: &str = "PWD_POLICY_MIN_LENGTH";

const DEFAULT_MIN_LENGTH: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid minimum length: {0:?}")]
    InvalidMinLength(String),
    #[error("Minimum length must be greater than zero")]
    ZeroMinLength,
}

/// A password policy: minimum length plus uppercase, lowercase and digit
/// presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    min_length: usize,
}

impl Policy {
    /// The unified policy applied to every user role.
    pub const UNIFIED: Policy = Policy {
        min_length: DEFAULT_MIN_LENGTH,
    };

    /// Builds a policy with a custom minimum length.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ZeroMinLength`] if `min_length` is zero.
    pub fn with_min_length(min_length: usize) -> Result<Self, PolicyError> {
        if min_length == 0 {
            return Err(PolicyError::ZeroMinLength);
        }
        Ok(Self { min_length })
    }

    /// Builds a policy from the environment.
    ///
    /// # Environment Variable
    ///
    /// `PWD_POLICY_MIN_LENGTH` overrides the minimum length. If not set,
    /// the unified policy is returned.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The value is not a non-negative integer
    /// - The value is zero
    pub fn from_env() -> Result<Self, PolicyError> {
        let Ok(raw) = std::env::var(MIN_LENGTH_ENV) else {
            return Ok(Self::UNIFIED);
        };

        let min_length = raw.trim().parse::<usize>().map_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::warn!("{} is not a valid length: {:?}", MIN_LENGTH_ENV, raw);
            PolicyError::InvalidMinLength(raw.clone())
        })?;

        let policy = Self::with_min_length(min_length)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Password policy loaded: min_length={}", policy.min_length);

        Ok(policy)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Checks `candidate` against every rule of this policy.
    ///
    /// All rules run regardless of earlier failures; violations are
    /// reported in rule order.
    pub fn validate(&self, candidate: &str) -> PolicyResult {
        let violations = RULES
            .iter()
            .filter_map(|(name, rule)| {
                let violation = rule(candidate, self);
                #[cfg(feature = "tracing")]
                {
                    if let Some(v) = violation {
                        tracing::trace!("rule {} failed: {}", name, v.code());
                    }
                }
                #[cfg(not(feature = "tracing"))]
                let _ = name;
                violation
            })
            .collect();
        PolicyResult::from_violations(violations)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::UNIFIED
    }
}
