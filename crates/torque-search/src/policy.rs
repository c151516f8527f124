//! Explicit failure policy for outbound calls.
//!
//! Search failures are absorbed (the request continues without
//! augmentation) while chat-completion failures are surfaced to the caller.
//! Call sites name the policy they apply instead of swallowing errors
//! implicitly.

use std::fmt::Display;

use tracing::{error, warn};

/// What to do when an outbound call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and continue with the empty default value.
    Absorb,
    /// Log the failure and hand it back to the caller unchanged.
    Surface,
}

impl FailurePolicy {
    /// Apply the policy to the outcome of `operation`.
    ///
    /// Under [`FailurePolicy::Absorb`] the result is always `Ok`.
    pub fn settle<T, E>(self, operation: &str, outcome: Result<T, E>) -> Result<T, E>
    where
        T: Default,
        E: Display,
    {
        match outcome {
            Ok(value) => Ok(value),
            Err(e) => match self {
                Self::Absorb => {
                    warn!(operation, error = %e, "failure absorbed, continuing without result");
                    Ok(T::default())
                }
                Self::Surface => {
                    error!(operation, error = %e, "failure surfaced to caller");
                    Err(e)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_turns_error_into_default() {
        let outcome: Result<Vec<u8>, String> = Err("boom".into());
        let settled = FailurePolicy::Absorb.settle("test", outcome);
        assert_eq!(settled, Ok(Vec::new()));
    }

    #[test]
    fn surface_passes_error_through() {
        let outcome: Result<String, String> = Err("boom".into());
        let settled = FailurePolicy::Surface.settle("test", outcome);
        assert_eq!(settled, Err("boom".to_string()));
    }

    #[test]
    fn success_is_untouched_by_either_policy() {
        for policy in [FailurePolicy::Absorb, FailurePolicy::Surface] {
            let outcome: Result<u32, String> = Ok(7);
            assert_eq!(policy.settle("test", outcome), Ok(7));
        }
    }
}
