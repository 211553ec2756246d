use std::error::Error as StdError;

use thiserror::Error;

/// Boxed failure raised by a right-hand-side evaluation.
pub type RhsFailure = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DiffeqError {
    /// `num_steps == 0` would divide the interval by zero.
    #[error("num_steps must be at least 1, a zero step count divides the interval by zero")]
    ZeroSteps,
    #[error("num_steps must be positive, got {0}")]
    NegativeSteps(i64),
    /// The step count does not fit in `usize` on this target.
    #[error("num_steps {0} exceeds the addressable sample count")]
    TooManySteps(i64),
    /// The right-hand side failed while evaluating a stage at time `t`.
    #[error("right-hand side failed at t = {t}: {source}")]
    RightHandSide {
        t: f64,
        #[source]
        source: RhsFailure,
    },
}

impl DiffeqError {
    pub(crate) fn rhs(t: f64, source: RhsFailure) -> Self {
        Self::RightHandSide { t, source }
    }
}
