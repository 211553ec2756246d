//! Fixed-step integrators for a single equation `dy/dt = f(t, y)`.
//!
//! Every integrator records `(t, y)` before updating, so a run of
//! `num_steps` iterations returns `num_steps` samples starting at the
//! initial condition. The state after the final update is discarded.

use crate::{error::DiffeqError, rhs::ScalarRhs};

pub mod euler;
pub mod midpoint;
pub mod rk4;
pub mod trapezoid;

pub use euler::euler;
pub use midpoint::midpoint;
pub use rk4::rk4;
pub use trapezoid::trapezoid;

/// Evaluates `f(t, y)`, tagging a failure with the stage time.
#[inline]
pub(crate) fn eval<F: ScalarRhs + ?Sized>(f: &F, t: f64, y: f64) -> Result<f64, DiffeqError> {
    f.eval(t, y).map_err(|e| DiffeqError::rhs(t, e))
}
