//! Fixed-step integrators for a coupled pair
//! `dy/dt = f0(t, y, v)`, `dv/dt = f1(t, y, v)`.
//!
//! Both equations are advanced from the same pre-step state and share one
//! clock. How intermediate stages offset the state is chosen by
//! [`StageCoupling`](crate::config::StageCoupling) on the config.

use crate::{error::DiffeqError, rhs::PairedRhs};

pub mod euler;
pub mod midpoint;
pub mod rk4;
pub mod trapezoid;

pub use euler::euler;
pub use midpoint::midpoint;
pub use rk4::rk4;
pub use trapezoid::trapezoid;

#[inline]
pub(crate) fn eval_dy<F: PairedRhs + ?Sized>(
    f: &F,
    t: f64,
    (y, v): (f64, f64),
) -> Result<f64, DiffeqError> {
    f.dy(t, y, v).map_err(|e| DiffeqError::rhs(t, e))
}

#[inline]
pub(crate) fn eval_dv<F: PairedRhs + ?Sized>(
    f: &F,
    t: f64,
    (y, v): (f64, f64),
) -> Result<f64, DiffeqError> {
    f.dv(t, y, v).map_err(|e| DiffeqError::rhs(t, e))
}
