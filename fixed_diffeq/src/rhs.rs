//! Right-hand-side capabilities accepted by the integrators.
//!
//! Plain closures are infallible right-hand sides:
//!
//! ```
//! use fixed_diffeq::{IntegrationConfig, scalar};
//!
//! let config = IntegrationConfig::new(10, 0.0, 1.0, 1.0);
//! let trajectory = scalar::rk4(&|_t: f64, y: f64| -y, &config).unwrap();
//! assert_eq!(trajectory.len(), 10);
//! ```
//!
//! Closures that can fail are wrapped in [`Fallible`], and a paired system is
//! an ordered tuple `(f0, f1)` of three-argument right-hand sides.

use crate::error::RhsFailure;

/// Scalar right-hand side `dy/dt = f(t, y)`.
pub trait ScalarRhs {
    fn eval(&self, t: f64, y: f64) -> Result<f64, RhsFailure>;
}

/// One equation `f_i(t, y, v)` of a paired system.
pub trait RhsComponent {
    fn eval(&self, t: f64, y: f64, v: f64) -> Result<f64, RhsFailure>;
}

/// Paired right-hand side: `dy/dt = f0(t, y, v)`, `dv/dt = f1(t, y, v)`.
pub trait PairedRhs {
    fn dy(&self, t: f64, y: f64, v: f64) -> Result<f64, RhsFailure>;
    fn dv(&self, t: f64, y: f64, v: f64) -> Result<f64, RhsFailure>;
}

impl<F> ScalarRhs for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, t: f64, y: f64) -> Result<f64, RhsFailure> {
        Ok(self(t, y))
    }
}

impl<F> RhsComponent for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn eval(&self, t: f64, y: f64, v: f64) -> Result<f64, RhsFailure> {
        Ok(self(t, y, v))
    }
}

impl<F0, F1> PairedRhs for (F0, F1)
where
    F0: RhsComponent,
    F1: RhsComponent,
{
    fn dy(&self, t: f64, y: f64, v: f64) -> Result<f64, RhsFailure> {
        self.0.eval(t, y, v)
    }

    fn dv(&self, t: f64, y: f64, v: f64) -> Result<f64, RhsFailure> {
        self.1.eval(t, y, v)
    }
}

/// Wraps a closure returning `Result<f64, E>` so its errors abort the
/// integration instead of being swallowed.
#[derive(Clone, Copy, Debug)]
pub struct Fallible<F>(pub F);

impl<F, E> ScalarRhs for Fallible<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: Into<RhsFailure>,
{
    fn eval(&self, t: f64, y: f64) -> Result<f64, RhsFailure> {
        (self.0)(t, y).map_err(Into::into)
    }
}

impl<F, E> RhsComponent for Fallible<F>
where
    F: Fn(f64, f64, f64) -> Result<f64, E>,
    E: Into<RhsFailure>,
{
    fn eval(&self, t: f64, y: f64, v: f64) -> Result<f64, RhsFailure> {
        (self.0)(t, y, v).map_err(Into::into)
    }
}
