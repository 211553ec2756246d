//! Fixed-step integrators for scalar ODEs `dy/dt = f(t, y)` and coupled
//! pairs `dy/dt = f0(t, y, v)`, `dv/dt = f1(t, y, v)`.
//!
//! Four schemes are provided for each kind of system: explicit Euler,
//! explicit midpoint (RK2), trapezoid (Heun) and classical RK4. Every run
//! derives a uniform step from the interval and step count, records a sample
//! before each update, and returns the samples as a trajectory.
//!
//! ```
//! use fixed_diffeq::{IntegrationConfig, Method, compare_paired};
//!
//! // y'' = -y as a pair
//! let system = (|_t: f64, _y: f64, v: f64| v, |_t: f64, y: f64, _v: f64| -y);
//! let config = IntegrationConfig::new(100, 0.0, 1.0, 1.0).with_v_init(0.0);
//!
//! for (method, trajectory) in compare_paired(&system, &config).unwrap() {
//!     assert_eq!(trajectory.len(), 100);
//!     assert_eq!(trajectory.first(), Some((0.0, 1.0, 0.0)));
//!     println!("{method}: {:?}", trajectory.last());
//! }
//! # let _ = Method::ALL;
//! ```

pub mod config;
pub mod error;
pub mod methods;
pub mod paired;
pub mod rhs;
pub mod scalar;
pub mod step;
pub mod trajectory;


pub use config::{IntegrationConfig, StageCoupling};
pub use error::{DiffeqError, RhsFailure};
pub use methods::{
    Method, UnknownMethod, compare_paired, compare_paired_with, compare_scalar,
    compare_scalar_with, par_compare_paired, par_compare_paired_with, par_compare_scalar,
    par_compare_scalar_with,
};
pub use rhs::{Fallible, PairedRhs, RhsComponent, ScalarRhs};
pub use step::StepPlan;
pub use trajectory::{PairedTrajectory, Trajectory};
