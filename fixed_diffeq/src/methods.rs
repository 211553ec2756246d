use std::{fmt, str::FromStr};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    config::IntegrationConfig,
    error::DiffeqError,
    paired,
    rhs::{PairedRhs, ScalarRhs},
    scalar,
    trajectory::{PairedTrajectory, Trajectory},
};

/// The fixed-step schemes available for both scalar and paired systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Explicit Euler, first order.
    Euler,
    /// Explicit midpoint (RK2), second order.
    Midpoint,
    /// Trapezoid (Heun), second order.
    Trapezoid,
    /// Classical Runge-Kutta, fourth order.
    Rk4,
}

impl Method {
    /// Every method, in the order comparisons are reported.
    pub const ALL: [Method; 4] = [
        Method::Euler,
        Method::Midpoint,
        Method::Trapezoid,
        Method::Rk4,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Euler => "Euler",
            Method::Midpoint => "Midpoint",
            Method::Trapezoid => "Trapezoid",
            Method::Rk4 => "Runge-Kutta 4",
        }
    }

    /// Short identifier used on the command line and in file names.
    pub fn key(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Midpoint => "midpoint",
            Method::Trapezoid => "trapezoid",
            Method::Rk4 => "rk4",
        }
    }

    /// Global order of accuracy.
    pub fn order(&self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Midpoint | Method::Trapezoid => 2,
            Method::Rk4 => 4,
        }
    }

    /// Right-hand-side evaluations per step, per equation.
    pub fn evaluations_per_step(&self) -> usize {
        match self {
            Method::Euler => 1,
            Method::Midpoint | Method::Trapezoid => 2,
            Method::Rk4 => 4,
        }
    }

    pub fn integrate_scalar<F>(
        &self,
        f: &F,
        config: &IntegrationConfig,
    ) -> Result<Trajectory, DiffeqError>
    where
        F: ScalarRhs + ?Sized,
    {
        match self {
            Method::Euler => scalar::euler(f, config),
            Method::Midpoint => scalar::midpoint(f, config),
            Method::Trapezoid => scalar::trapezoid(f, config),
            Method::Rk4 => scalar::rk4(f, config),
        }
    }

    pub fn integrate_paired<F>(
        &self,
        f: &F,
        config: &IntegrationConfig,
    ) -> Result<PairedTrajectory, DiffeqError>
    where
        F: PairedRhs + ?Sized,
    {
        match self {
            Method::Euler => paired::euler(f, config),
            Method::Midpoint => paired::midpoint(f, config),
            Method::Trapezoid => paired::trapezoid(f, config),
            Method::Rk4 => paired::rk4(f, config),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method '{0}', expected one of euler, midpoint, trapezoid, rk4")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "midpoint" | "rk2" => Ok(Method::Midpoint),
            "trapezoid" | "heun" => Ok(Method::Trapezoid),
            "rk4" | "runge-kutta" | "runge-kutta 4" => Ok(Method::Rk4),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// Runs every method in [`Method::ALL`] order on a scalar problem.
pub fn compare_scalar<F>(
    f: &F,
    config: &IntegrationConfig,
) -> Result<Vec<(Method, Trajectory)>, DiffeqError>
where
    F: ScalarRhs + ?Sized,
{
    compare_scalar_with(&Method::ALL, f, config)
}

/// Runs `methods` in the given order on a scalar problem, stopping at the
/// first failure.
pub fn compare_scalar_with<F>(
    methods: &[Method],
    f: &F,
    config: &IntegrationConfig,
) -> Result<Vec<(Method, Trajectory)>, DiffeqError>
where
    F: ScalarRhs + ?Sized,
{
    methods
        .iter()
        .map(|method| Ok((*method, method.integrate_scalar(f, config)?)))
        .collect()
}

/// Runs every method in [`Method::ALL`] order on a paired problem.
pub fn compare_paired<F>(
    f: &F,
    config: &IntegrationConfig,
) -> Result<Vec<(Method, PairedTrajectory)>, DiffeqError>
where
    F: PairedRhs + ?Sized,
{
    compare_paired_with(&Method::ALL, f, config)
}

pub fn compare_paired_with<F>(
    methods: &[Method],
    f: &F,
    config: &IntegrationConfig,
) -> Result<Vec<(Method, PairedTrajectory)>, DiffeqError>
where
    F: PairedRhs + ?Sized,
{
    methods
        .iter()
        .map(|method| Ok((*method, method.integrate_paired(f, config)?)))
        .collect()
}

/// Same as [`compare_scalar`] with one method per rayon task.
///
/// Each integration stays sequential; only independent runs overlap.
pub fn par_compare_scalar<F>(
    f: &F,
    config: &IntegrationConfig,
) -> Result<Vec<(Method, Trajectory)>, DiffeqError>
where
    F: ScalarRhs + Sync + ?Sized,
{
    par_compare_scalar_with(&Method::ALL, f, config)
}

/// Same as [`compare_scalar_with`] with one method per rayon task. Results
/// keep the order of `methods`.
pub fn par_compare_scalar_with<F>(
    methods: &[Method],
    f: &F,
    config: &IntegrationConfig,
) -> Result<Vec<(Method, Trajectory)>, DiffeqError>
where
    F: ScalarRhs + Sync + ?Sized,
{
    methods
        .par_iter()
        .map(|method| Ok((*method, method.integrate_scalar(f, config)?)))
        .collect()
}

/// Same as [`compare_paired`] with one method per rayon task.
pub fn par_compare_paired<F>(
    f: &F,
    config: &IntegrationConfig,
) -> Result<Vec<(Method, PairedTrajectory)>, DiffeqError>
where
    F: PairedRhs + Sync + ?Sized,
{
    par_compare_paired_with(&Method::ALL, f, config)
}

pub fn par_compare_paired_with<F>(
    methods: &[Method],
    f: &F,
    config: &IntegrationConfig,
) -> Result<Vec<(Method, PairedTrajectory)>, DiffeqError>
where
    F: PairedRhs + Sync + ?Sized,
{
    methods
        .par_iter()
        .map(|method| Ok((*method, method.integrate_paired(f, config)?)))
        .collect()
}
