use crate::{config::IntegrationConfig, error::DiffeqError};

/// Uniform step size derived from the requested interval and step count,
/// plus the fractions the higher-order methods reuse every iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepPlan {
    /// Number of iterations (and recorded samples).
    pub num_steps: usize,
    pub step: f64,
    pub half_step: f64,
    pub sixth_step: f64,
}

impl StepPlan {
    /// Computes `step = (t_end - t_init) / num_steps`.
    ///
    /// The sign of `step` follows the interval direction, and an empty
    /// interval gives a zero step.
    ///
    /// # Errors
    ///
    /// `NegativeSteps` when `num_steps < 0`, `ZeroSteps` when it is zero,
    /// `TooManySteps` when it does not fit in `usize`.
    pub fn new(num_steps: i64, t_init: f64, t_end: f64) -> Result<Self, DiffeqError> {
        if num_steps < 0 {
            return Err(DiffeqError::NegativeSteps(num_steps));
        }
        if num_steps == 0 {
            return Err(DiffeqError::ZeroSteps);
        }

        let count =
            usize::try_from(num_steps).map_err(|_| DiffeqError::TooManySteps(num_steps))?;
        let step = (t_end - t_init) / num_steps as f64;
        log::trace!("planned {num_steps} steps of {step} over [{t_init}, {t_end}]");

        Ok(Self {
            num_steps: count,
            step,
            half_step: step / 2.0,
            sixth_step: step / 6.0,
        })
    }

    pub fn from_config(config: &IntegrationConfig) -> Result<Self, DiffeqError> {
        let plan = Self::new(config.num_steps, config.t_init, config.t_end)?;
        if plan.step == 0.0 {
            log::warn!(
                "zero-length interval at t = {}, the trajectory will stay at its initial condition",
                config.t_init
            );
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_forward_step() {
        let plan = StepPlan::new(4, 0.0, 1.0).unwrap();
        assert_eq!(plan.num_steps, 4);
        assert_abs_diff_eq!(plan.step, 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(plan.half_step, 0.125, epsilon = 1e-15);
        assert_abs_diff_eq!(plan.sixth_step, 0.25 / 6.0, epsilon = 1e-15);
    }

    #[test]
    fn test_backward_step_is_negative() {
        let plan = StepPlan::new(5, 2.0, -3.0).unwrap();
        assert_abs_diff_eq!(plan.step, -1.0, epsilon = 1e-15);
        assert!(plan.half_step < 0.0);
    }

    #[test]
    fn test_empty_interval() {
        let plan = StepPlan::new(3, 7.0, 7.0).unwrap();
        assert_eq!(plan.step, 0.0);
    }

    #[test]
    fn test_zero_steps() {
        assert!(matches!(
            StepPlan::new(0, 0.0, 1.0),
            Err(DiffeqError::ZeroSteps)
        ));
    }

    #[test]
    fn test_negative_steps() {
        assert!(matches!(
            StepPlan::new(-2, 0.0, 1.0),
            Err(DiffeqError::NegativeSteps(-2))
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_huge_step_count_is_planned() {
        let plan = StepPlan::new(i64::MAX, 0.0, 1.0).unwrap();
        assert_eq!(plan.num_steps as u64, i64::MAX as u64);
        assert!(plan.step > 0.0);
    }

    #[test]
    fn test_from_config() {
        let config = IntegrationConfig::default();
        let plan = StepPlan::from_config(&config).unwrap();
        assert_eq!(plan.num_steps, 10_000);
        assert_abs_diff_eq!(plan.step, 0.01, epsilon = 1e-15);
    }
}
