use crate::{
    config::IntegrationConfig, error::DiffeqError, rhs::PairedRhs, step::StepPlan,
    trajectory::PairedTrajectory,
};

use super::{eval_dv, eval_dy};

/// Explicit midpoint (RK2) on a paired system.
pub fn midpoint<F>(f: &F, config: &IntegrationConfig) -> Result<PairedTrajectory, DiffeqError>
where
    F: PairedRhs + ?Sized,
{
    let StepPlan {
        num_steps,
        step,
        half_step,
        ..
    } = StepPlan::from_config(config)?;
    let coupling = config.coupling;
    log::debug!("paired midpoint ({coupling:?}): {num_steps} steps of {step}");

    let mut result = PairedTrajectory::with_capacity(num_steps);
    let mut t = config.t_init;
    let mut y = config.y_init;
    let mut v = config.v_init;

    for _ in 0..num_steps {
        result.push(t, y, v);

        let k1a = eval_dy(f, t, (y, v))?;
        let k1b = eval_dv(f, t, (y, v))?;

        let (pa, pb) = coupling.probes(y, v, half_step, k1a, k1b);
        let k2a = eval_dy(f, t + half_step, pa)?;
        let k2b = eval_dv(f, t + half_step, pb)?;

        y += step * k2a;
        v += step * k2b;
        t += step;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StageCoupling, paired::test_problems::oscillator};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_self_stage_probe() {
        // from (1, 0): k1a = 0, k1b = -1
        // k2a = f0(y + 0, v + 0) = 0, k2b = f1(y - h/2, v - h/2) = -(1 - h/2)
        let config = IntegrationConfig::new(2, 0.0, 0.2, 1.0).with_v_init(0.0);
        let result = midpoint(&oscillator(), &config).unwrap();
        assert_abs_diff_eq!(result.y[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.v[1], -0.1 * 0.95, epsilon = 1e-12);
    }

    #[test]
    fn test_textbook_probe() {
        // k2a = v + h/2 * k1b = -h/2, k2b = -(y + h/2 * k1a) = -1
        let config = IntegrationConfig::new(2, 0.0, 0.2, 1.0)
            .with_v_init(0.0)
            .with_coupling(StageCoupling::Textbook);
        let result = midpoint(&oscillator(), &config).unwrap();
        assert_abs_diff_eq!(result.y[1], 1.0 - 0.1 * 0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(result.v[1], -0.1, epsilon = 1e-12);
    }
}
