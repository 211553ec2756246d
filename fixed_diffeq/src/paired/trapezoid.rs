use crate::{
    config::IntegrationConfig, error::DiffeqError, rhs::PairedRhs, step::StepPlan,
    trajectory::PairedTrajectory,
};

use super::{eval_dv, eval_dy};

/// Trapezoid (Heun) on a paired system.
pub fn trapezoid<F>(f: &F, config: &IntegrationConfig) -> Result<PairedTrajectory, DiffeqError>
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
    log::debug!("paired trapezoid ({coupling:?}): {num_steps} steps of {step}");

    let mut result = PairedTrajectory::with_capacity(num_steps);
    let mut t = config.t_init;
    let mut y = config.y_init;
    let mut v = config.v_init;

    for _ in 0..num_steps {
        result.push(t, y, v);

        let k1a = eval_dy(f, t, (y, v))?;
        let k1b = eval_dv(f, t, (y, v))?;

        let (pa, pb) = coupling.probes(y, v, step, k1a, k1b);
        let k2a = eval_dy(f, t + step, pa)?;
        let k2b = eval_dv(f, t + step, pb)?;

        y += half_step * (k1a + k2a);
        v += half_step * (k1b + k2b);
        t += step;
    }

    Ok(result)
}
