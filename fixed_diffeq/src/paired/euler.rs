use crate::{
    config::IntegrationConfig, error::DiffeqError, rhs::PairedRhs, step::StepPlan,
    trajectory::PairedTrajectory,
};

use super::{eval_dv, eval_dy};

/// Explicit Euler on both equations from the same pre-step state.
///
/// There is no intermediate stage, so the config's coupling has no effect.
pub fn euler<F>(f: &F, config: &IntegrationConfig) -> Result<PairedTrajectory, DiffeqError>
where
    F: PairedRhs + ?Sized,
{
    let StepPlan {
        num_steps, step, ..
    } = StepPlan::from_config(config)?;
    log::debug!("paired euler: {num_steps} steps of {step}");

    let mut result = PairedTrajectory::with_capacity(num_steps);
    let mut t = config.t_init;
    let mut y = config.y_init;
    let mut v = config.v_init;

    for _ in 0..num_steps {
        result.push(t, y, v);

        let k1a = eval_dy(f, t, (y, v))?;
        let k1b = eval_dv(f, t, (y, v))?;
        y += step * k1a;
        v += step * k1b;
        t += step;
    }

    Ok(result)
}
