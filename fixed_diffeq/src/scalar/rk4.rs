use crate::{
    config::IntegrationConfig, error::DiffeqError, rhs::ScalarRhs, step::StepPlan,
    trajectory::Trajectory,
};

use super::eval;

/// Classical fourth-order Runge-Kutta.
pub fn rk4<F>(f: &F, config: &IntegrationConfig) -> Result<Trajectory, DiffeqError>
where
    F: ScalarRhs + ?Sized,
{
    let StepPlan {
        num_steps,
        step,
        half_step,
        sixth_step,
    } = StepPlan::from_config(config)?;
    log::debug!("rk4: {num_steps} steps of {step}");

    let mut result = Trajectory::with_capacity(num_steps);
    let mut t = config.t_init;
    let mut y = config.y_init;

    for _ in 0..num_steps {
        result.push(t, y);

        let k1 = eval(f, t, y)?;
        let k2 = eval(f, t + half_step, y + half_step * k1)?;
        let k3 = eval(f, t + half_step, y + half_step * k2)?;
        let k4 = eval(f, t + step, y + step * k3)?;
        y += sixth_step * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
        t += step;
    }

    Ok(result)
}
