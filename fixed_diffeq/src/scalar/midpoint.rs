use crate::{
    config::IntegrationConfig, error::DiffeqError, rhs::ScalarRhs, step::StepPlan,
    trajectory::Trajectory,
};

use super::eval;

/// Explicit midpoint (RK2): `y <- y + step * f(t + h/2, y + h/2 * k1)`.
pub fn midpoint<F>(f: &F, config: &IntegrationConfig) -> Result<Trajectory, DiffeqError>
where
    F: ScalarRhs + ?Sized,
{
    let StepPlan {
        num_steps,
        step,
        half_step,
        ..
    } = StepPlan::from_config(config)?;
    log::debug!("midpoint: {num_steps} steps of {step}");

    let mut result = Trajectory::with_capacity(num_steps);
    let mut t = config.t_init;
    let mut y = config.y_init;

    for _ in 0..num_steps {
        result.push(t, y);

        let k1 = eval(f, t, y)?;
        let k2 = eval(f, t + half_step, y + half_step * k1)?;
        y += step * k2;
        t += step;
    }

    Ok(result)
}
