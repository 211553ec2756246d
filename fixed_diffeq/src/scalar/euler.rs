use crate::{
    config::IntegrationConfig, error::DiffeqError, rhs::ScalarRhs, step::StepPlan,
    trajectory::Trajectory,
};

use super::eval;

/// Explicit Euler: `y <- y + step * f(t, y)`.
pub fn euler<F>(f: &F, config: &IntegrationConfig) -> Result<Trajectory, DiffeqError>
where
    F: ScalarRhs + ?Sized,
{
    let StepPlan {
        num_steps, step, ..
    } = StepPlan::from_config(config)?;
    log::debug!("euler: {num_steps} steps of {step}");

    let mut result = Trajectory::with_capacity(num_steps);
    let mut t = config.t_init;
    let mut y = config.y_init;

    for _ in 0..num_steps {
        result.push(t, y);

        let k1 = eval(f, t, y)?;
        y += step * k1;
        t += step;
    }

    Ok(result)
}
