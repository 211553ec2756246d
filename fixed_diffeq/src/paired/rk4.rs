use crate::{
    config::IntegrationConfig, error::DiffeqError, rhs::PairedRhs, step::StepPlan,
    trajectory::PairedTrajectory,
};

use super::{eval_dv, eval_dy};

/// Classical fourth-order Runge-Kutta on a paired system.
pub fn rk4<F>(f: &F, config: &IntegrationConfig) -> Result<PairedTrajectory, DiffeqError>
where
    F: PairedRhs + ?Sized,
{
    let StepPlan {
        num_steps,
        step,
        half_step,
        sixth_step,
    } = StepPlan::from_config(config)?;
    let coupling = config.coupling;
    log::debug!("paired rk4 ({coupling:?}): {num_steps} steps of {step}");

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

        let (pa, pb) = coupling.probes(y, v, half_step, k2a, k2b);
        let k3a = eval_dy(f, t + half_step, pa)?;
        let k3b = eval_dv(f, t + half_step, pb)?;

        let (pa, pb) = coupling.probes(y, v, step, k3a, k3b);
        let k4a = eval_dy(f, t + step, pa)?;
        let k4b = eval_dv(f, t + step, pb)?;

        y += sixth_step * (k1a + 2.0 * k2a + 2.0 * k3a + k4a);
        v += sixth_step * (k1b + 2.0 * k2b + 2.0 * k3b + k4b);
        t += step;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StageCoupling, paired::test_problems::oscillator};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_self_stage_probe() {
        // h = 0.5 on y' = v, v' = -y from (1, 0):
        // k1 = (0, -1), k2 = (0, -0.75), k3 = (0, -0.8125), k4 = (0, -0.59375)
        // since the y equation only ever probes with its own zero stages
        let config = IntegrationConfig::new(2, 0.0, 1.0, 1.0).with_v_init(0.0);
        assert_eq!(config.coupling, StageCoupling::SelfStage);
        let result = rk4(&oscillator(), &config).unwrap();
        assert_eq!(result.y[1], 1.0);
        assert_relative_eq!(result.v[1], -151.0 / 384.0, max_relative = 1e-15);

        let textbook = rk4(&oscillator(), &config.with_coupling(StageCoupling::Textbook)).unwrap();
        assert!(textbook.y[1] < 1.0);
    }

    #[test]
    fn test_self_stage_reference_values() {
        let system = (
            |t: f64, y: f64, v: f64| t.sin() + y.cos() + v,
            |_t: f64, _y: f64, v: f64| v.cos(),
        );
        let config = IntegrationConfig::new(7, 0.0, 3.0, 0.4).with_v_init(-0.3);
        let result = rk4(&system, &config).unwrap();
        assert_relative_eq!(result.y[6], 3.8228945781802675, max_relative = 1e-12);
        assert_relative_eq!(result.v[6], 1.3641294894548177, max_relative = 1e-12);
    }

    #[test]
    fn test_decoupled_matches_scalar() {
        // y' = y and v' = -v do not interact under either coupling when
        // each equation only reads its own component
        let system = (|_t: f64, y: f64, _v: f64| y, |_t: f64, _y: f64, v: f64| -v);
        let config = IntegrationConfig::new(11, 0.0, 1.1, 1.0)
            .with_v_init(1.0)
            .with_coupling(StageCoupling::Textbook);
        let result = rk4(&system, &config).unwrap();
        let scalar = crate::scalar::rk4(&|_t: f64, y: f64| y, &config).unwrap();
        assert_eq!(result.y, scalar.y);
        assert_abs_diff_eq!(result.v[10], (-1.0_f64).exp(), epsilon = 1e-6);
    }

    #[test]
    fn test_textbook_conserves_oscillator_energy() {
        let config = IntegrationConfig::new(1001, 0.0, 10.01, 1.0)
            .with_v_init(0.0)
            .with_coupling(StageCoupling::Textbook);
        let result = rk4(&oscillator(), &config).unwrap();
        let (t, y, v) = result.last().unwrap();
        assert_abs_diff_eq!(t, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(y, t.cos(), epsilon = 1e-6);
        assert_abs_diff_eq!(v, -t.sin(), epsilon = 1e-6);
    }
}
