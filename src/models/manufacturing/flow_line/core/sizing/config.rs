use twine_solvers::equation::bisection;
use uom::si::{f64::Time, time::second};

/// Solver configuration for delivery-target sizing.
#[derive(Debug, Clone, Copy)]
pub struct SizingConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the process-time search variable.
    pub process_time_tol: Time,

    /// Absolute tolerance for the delivery-time residual (achieved - target).
    pub delivery_time_tol: Time,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            process_time_tol: Time::new::<second>(1e-12),
            delivery_time_tol: Time::new::<second>(1e-12),
        }
    }
}

impl SizingConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.process_time_tol.get::<second>(),
            x_rel_tol: 0.0,
            residual_tol: self.delivery_time_tol.get::<second>(),
        }
    }
}
