//! Runge-Kutta-Fehlberg 4(5) adaptive step
//!
//! Six stages shared by an embedded 4th/5th-order pair. The 4th-order solution
//! advances the state; the difference to the 5th-order solution is the local
//! error estimate driving step-size control.

use crate::coefficients::rkf45::{A, B4, B_ERR, C, STAGES};
use crate::solver::{
    check_inputs, decide, Decision, IntegrationError, IntegrationParameters, Stats, StepController,
    StepResult,
};
use crate::state::{combine, weighted_sum, Real, StateVector};
use crate::system::OdeSystem;

/// Runge-Kutta-Fehlberg 4(5) stepper
///
/// Holds the error-control configuration and evaluation statistics; the
/// time, state and step size stay with the caller.
///
/// # Example
/// ```
/// use odestep::{IntegrationParameters, Rkf45};
///
/// let mut stepper = Rkf45::new(IntegrationParameters::new(1e-5, 0.01, 0.25));
/// let sys = |t: f64, x: &[f64; 1]| [x[0] - t * t + 1.0];
///
/// let (mut t, mut x, mut h) = (0.0_f64, [0.5], 0.25);
/// for _ in 0..4 {
///     let step = stepper.step(&sys, t, &x, h).unwrap();
///     (t, x, h) = (step.t, step.x, step.h_next);
/// }
/// let exact = (t + 1.0).powi(2) - 0.5 * t.exp();
/// assert!((x[0] - exact).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct Rkf45<R: Real> {
    /// Tolerance and step-size bounds
    pub params: IntegrationParameters<R>,
    /// Step-size controller
    pub controller: StepController<R>,
    /// Integration statistics
    pub stats: Stats,
}

impl<R: Real> Rkf45<R> {
    /// Create a stepper with the standard Fehlberg controller.
    pub fn new(params: IntegrationParameters<R>) -> Self {
        Self::with_controller(params, StepController::default())
    }

    /// Create a stepper with a custom controller.
    pub fn with_controller(params: IntegrationParameters<R>, controller: StepController<R>) -> Self {
        Self {
            params,
            controller,
            stats: Stats::default(),
        }
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Take one adaptive step from `(t, x)` starting with step size `h`.
    ///
    /// Attempts are repeated with a smaller step until the error estimate is
    /// below `tolerance * h`. The returned [`StepResult::h_next`] is the size
    /// to use on the next call. `x` is never modified; on error the caller's
    /// state is exactly what it was.
    ///
    /// `h` is clamped into `[min_step, max_step]` before the first attempt. A
    /// final step shortened to land on an end time therefore overshoots it
    /// when less than `min_step` remains; finish such a remainder with a fixed
    /// step such as [`crate::rk4`].
    ///
    /// # Errors
    /// * [`IntegrationError::StepSizeUnderflow`] if the tolerance cannot be met
    ///   above `min_step`
    /// * [`IntegrationError::Derivative`] if `sys` fails
    /// * [`IntegrationError::NonFiniteErrorEstimate`],
    ///   [`IntegrationError::InvalidParameters`],
    ///   [`IntegrationError::InvalidStepSize`] for degenerate input
    pub fn step<S, F>(
        &mut self,
        sys: &F,
        t: R,
        x: &S,
        h: R,
    ) -> Result<StepResult<R, S>, IntegrationError<R, F::Error>>
    where
        S: StateVector<R>,
        F: OdeSystem<R, S>,
    {
        let mut h = check_inputs::<R, F::Error>(&self.params, &self.controller, h)?;

        loop {
            let k = self.compute_stages(sys, t, x, h)?;

            let error = weighted_sum::<R, S>(&B_ERR, &k).max_abs();

            match decide::<R, F::Error>(&self.params, &self.controller, t, h, error)? {
                Decision::Accept { h_next } => {
                    self.stats.accepted_steps += 1;
                    return Ok(StepResult {
                        t: t + h,
                        x: combine::<R, S>(x, &B4, &k),
                        h_next,
                        error,
                    });
                }
                Decision::Retry { h: retry } => {
                    self.stats.rejected_steps += 1;
                    h = retry;
                }
            }
        }
    }

    /// Compute the six stage increments k_i = h * F(t + c_i h, x + Σ a_ij k_j)
    fn compute_stages<S, F>(
        &mut self,
        sys: &F,
        t: R,
        x: &S,
        h: R,
    ) -> Result<Vec<S>, IntegrationError<R, F::Error>>
    where
        S: StateVector<R>,
        F: OdeSystem<R, S>,
    {
        let mut k: Vec<S> = Vec::with_capacity(STAGES);
        for i in 0..STAGES {
            let x_stage = combine::<R, S>(x, &A[i], &k);
            let dxdt = sys
                .rhs(t + R::lit(C[i]) * h, &x_stage)
                .map_err(IntegrationError::<R, F::Error>::Derivative)?;
            self.stats.fn_evals += 1;
            k.push(dxdt.scaled(h));
        }
        Ok(k)
    }
}

/// Take one RKF45 step with the standard Fehlberg controller.
///
/// Shorthand for `Rkf45::new(*params).step(sys, t, x, h)`.
pub fn rkf45<R, S, F>(
    t: R,
    x: &S,
    h: R,
    sys: &F,
    params: &IntegrationParameters<R>,
) -> Result<StepResult<R, S>, IntegrationError<R, F::Error>>
where
    R: Real,
    S: StateVector<R>,
    F: OdeSystem<R, S>,
{
    Rkf45::new(*params).step(sys, t, x, h)
}
