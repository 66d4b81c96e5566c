//! Runge-Kutta-Fehlberg 7(8) adaptive step
//!
//! A 13-stage embedded RK7(8) pair. The 8th-order solution advances the
//! state and the 7th/8th-order difference estimates the local error.
//!
//! Reference: NASA TR R-287, Erwin Fehlberg, 1968

use crate::coefficients::rkf78::{A, B8, B_ERR, C, STAGES};
use crate::solver::{
    check_inputs, decide, Decision, IntegrationError, IntegrationParameters, Stats, StepController,
    StepResult,
};
use crate::state::{combine, weighted_sum, Real, StateVector};
use crate::system::OdeSystem;

/// Runge-Kutta-Fehlberg 7(8) stepper
///
/// Uses the same controller and clamping rules as [`crate::Rkf45`]; only the
/// tableau differs.
///
/// # Example
/// ```
/// use odestep::{IntegrationParameters, Rkf78};
///
/// struct HarmonicOscillator { omega: f64 }
///
/// impl odestep::OdeSystem<f64, [f64; 2]> for HarmonicOscillator {
///     type Error = std::convert::Infallible;
///
///     fn rhs(&self, _t: f64, y: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
///         Ok([y[1], -self.omega * self.omega * y[0]])
///     }
/// }
///
/// let sys = HarmonicOscillator { omega: 1.0 };
/// let mut stepper = Rkf78::new(IntegrationParameters::new(1e-12, 1e-6, 0.5));
///
/// let step = stepper.step(&sys, 0.0, &[1.0, 0.0], 0.1).unwrap();
/// assert!((step.x[0] - step.t.cos()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Rkf78<R: Real> {
    /// Tolerance and step-size bounds
    pub params: IntegrationParameters<R>,
    /// Step-size controller
    pub controller: StepController<R>,
    /// Integration statistics
    pub stats: Stats,
}

impl<R: Real> Rkf78<R> {
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
    /// Each attempt computes all 13 stages, forms the 8th-order solution and
    /// the truncation error estimate, and is either accepted or retried with
    /// a smaller step. Errors and the clamping of the incoming `h` into
    /// `[min_step, max_step]` are the same as for [`crate::Rkf45::step`].
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
            let error = self.compute_error(&k);

            match decide::<R, F::Error>(&self.params, &self.controller, t, h, error)? {
                Decision::Accept { h_next } => {
                    self.stats.accepted_steps += 1;
                    return Ok(StepResult {
                        t: t + h,
                        x: combine::<R, S>(x, &B8, &k),
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

    /// Compute all 13 stage increments k_i = h * F(t + c_i h, x + Σ a_ij k_j)
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

        // Stage 0: k[0] = h * f(t, x)
        let dxdt = sys
            .rhs(t, x)
            .map_err(IntegrationError::<R, F::Error>::Derivative)?;
        self.stats.fn_evals += 1;
        k.push(dxdt.scaled(h));

        // Stages 1-12
        for i in 1..STAGES {
            let x_stage = combine::<R, S>(x, &A[i], &k);
            let dxdt = sys
                .rhs(t + R::lit(C[i]) * h, &x_stage)
                .map_err(IntegrationError::<R, F::Error>::Derivative)?;
            self.stats.fn_evals += 1;
            k.push(dxdt.scaled(h));
        }

        Ok(k)
    }

    /// Infinity norm of (41/840) * (k_0 + k_10 - k_11 - k_12)
    fn compute_error<S: StateVector<R>>(&self, k: &[S]) -> R {
        weighted_sum::<R, S>(&B_ERR, &k).max_abs()
    }
}

/// Take one RKF78 step with the standard Fehlberg controller.
///
/// Shorthand for `Rkf78::new(*params).step(sys, t, x, h)`.
pub fn rkf78<R, S, F>(
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
    Rkf78::new(*params).step(sys, t, x, h)
}
