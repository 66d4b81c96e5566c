//! Step-size control shared by the adaptive Fehlberg steppers.
//!
//! Both embedded pairs use the same controller: the scalar error estimate `E`
//! of an attempt with step `h` is compared against `tolerance * h`, and the
//! next step size is scaled by
//!
//! S = 0.84 * (tolerance * h / E)^(1/4)
//!
//! A rejected attempt scales `h` by `S` clamped to `[0.1, 4.0]`, then clamps
//! the step itself into `[min_step, max_step]`. Falling below `min_step` is
//! reported to the caller as [`IntegrationError::StepSizeUnderflow`].

use crate::state::Real;

/// Error-control configuration for an adaptive step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegrationParameters<R> {
    /// Maximum local truncation error per unit step
    pub tolerance: R,
    /// Step size floor
    pub min_step: R,
    /// Step size ceiling
    pub max_step: R,
}

impl<R: Real> IntegrationParameters<R> {
    /// Create parameters from a tolerance and step-size bounds.
    pub fn new(tolerance: R, min_step: R, max_step: R) -> Self {
        Self {
            tolerance,
            min_step,
            max_step,
        }
    }

    /// Check that the parameters describe a reachable configuration.
    ///
    /// `tolerance` and `min_step` must be positive and finite, and `max_step`
    /// must not be smaller than `min_step`. `max_step` may be infinite.
    pub fn validate<E>(&self) -> Result<(), IntegrationError<R, E>> {
        if !self.tolerance.is_finite() || self.tolerance <= R::zero() {
            return Err(IntegrationError::InvalidParameters {
                message: format!("tolerance must be positive and finite, got {}", self.tolerance),
            });
        }
        if !self.min_step.is_finite() || self.min_step <= R::zero() {
            return Err(IntegrationError::InvalidParameters {
                message: format!("min_step must be positive and finite, got {}", self.min_step),
            });
        }
        if self.max_step.is_nan() || self.max_step < self.min_step {
            return Err(IntegrationError::InvalidParameters {
                message: format!(
                    "max_step ({}) must not be smaller than min_step ({})",
                    self.max_step, self.min_step
                ),
            });
        }
        Ok(())
    }

    /// Clamp `h` into `[min_step, max_step]`.
    pub fn clamp_step(&self, h: R) -> R {
        h.max(self.min_step).min(self.max_step)
    }
}

/// Fehlberg step-size controller
///
/// S = safety * (tolerance * h / E)^exponent
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepController<R> {
    /// Safety factor
    pub safety: R,
    /// Exponent applied to the tolerance ratio
    pub exponent: R,
    /// Smallest factor applied after a rejection
    pub min_factor: R,
    /// Largest factor applied after a rejection
    pub max_factor: R,
}

impl<R: Real> Default for StepController<R> {
    fn default() -> Self {
        Self {
            safety: R::lit(0.84),
            exponent: R::lit(0.25),
            min_factor: R::lit(0.1),
            max_factor: R::lit(4.0),
        }
    }
}

impl<R: Real> StepController<R> {
    /// Unclamped scale factor S for an attempt of size `h` with estimate `error`.
    ///
    /// Only meaningful for `error > 0`; a zero estimate is handled by the
    /// steppers before the controller is consulted.
    pub fn scale_factor(&self, tolerance: R, h: R, error: R) -> R {
        self.safety * (tolerance * h / error).powf(self.exponent)
    }

    /// Check that a rejection always shrinks the step.
    ///
    /// Requires `0 < safety < 1`, `exponent > 0`, `0 < min_factor < 1` and
    /// `max_factor >= 1`. A rejected attempt has `tolerance * h / E <= 1`, so
    /// `S <= safety` and the retry factor stays below one; the retry loop then
    /// ends either in an accepted attempt or in a step size underflow.
    pub fn validate<E>(&self) -> Result<(), IntegrationError<R, E>> {
        let one = R::one();
        let checks = [
            (
                self.safety.is_finite() && self.safety > R::zero() && self.safety < one,
                "safety must lie in (0, 1)",
            ),
            (
                self.exponent.is_finite() && self.exponent > R::zero(),
                "exponent must be positive and finite",
            ),
            (
                self.min_factor > R::zero() && self.min_factor < one,
                "min_factor must lie in (0, 1)",
            ),
            (
                !self.max_factor.is_nan() && self.max_factor >= one,
                "max_factor must be at least 1",
            ),
        ];
        for (ok, requirement) in checks {
            if !ok {
                return Err(IntegrationError::InvalidParameters {
                    message: format!("{requirement}, got {self:?}"),
                });
            }
        }
        Ok(())
    }

    /// Factor applied to `h` after a rejection: `min_factor` if
    /// `S <= min_factor`, `max_factor` if `S >= max_factor`, else `S`.
    pub fn rejection_factor(&self, scale: R) -> R {
        if scale <= self.min_factor {
            self.min_factor
        } else if scale >= self.max_factor {
            self.max_factor
        } else {
            scale
        }
    }
}

/// Outcome of one accepted adaptive step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult<R, S> {
    /// New time value
    pub t: R,
    /// New state
    pub x: S,
    /// Step size to pass to the next call
    pub h_next: R,
    /// Error estimate of the accepted attempt
    pub error: R,
}

/// Integration statistics for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Total number of derivative evaluations
    pub fn_evals: u64,
    /// Number of accepted attempts
    pub accepted_steps: u64,
    /// Number of rejected attempts
    pub rejected_steps: u64,
}

/// Errors that can occur during an adaptive step
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrationError<R, E> {
    /// The tolerance cannot be met without shrinking the step below `min_step`
    #[error("step size {h} fell below the minimum {min_step} at t = {t}")]
    StepSizeUnderflow {
        /// Time of the rejected attempt
        t: R,
        /// Step size the controller asked for
        h: R,
        /// Configured floor
        min_step: R,
    },
    /// The derivative function failed
    #[error("derivative evaluation failed")]
    Derivative(#[source] E),
    /// The error estimate was NaN or infinite
    #[error("non-finite error estimate for step {h} at t = {t}")]
    NonFiniteErrorEstimate {
        /// Time of the attempt
        t: R,
        /// Step size of the attempt
        h: R,
    },
    /// Invalid integration parameters
    #[error("invalid integration parameters: {message}")]
    InvalidParameters {
        /// Description of the invalid parameter
        message: String,
    },
    /// Step size was zero, negative or not finite
    #[error("step size must be positive and finite, got {h}")]
    InvalidStepSize {
        /// Offending step size
        h: R,
    },
}

/// What to do after an attempt has been scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Decision<R> {
    /// Keep the attempt and continue with `h_next`.
    Accept { h_next: R },
    /// Discard the attempt and retry with `h`.
    Retry { h: R },
}

/// Accept/reject an attempt of size `h` at time `t` with estimate `error`.
pub(crate) fn decide<R: Real, E>(
    params: &IntegrationParameters<R>,
    controller: &StepController<R>,
    t: R,
    h: R,
    error: R,
) -> Result<Decision<R>, IntegrationError<R, E>> {
    if !error.is_finite() {
        return Err(IntegrationError::NonFiniteErrorEstimate { t, h });
    }
    if error == R::zero() {
        return Ok(Decision::Accept {
            h_next: params.clamp_step(h),
        });
    }

    let scale = controller.scale_factor(params.tolerance, h, error);
    if error < params.tolerance * h {
        return Ok(Decision::Accept {
            h_next: params.clamp_step(scale * h),
        });
    }

    let h_new = controller.rejection_factor(scale) * h;
    tracing::trace!("rejected step at t = {t}: h = {h}, error = {error}, retrying with h = {h_new}");
    if h_new > params.max_step {
        Ok(Decision::Retry { h: params.max_step })
    } else if h_new < params.min_step {
        tracing::debug!(
            "step size underflow at t = {t}: h = {h_new} < min_step = {}",
            params.min_step
        );
        Err(IntegrationError::StepSizeUnderflow {
            t,
            h: h_new,
            min_step: params.min_step,
        })
    } else {
        Ok(Decision::Retry { h: h_new })
    }
}

/// Shared input checks for both adaptive steppers.
pub(crate) fn check_inputs<R: Real, E>(
    params: &IntegrationParameters<R>,
    controller: &StepController<R>,
    h: R,
) -> Result<R, IntegrationError<R, E>> {
    params.validate::<E>()?;
    controller.validate::<E>()?;
    if !h.is_finite() || h <= R::zero() {
        return Err(IntegrationError::InvalidStepSize { h });
    }
    Ok(params.clamp_step(h))
}
