//! # odestep: single-step ODE integrators
//!
//! One-step numerical integrators for ordinary differential equations
//! `dx/dt = F(t, x)`. The caller owns the integration loop; each call advances
//! the time and state by exactly one step.
//!
//! ## Steppers
//!
//! - [`euler`]: explicit Euler, one derivative evaluation
//! - [`rk4`]: classical 4th-order Runge-Kutta, four evaluations
//! - [`Rkf45`] / [`rkf45`]: adaptive Runge-Kutta-Fehlberg 4(5), six stages
//! - [`Rkf78`] / [`rkf78`]: adaptive Runge-Kutta-Fehlberg 7(8), thirteen stages
//!
//! The adaptive steppers retry internally with a smaller step until the local
//! error estimate meets the tolerance, and return the step size to use on the
//! next call.
//!
//! ## Basic Usage
//!
//! ```rust
//! use odestep::{rk4, rkf45, IntegrationParameters};
//!
//! // dx/dt = x - t^2 + 1, x(0) = 0.5
//! let sys = |t: f64, x: &[f64; 1]| [x[0] - t * t + 1.0];
//!
//! // Fixed step
//! let (t, x) = rk4(0.0, &[0.5], 0.2, &sys).unwrap();
//! assert!((x[0] - 0.8292933).abs() < 1e-7);
//!
//! // Adaptive step: feed `h_next` back in on the next call
//! let params = IntegrationParameters::new(1e-5, 0.01, 0.25);
//! let step = rkf45(t, &x, 0.25, &sys, &params).unwrap();
//! assert!(step.t > t);
//! assert!(step.h_next >= params.min_step && step.h_next <= params.max_step);
//! ```
//!
//! ## State vectors
//!
//! Anything implementing [`StateVector`] can be integrated. Implementations
//! are provided for `[R; N]`, `Vec<R>` and, with the `nalgebra` feature,
//! `nalgebra::SVector<R, N>` and `nalgebra::DVector<R>`. `R` is `f32` or `f64`.
//!
//! ## Derivative functions
//!
//! Closures and functions `Fn(R, &S) -> S` are [`OdeSystem`]s that cannot
//! fail. Implement [`OdeSystem`] directly to report failures; adaptive steppers
//! hand them back as [`IntegrationError::Derivative`], fixed steppers return
//! them unchanged.
//!
//! ## RKF78 update
//!
//! [`Rkf78`] advances the state with Fehlberg's 8th-order weights and uses
//! the 7th-order solution only for the error estimate.
//!
//! ## References
//!
//! 1. Fehlberg, E. (1968). "Classical Fifth-, Sixth-, Seventh-, and
//!    Eighth-Order Runge-Kutta Formulas with Stepsize Control".
//!    NASA TR R-287.
//!
//! 2. Fehlberg, E. (1969). "Low-Order Classical Runge-Kutta Formulas with
//!    Stepsize Control and their Application to some Heat Transfer
//!    Problems". NASA TR R-315.
//!
//! 3. Burden, R.L. & Faires, J.D. (2011). "Numerical Analysis", 9th ed.
//!    Brooks/Cole.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod coefficients;
pub mod euler;
pub mod rk4;
pub mod rkf45;
pub mod rkf78;
pub mod solver;
pub mod state;
pub mod system;

pub use euler::euler;
pub use rk4::rk4;
pub use rkf45::{rkf45, Rkf45};
pub use rkf78::{rkf78, Rkf78};
pub use solver::{IntegrationError, IntegrationParameters, Stats, StepController, StepResult};
pub use state::{Real, StateVector};
pub use system::OdeSystem;
