//! Classical 4th-order Runge-Kutta step.

use crate::coefficients::rk4::{B, C};
use crate::state::{weighted_sum, Real, StateVector};
use crate::system::OdeSystem;

/// Advance `(t, x)` by one classical Runge-Kutta step of size `h`.
///
/// ```text
/// k1 = F(t, x)
/// k2 = F(t + h/2, x + h/2 * k1)
/// k3 = F(t + h/2, x + h/2 * k2)
/// k4 = F(t + h,   x + h   * k3)
/// x' = x + h/6 * (k1 + 2 k2 + 2 k3 + k4)
/// ```
///
/// The four evaluations happen in that order. Errors raised by `sys` are
/// returned as-is and abort the step.
pub fn rk4<R, S, F>(t: R, x: &S, h: R, sys: &F) -> Result<(R, S), F::Error>
where
    R: Real,
    S: StateVector<R>,
    F: OdeSystem<R, S>,
{
    let node = |i: usize| t + R::lit(C[i]) * h;

    let k1 = sys.rhs(t, x)?;
    let k2 = sys.rhs(node(1), &x.add_scaled(R::lit(C[1]) * h, &k1))?;
    let k3 = sys.rhs(node(2), &x.add_scaled(R::lit(C[2]) * h, &k2))?;
    let k4 = sys.rhs(node(3), &x.add_scaled(R::lit(C[3]) * h, &k3))?;

    let increment = weighted_sum::<R, S>(&B, &[k1, k2, k3, k4]);
    Ok((t + h, x.add_scaled(h, &increment)))
}
