//! Explicit Euler step.

use crate::state::{Real, StateVector};
use crate::system::OdeSystem;

/// Advance `(t, x)` by one explicit Euler step of size `h`:
///
/// x' = x + h * F(t, x),  t' = t + h
///
/// Errors raised by `sys` are returned as-is.
pub fn euler<R, S, F>(t: R, x: &S, h: R, sys: &F) -> Result<(R, S), F::Error>
where
    R: Real,
    S: StateVector<R>,
    F: OdeSystem<R, S>,
{
    let dxdt = sys.rhs(t, x)?;
    Ok((t + h, x.add_scaled(h, &dxdt)))
}
