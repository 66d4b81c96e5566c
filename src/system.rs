//! Derivative-function capability.

use core::convert::Infallible;

/// System of ordinary differential equations: dx/dt = F(t, x)
///
/// Any `Fn(R, &S) -> S` is a system that cannot fail. Implement the trait on
/// your own type when evaluating the right-hand side can fail; the error is
/// handed back to the caller untouched.
///
/// The steppers assume `rhs` is free of observable side effects: it is called
/// several times per step at intermediate `(t, x)` points.
pub trait OdeSystem<R, S> {
    /// Failure raised by [`OdeSystem::rhs`].
    type Error;

    /// Evaluate the right-hand side of the ODE system
    ///
    /// The returned derivative must have as many components as `x`.
    ///
    /// # Arguments
    /// * `t` - Time
    /// * `x` - State vector
    fn rhs(&self, t: R, x: &S) -> Result<S, Self::Error>;
}

impl<R, S, F> OdeSystem<R, S> for F
where
    F: Fn(R, &S) -> S,
{
    type Error = Infallible;

    #[inline]
    fn rhs(&self, t: R, x: &S) -> Result<S, Infallible> {
        Ok(self(t, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fallible;

    impl OdeSystem<f64, [f64; 1]> for Fallible {
        type Error = &'static str;

        fn rhs(&self, t: f64, x: &[f64; 1]) -> Result<[f64; 1], Self::Error> {
            if t < 0.0 {
                Err("negative time")
            } else {
                Ok([2.0 * x[0]])
            }
        }
    }

    fn decay(_t: f64, x: &[f64; 1]) -> [f64; 1] {
        [-x[0]]
    }

    #[test]
    fn test_fn_item_is_system() {
        assert_eq!(decay.rhs(0.0, &[3.0]), Ok([-3.0]));
    }

    #[test]
    fn test_closure_is_system() {
        let k = 4.0;
        let sys = move |t: f64, x: &[f64; 1]| [k * x[0] + t];
        assert_eq!(sys.rhs(1.0, &[0.5]), Ok([3.0]));
    }

    #[test]
    fn test_user_type_error() {
        assert_eq!(Fallible.rhs(1.0, &[1.0]), Ok([2.0]));
        assert_eq!(Fallible.rhs(-1.0, &[1.0]), Err("negative time"));
    }
}
