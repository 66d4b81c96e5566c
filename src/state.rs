//! Scalar and state-vector algebra required by the steppers.
//!
//! The integrators only need a handful of operations on the state: component
//! access, length, element-wise addition and multiplication by a scalar. Any
//! container providing those through [`StateVector`] can be stepped.

use core::fmt::{Debug, Display};

/// Floating-point type used for time, step size and state components.
pub trait Real: num_traits::Float + Debug + Display + Send + Sync + 'static {
    /// Convert a tableau literal into this type.
    fn lit(value: f64) -> Self;
}

impl Real for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
}

impl Real for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

/// Fixed-length vector of [`Real`] components.
///
/// `scaled` is the scalar-times-vector product; since the scalar is applied to
/// every component it is commutative by construction.
///
/// Operands of `plus` and `add_scaled` always have the same length. The
/// `Vec<R>` and `DVector<R>` impls panic on a mismatch rather than truncate.
pub trait StateVector<R: Real>: Clone + PartialEq {
    /// Number of components.
    fn len(&self) -> usize;

    /// Component `index`, `0 <= index < len()`.
    fn component(&self, index: usize) -> R;

    /// Element-wise sum `self + other`.
    fn plus(&self, other: &Self) -> Self;

    /// Product `factor * self`.
    fn scaled(&self, factor: R) -> Self;

    /// Whether the vector has no components.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `self + factor * other`.
    ///
    /// Stage combinations are built from this, so containers with a cheaper
    /// fused form should override it.
    fn add_scaled(&self, factor: R, other: &Self) -> Self {
        self.plus(&other.scaled(factor))
    }

    /// Largest absolute component (infinity norm). Zero for an empty vector.
    fn max_abs(&self) -> R {
        (0..self.len()).fold(R::zero(), |acc, i| {
            let v = self.component(i).abs();
            // NaN must win so that a poisoned estimate is never mistaken for a small one
            if v.is_nan() || v > acc {
                v
            } else {
                acc
            }
        })
    }
}

impl<R: Real, const N: usize> StateVector<R> for [R; N] {
    fn len(&self) -> usize {
        N
    }

    fn component(&self, index: usize) -> R {
        self[index]
    }

    fn plus(&self, other: &Self) -> Self {
        core::array::from_fn(|i| self[i] + other[i])
    }

    fn scaled(&self, factor: R) -> Self {
        core::array::from_fn(|i| factor * self[i])
    }

    fn add_scaled(&self, factor: R, other: &Self) -> Self {
        core::array::from_fn(|i| self[i] + factor * other[i])
    }
}

impl<R: Real> StateVector<R> for Vec<R> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn component(&self, index: usize) -> R {
        self[index]
    }

    fn plus(&self, other: &Self) -> Self {
        assert_eq!(
            self.as_slice().len(),
            other.as_slice().len(),
            "state vectors must have the same length"
        );
        self.iter().zip(other).map(|(&a, &b)| a + b).collect()
    }

    fn scaled(&self, factor: R) -> Self {
        self.iter().map(|&a| factor * a).collect()
    }

    fn add_scaled(&self, factor: R, other: &Self) -> Self {
        assert_eq!(
            self.as_slice().len(),
            other.as_slice().len(),
            "state vectors must have the same length"
        );
        self.iter().zip(other).map(|(&a, &b)| a + factor * b).collect()
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_impls {
    use super::{Real, StateVector};
    use nalgebra::{DVector, SVector};

    impl<R: Real, const N: usize> StateVector<R> for SVector<R, N> {
        fn len(&self) -> usize {
            N
        }

        fn component(&self, index: usize) -> R {
            self[index]
        }

        fn plus(&self, other: &Self) -> Self {
            self.zip_map(other, |a, b| a + b)
        }

        fn scaled(&self, factor: R) -> Self {
            self.map(|a| factor * a)
        }

        fn add_scaled(&self, factor: R, other: &Self) -> Self {
            self.zip_map(other, |a, b| a + factor * b)
        }
    }

    impl<R: Real> StateVector<R> for DVector<R> {
        fn len(&self) -> usize {
            self.nrows()
        }

        fn component(&self, index: usize) -> R {
            self[index]
        }

        fn plus(&self, other: &Self) -> Self {
            self.zip_map(other, |a, b| a + b)
        }

        fn scaled(&self, factor: R) -> Self {
            self.map(|a| factor * a)
        }

        fn add_scaled(&self, factor: R, other: &Self) -> Self {
            self.zip_map(other, |a, b| a + factor * b)
        }
    }
}

/// `x + Σ weight_j · k_j`, accumulated left to right. Zero weights are skipped.
pub(crate) fn combine<R: Real, S: StateVector<R>>(x: &S, weights: &[f64], k: &[S]) -> S {
    weights
        .iter()
        .zip(k)
        .filter(|&(&w, _)| w != 0.0)
        .fold(x.clone(), |acc, (&w, k)| acc.add_scaled(R::lit(w), k))
}

/// `Σ weight_j · k_j`. The first weight must be nonzero.
pub(crate) fn weighted_sum<R: Real, S: StateVector<R>>(weights: &[f64], k: &[S]) -> S {
    combine(&k[0].scaled(R::lit(weights[0])), &weights[1..], &k[1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_algebra() {
        let a = [1.0_f64, -2.0, 3.0];
        let b = [0.5_f64, 0.5, -1.0];
        assert_eq!(a.plus(&b), [1.5, -1.5, 2.0]);
        assert_eq!(a.scaled(2.0), [2.0, -4.0, 6.0]);
        assert_eq!(a.add_scaled(2.0, &b), [2.0, -1.0, 1.0]);
        assert_eq!(StateVector::<f64>::len(&a), 3);
        assert_eq!(a.max_abs(), 3.0);
    }

    #[test]
    fn test_vec_algebra_matches_array() {
        let a = vec![1.2_f64, 2.3, -3.6];
        let b = vec![0.1_f64, -0.2, 0.3];
        let arr = [1.2_f64, 2.3, -3.6].add_scaled(0.5, &[0.1, -0.2, 0.3]);
        assert_eq!(a.add_scaled(0.5, &b), arr.to_vec());
        assert_eq!(a.plus(&b.scaled(0.5)), arr.to_vec());
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_vec_length_mismatch_panics() {
        let a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![1.0_f64, 2.0];
        let _ = a.add_scaled(0.5, &b);
    }

    #[test]
    fn test_max_abs_empty_is_zero() {
        let v: Vec<f64> = Vec::new();
        assert!(StateVector::<f64>::is_empty(&v));
        assert_eq!(v.max_abs(), 0.0);
    }

    #[test]
    fn test_max_abs_propagates_nan() {
        let v = [1.0, f64::NAN, 2.0];
        assert!(v.max_abs().is_nan());
    }

    #[test]
    fn test_combine_order() {
        let x = [1.0_f64];
        let k = [[2.0_f64], [4.0]];
        assert_eq!(combine(&x, &[0.5, 0.25], &k), [3.0]);
        assert_eq!(weighted_sum(&[0.5, -0.25], &k), [0.0]);
    }

    #[test]
    fn test_combine_skips_zero_weights() {
        // 0 * NaN would poison the sum if the stage were not skipped
        let x = [1.0_f64];
        let k = [[2.0_f64], [f64::NAN], [3.0]];
        assert_eq!(combine(&x, &[0.5, 0.0, 2.0], &k), [8.0]);
        assert_eq!(weighted_sum(&[1.0, 0.0, -1.0], &k), [-1.0]);
    }

    #[test]
    fn test_combine_uses_leading_weights_only() {
        // Stage rows are shorter than the weight rows while stages are built
        let k = [[1.0_f64]];
        assert_eq!(combine(&[0.0_f64], &[2.0, 5.0, 7.0], &k), [2.0]);
    }

    #[test]
    fn test_f32_literal() {
        assert_eq!(<f32 as Real>::lit(0.25), 0.25_f32);
    }
}
