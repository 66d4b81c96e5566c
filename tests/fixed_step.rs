//! Fixed-step Euler and RK4 behaviour

use std::cell::RefCell;

use approx::assert_abs_diff_eq;
use odestep::{euler, rk4, OdeSystem};

fn zero_dynamics(_t: f64, _x: &Vec<f64>) -> Vec<f64> {
    vec![0.0; 3]
}

#[test]
fn test_zero_dynamics_leave_state_unchanged() {
    let x0 = vec![1.2, 2.3, -3.6];

    let (t, x) = euler(1.0, &x0, 0.1, &zero_dynamics).unwrap();
    assert_eq!(t, 1.0 + 0.1);
    assert_eq!(x, x0);

    let (t, x) = rk4(1.0, &x0, 0.1, &zero_dynamics).unwrap();
    assert_eq!(t, 1.0 + 0.1);
    assert_eq!(x, x0);
}

#[test]
fn test_repeated_calls_are_identical() {
    let sys = |t: f64, x: &[f64; 2]| [x[1], -x[0] + t.sin()];
    let x0 = [0.3, -1.1];

    assert_eq!(
        euler(0.7, &x0, 0.05, &sys).unwrap(),
        euler(0.7, &x0, 0.05, &sys).unwrap()
    );
    assert_eq!(
        rk4(0.7, &x0, 0.05, &sys).unwrap(),
        rk4(0.7, &x0, 0.05, &sys).unwrap()
    );
}

#[test]
fn test_rk4_stage_times() {
    let times = RefCell::new(Vec::new());
    let sys = |t: f64, x: &[f64; 1]| {
        times.borrow_mut().push(t);
        *x
    };

    rk4(1.0, &[1.0], 0.5, &sys).unwrap();
    assert_eq!(times.take(), vec![1.0, 1.25, 1.25, 1.5]);

    euler(1.0, &[1.0], 0.5, &sys).unwrap();
    assert_eq!(times.take(), vec![1.0]);
}

#[test]
fn test_negative_step_integrates_backwards() {
    let sys = |_t: f64, x: &[f64; 1]| *x;
    let (t, x) = rk4(1.0_f64, &[1.0_f64.exp()], -0.1, &sys).unwrap();
    assert_abs_diff_eq!(t, 0.9, epsilon = 1e-15);
    assert_abs_diff_eq!(x[0], 0.9_f64.exp(), epsilon = 1e-6);
}

#[test]
fn test_rk4_converges_at_fourth_order() {
    // Halving h on x' = x over [0, 1] shrinks the global error by about 16
    let sys = |_t: f64, x: &[f64; 1]| *x;
    let global_error = |n: u32| {
        let h = 1.0 / f64::from(n);
        let (mut t, mut x) = (0.0_f64, [1.0_f64]);
        for _ in 0..n {
            (t, x) = rk4(t, &x, h, &sys).unwrap();
        }
        (x[0] - 1.0_f64.exp()).abs()
    };

    let ratio = global_error(10) / global_error(20);
    assert!(ratio > 14.0 && ratio < 18.0, "ratio {ratio}");
}

#[derive(Debug, PartialEq)]
enum RhsError {
    OutOfDomain(f64),
}

struct SquareRoot;

impl OdeSystem<f64, [f64; 1]> for SquareRoot {
    type Error = RhsError;

    fn rhs(&self, _t: f64, x: &[f64; 1]) -> Result<[f64; 1], RhsError> {
        if x[0] < 0.0 {
            Err(RhsError::OutOfDomain(x[0]))
        } else {
            Ok([-x[0].sqrt()])
        }
    }
}

#[test]
fn test_derivative_error_returned_unchanged() {
    assert_eq!(
        euler(0.0, &[-1.0], 0.1, &SquareRoot),
        Err(RhsError::OutOfDomain(-1.0))
    );

    // x = 1, h = 4: stage 2 evaluates at x + h/2 * k1 = 1 - 2 = -1
    assert_eq!(
        rk4(0.0, &[1.0], 4.0, &SquareRoot),
        Err(RhsError::OutOfDomain(-1.0))
    );

    let (_, x) = rk4(0.0, &[1.0], 0.1, &SquareRoot).unwrap();
    // x = (1 - t/2)^2
    assert_abs_diff_eq!(x[0], 0.95_f64.powi(2), epsilon = 1e-7);
}
