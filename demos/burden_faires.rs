//! Euler, RK4 and RKF45 on the textbook problem dx/dt = x - t² + 1, x(0) = 0.5
//!
//! Prints the three methods side by side with the exact solution
//! x(t) = (t + 1)² - e^t / 2 on [0, 2].
//!
//! Run with:
//!   cargo run --example burden_faires

use odestep::{euler, rk4, IntegrationParameters, Rkf45};

fn burden_faires(t: f64, x: &[f64; 1]) -> [f64; 1] {
    [x[0] - t * t + 1.0]
}

fn exact(t: f64) -> f64 {
    (t + 1.0).powi(2) - 0.5 * t.exp()
}

fn main() {
    let h = 0.2;

    println!("Fixed step h = {h}");
    println!("  {:>4}  {:>10}  {:>10}  {:>10}", "t", "Euler", "RK4", "exact");
    let (mut t, mut x_euler, mut x_rk4) = (0.0_f64, [0.5], [0.5]);
    for _ in 0..10 {
        (_, x_euler) = euler(t, &x_euler, h, &burden_faires).unwrap();
        (t, x_rk4) = rk4(t, &x_rk4, h, &burden_faires).unwrap();
        println!(
            "  {t:>4.1}  {:>10.7}  {:>10.7}  {:>10.7}",
            x_euler[0],
            x_rk4[0],
            exact(t)
        );
    }

    let params = IntegrationParameters::new(1e-5, 0.01, 0.25);
    let mut stepper = Rkf45::new(params);

    println!();
    println!(
        "RKF45, tolerance {:.0e}, h in [{}, {}]",
        params.tolerance, params.min_step, params.max_step
    );
    println!("  {:>9}  {:>9}  {:>10}  {:>8}", "t", "h", "x", "error");
    let (mut t, mut x, mut h) = (0.0_f64, [0.5], 0.25_f64);
    // Stop before the remainder drops below min_step, which would be clamped up
    while 2.0 - t >= params.min_step {
        let step = stepper.step(&burden_faires, t, &x, h.min(2.0 - t)).unwrap();
        println!(
            "  {:>9.7}  {:>9.7}  {:>10.7}  {:>8.1e}",
            step.t,
            step.t - t,
            step.x[0],
            (step.x[0] - exact(step.t)).abs()
        );
        (t, x, h) = (step.t, step.x, step.h_next);
    }
    if t < 2.0 {
        let (t_end, x_end) = rk4(t, &x, 2.0 - t, &burden_faires).unwrap();
        println!("  {t_end:>9.7}  {:>9.7}  {:>10.7}  (rk4 remainder)", t_end - t, x_end[0]);
    }
    println!(
        "  {} accepted, {} rejected, {} evaluations",
        stepper.stats.accepted_steps, stepper.stats.rejected_steps, stepper.stats.fn_evals
    );
}
