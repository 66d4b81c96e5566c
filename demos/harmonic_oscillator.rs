//! Adaptive stepping on a harmonic oscillator.
//!
//! Integrates y'' + ω²y = 0 for one period with both Fehlberg pairs and
//! compares against the exact solution.
//!
//! Run with:
//!   cargo run --example harmonic_oscillator

use odestep::{rk4, IntegrationParameters, OdeSystem, Rkf45, Rkf78, Stats, StepResult};

/// Simple harmonic oscillator: y'' + ω²y = 0
///
/// State vector: [y, y']
struct HarmonicOscillator {
    omega: f64,
}

impl OdeSystem<f64, [f64; 2]> for HarmonicOscillator {
    type Error = std::convert::Infallible;

    fn rhs(&self, _t: f64, y: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        Ok([y[1], -self.omega * self.omega * y[0]])
    }
}

/// Step adaptively towards `t_end` while at least `min_step` remains, then
/// close the gap with one RK4 step so the result lands on `t_end`.
fn propagate<E>(
    sys: &HarmonicOscillator,
    mut step: impl FnMut(f64, &[f64; 2], f64) -> Result<StepResult<f64, [f64; 2]>, E>,
    y0: [f64; 2],
    t_end: f64,
    h0: f64,
    min_step: f64,
) -> Result<[f64; 2], E> {
    let (mut t, mut y, mut h) = (0.0, y0, h0);
    while t_end - t >= min_step {
        let result = step(t, &y, h.min(t_end - t))?;
        (t, y, h) = (result.t, result.x, result.h_next);
    }
    if t < t_end {
        match rk4(t, &y, t_end - t, sys) {
            Ok((_, y_end)) => y = y_end,
            Err(never) => match never {},
        }
    }
    Ok(y)
}

fn report(name: &str, y: [f64; 2], exact: [f64; 2], stats: &Stats) {
    println!("  {name}");
    println!("    y(T)  = {:.15}   (exact: {:.15})", y[0], exact[0]);
    println!("    y'(T) = {:.15}   (exact: {:.15})", y[1], exact[1]);
    println!("    Position error: {:.2e}", (y[0] - exact[0]).abs());
    println!("    Velocity error: {:.2e}", (y[1] - exact[1]).abs());
    println!(
        "    Accepted: {}  Rejected: {}  Function evals: {}",
        stats.accepted_steps, stats.rejected_steps, stats.fn_evals
    );
}

fn main() {
    let omega = 2.0;
    let sys = HarmonicOscillator { omega };

    // One full period: T = 2π/ω
    let period = 2.0 * std::f64::consts::PI / omega;
    let y0 = [1.0, 0.0]; // y(0) = 1, y'(0) = 0
    let params = IntegrationParameters::new(1e-10, 1e-9, 0.5);

    // Exact solution: y(t) = cos(ωt), y'(t) = -ω sin(ωt)
    let exact = [(omega * period).cos(), -omega * (omega * period).sin()];

    println!("Harmonic Oscillator (ω = {omega})");
    println!("  Period:    {period:.6} s");
    println!("  Tolerance: {:.0e}", params.tolerance);
    println!();

    let mut rkf45 = Rkf45::new(params);
    let y = propagate(
        &sys,
        |t, y, h| rkf45.step(&sys, t, y, h),
        y0,
        period,
        0.01,
        params.min_step,
    )
    .unwrap();
    report("RKF45", y, exact, &rkf45.stats);

    let mut rkf78 = Rkf78::new(params);
    let y = propagate(
        &sys,
        |t, y, h| rkf78.step(&sys, t, y, h),
        y0,
        period,
        0.01,
        params.min_step,
    )
    .unwrap();
    report("RKF78", y, exact, &rkf78.stats);
}
