//! Two-body Keplerian orbit: energy conservation check.
//!
//! Propagates a circular LEO orbit for one period with RKF78 and checks that
//! the spacecraft returns to the starting position with conserved energy.
//!
//! Run with:
//!   cargo run --example two_body_orbit

use odestep::{rk4, IntegrationParameters, OdeSystem, Rkf78};

/// Keplerian two-body problem: d²r/dt² = -μ r / |r|³
///
/// State vector: [x, y, z, vx, vy, vz]  (km, km/s)
struct TwoBody {
    mu: f64,
}

impl OdeSystem<f64, [f64; 6]> for TwoBody {
    type Error = std::convert::Infallible;

    fn rhs(&self, _t: f64, y: &[f64; 6]) -> Result<[f64; 6], Self::Error> {
        let r2 = y[0] * y[0] + y[1] * y[1] + y[2] * y[2];
        let mu_r3 = self.mu / (r2 * r2.sqrt());

        // dr/dt = v, dv/dt = -μ r / |r|³
        Ok([y[3], y[4], y[5], -mu_r3 * y[0], -mu_r3 * y[1], -mu_r3 * y[2]])
    }
}

fn energy(mu: f64, y: &[f64; 6]) -> f64 {
    let r = (y[0] * y[0] + y[1] * y[1] + y[2] * y[2]).sqrt();
    let v2 = y[3] * y[3] + y[4] * y[4] + y[5] * y[5];
    0.5 * v2 - mu / r
}

fn main() {
    let mu = 398600.4418; // Earth μ (km³/s²)
    let sys = TwoBody { mu };

    // Circular orbit at 400 km altitude
    let earth_radius = 6378.137; // km
    let r0: f64 = earth_radius + 400.0;
    let v0 = (mu / r0).sqrt(); // circular velocity

    let y0 = [r0, 0.0, 0.0, 0.0, v0, 0.0];

    // Orbital period: T = 2π √(a³/μ)
    let period = 2.0 * std::f64::consts::PI * (r0.powi(3) / mu).sqrt();

    let params = IntegrationParameters::new(1e-11, 1e-6, 300.0);
    let mut stepper = Rkf78::new(params);

    let e0 = energy(mu, &y0);
    let (mut t, mut y, mut h) = (0.0, y0, 10.0_f64);
    let mut h_largest = 0.0_f64;
    // A remainder below min_step would be clamped up and overshoot the period
    while period - t >= params.min_step {
        let step = stepper.step(&sys, t, &y, h.min(period - t)).unwrap();
        h_largest = h_largest.max(step.t - t);
        (t, y, h) = (step.t, step.x, step.h_next);
    }
    if t < period {
        (t, y) = rk4(t, &y, period - t, &sys).unwrap();
    }
    let ef = energy(mu, &y);

    let pos_err =
        ((y[0] - y0[0]).powi(2) + (y[1] - y0[1]).powi(2) + (y[2] - y0[2]).powi(2)).sqrt();

    println!("Two-Body Circular Orbit");
    println!("  Altitude:  400 km");
    println!("  Radius:    {r0:.3} km");
    println!("  Velocity:  {v0:.6} km/s");
    println!("  Period:    {:.1} s ({:.1} min)", period, period / 60.0);
    println!();
    println!("  Final time: {t:.6} s");
    println!("  Largest step: {h_largest:.1} s");
    println!("  Position error (return to start): {pos_err:.2e} km");
    println!(
        "  Energy drift: {:.2e}  (relative: {:.2e})",
        (ef - e0).abs(),
        ((ef - e0) / e0).abs()
    );
    println!();
    println!("  Accepted steps: {}", stepper.stats.accepted_steps);
    println!("  Rejected steps: {}", stepper.stats.rejected_steps);
    println!("  Function evals: {}", stepper.stats.fn_evals);
}
