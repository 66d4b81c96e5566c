//! Butcher tableaux for the fixed and embedded Runge-Kutta schemes.
//!
//! Every coefficient is written as the exact rational from the reference
//! tables. The embedded pairs rely on these values for error cancellation, so
//! they are kept here rather than inlined at the call sites.

/// Classical 4th-order Runge-Kutta.
pub mod rk4 {
    /// Number of stages
    pub const STAGES: usize = 4;

    /// Nodes c_i
    pub const C: [f64; STAGES] = [0.0, 0.5, 0.5, 1.0];

    /// Weights b_i
    pub const B: [f64; STAGES] = [1.0 / 6.0, 2.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0];
}

/// Runge-Kutta-Fehlberg 4(5).
///
/// From Burden & Faires, Numerical Analysis (9th ed.), Algorithm 5.3.
pub mod rkf45 {
    /// Number of stages
    pub const STAGES: usize = 6;

    /// Nodes c_i, as fractions of the step size
    pub const C: [f64; STAGES] = [0.0, 1.0 / 4.0, 3.0 / 8.0, 12.0 / 13.0, 1.0, 1.0 / 2.0];

    /// Runge-Kutta matrix, A[i][j] for j < i
    pub const A: [[f64; 5]; STAGES] = [
        [0.0; 5],
        [1.0 / 4.0, 0.0, 0.0, 0.0, 0.0],
        [3.0 / 32.0, 9.0 / 32.0, 0.0, 0.0, 0.0],
        [1932.0 / 2197.0, -7200.0 / 2197.0, 7296.0 / 2197.0, 0.0, 0.0],
        [439.0 / 216.0, -8.0, 3680.0 / 513.0, -845.0 / 4104.0, 0.0],
        [-8.0 / 27.0, 2.0, -3544.0 / 2565.0, 1859.0 / 4104.0, -11.0 / 40.0],
    ];

    /// 4th-order weights, used to advance the state
    pub const B4: [f64; STAGES] = [
        25.0 / 216.0,
        0.0,
        1408.0 / 2565.0,
        2197.0 / 4104.0,
        -1.0 / 5.0,
        0.0,
    ];

    /// 5th-order weights
    pub const B5: [f64; STAGES] = [
        16.0 / 135.0,
        0.0,
        6656.0 / 12825.0,
        28561.0 / 56430.0,
        -9.0 / 50.0,
        2.0 / 55.0,
    ];

    /// Error weights B5 - B4
    pub const B_ERR: [f64; STAGES] = [
        1.0 / 360.0,
        0.0,
        -128.0 / 4275.0,
        -2197.0 / 75240.0,
        1.0 / 50.0,
        2.0 / 55.0,
    ];
}

/// Runge-Kutta-Fehlberg 7(8).
///
/// Fehlberg, E. (1968). "Classical Fifth-, Sixth-, Seventh-, and
/// Eighth-Order Runge-Kutta Formulas with Stepsize Control"
/// NASA TR R-287, Table X, pages 64-65.
pub mod rkf78 {
    /// Number of stages
    pub const STAGES: usize = 13;

    /// Nodes c_i (α values)
    pub const C: [f64; STAGES] = [
        0.0,
        2.0 / 27.0,
        1.0 / 9.0,
        1.0 / 6.0,
        5.0 / 12.0,
        0.5,
        5.0 / 6.0,
        1.0 / 6.0,
        2.0 / 3.0,
        1.0 / 3.0,
        1.0,
        0.0,
        1.0,
    ];

    /// Runge-Kutta matrix (β values), A[i][j] for j < i
    pub const A: [[f64; 12]; STAGES] = [
        [0.0; 12],
        [2.0/27.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [1.0/36.0, 1.0/12.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [1.0/24.0, 0.0, 1.0/8.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [5.0/12.0, 0.0, -25.0/16.0, 25.0/16.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [1.0/20.0, 0.0, 0.0, 1.0/4.0, 1.0/5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [-25.0/108.0, 0.0, 0.0, 125.0/108.0, -65.0/27.0, 125.0/54.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [31.0/300.0, 0.0, 0.0, 0.0, 61.0/225.0, -2.0/9.0, 13.0/900.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [2.0, 0.0, 0.0, -53.0/6.0, 704.0/45.0, -107.0/9.0, 67.0/90.0, 3.0, 0.0, 0.0, 0.0, 0.0],
        [-91.0/108.0, 0.0, 0.0, 23.0/108.0, -976.0/135.0, 311.0/54.0, -19.0/60.0, 17.0/6.0, -1.0/12.0, 0.0, 0.0, 0.0],
        [2383.0/4100.0, 0.0, 0.0, -341.0/164.0, 4496.0/1025.0, -301.0/82.0, 2133.0/4100.0, 45.0/82.0, 45.0/164.0, 18.0/41.0, 0.0, 0.0],
        [3.0/205.0, 0.0, 0.0, 0.0, 0.0, -6.0/41.0, -3.0/205.0, -3.0/41.0, 3.0/41.0, 6.0/41.0, 0.0, 0.0],
        [-1777.0/4100.0, 0.0, 0.0, -341.0/164.0, 4496.0/1025.0, -289.0/82.0, 2193.0/4100.0, 51.0/82.0, 33.0/164.0, 12.0/41.0, 0.0, 1.0],
    ];

    /// 7th-order weights (upper row of c values)
    pub const B7: [f64; STAGES] = [
        41.0 / 840.0,
        0.0,
        0.0,
        0.0,
        0.0,
        34.0 / 105.0,
        9.0 / 35.0,
        9.0 / 35.0,
        9.0 / 280.0,
        9.0 / 280.0,
        41.0 / 840.0,
        0.0,
        0.0,
    ];

    /// 8th-order weights, used to advance the state.
    ///
    /// Stages 0 and 10 drop out; stages 11 and 12 take their place.
    pub const B8: [f64; STAGES] = [
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        34.0 / 105.0,
        9.0 / 35.0,
        9.0 / 35.0,
        9.0 / 280.0,
        9.0 / 280.0,
        0.0,
        41.0 / 840.0,
        41.0 / 840.0,
    ];

    /// Truncation error weights B7 - B8:
    /// TE = (41/840) * (k_0 + k_10 - k_11 - k_12)
    pub const B_ERR: [f64; STAGES] = [
        41.0 / 840.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        0.0,
        41.0 / 840.0,
        -41.0 / 840.0,
        -41.0 / 840.0,
    ];
}
