//! Empirical rate/pressure relations for saturated inflow.
//!
//! All pressures in psi, rates in stb/day. `qmax = PI·pres/1.8` is the
//! absolute open flow shared by both models. Physically invalid inversions
//! (radicand below zero) return NaN rather than erroring, so vectorized
//! callers keep their array shape.

/// Vogel rate for a given bottomhole pressure.
pub fn vogel_rate(pi: f64, pres: f64, pwf: f64) -> f64 {
    let qmax = pi * pres / 1.8;
    let x = pwf / pres;
    qmax * (1.0 - 0.2 * x - 0.8 * x * x)
}

/// Vogel bottomhole pressure for a given rate; NaN when the rate exceeds
/// what the curve allows.
pub fn vogel_pwf(pi: f64, pres: f64, rate: f64) -> f64 {
    let qmax = pi * pres / 1.8;
    let radicand = 81.0 - 80.0 * (rate / qmax);
    if radicand < 0.0 {
        return f64::NAN;
    }
    0.125 * pres * (radicand.sqrt() - 1.0)
}

/// Fetkovich rate for a given bottomhole pressure.
pub fn fetkovich_rate(pi: f64, pres: f64, pwf: f64, n: f64) -> f64 {
    let qmax = pi * pres / 1.8;
    let x = pwf / pres;
    qmax * (1.0 - x * x).powf(n)
}

/// Fetkovich bottomhole pressure for a given rate; NaN when the rate
/// exceeds what the curve allows.
pub fn fetkovich_pwf(pi: f64, pres: f64, rate: f64, n: f64) -> f64 {
    let qmax = pi * pres / 1.8;
    let radicand = 1.0 - (rate / qmax).powf(1.0 / n);
    if radicand < 0.0 {
        return f64::NAN;
    }
    pres * radicand.sqrt()
}
