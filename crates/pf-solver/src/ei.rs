//! Exponential integral.
//!
//! The transient line-source solution needs Ei(x) for strictly negative
//! arguments, computed here through E1: Ei(−u) = −E1(u) for u > 0. E1 uses
//! the power series for small arguments and a modified-Lentz continued
//! fraction above 1, both well inside f64 accuracy for the argument range
//! the solver produces.

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// E1(x) for x ≥ 0. Returns +∞ at 0 and NaN for negative or NaN input.
pub fn e1(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }

    if x <= 1.0 {
        // E1(x) = -γ - ln x + Σ_{k≥1} (-1)^{k+1} x^k / (k·k!)
        let mut sum = 0.0;
        let mut term = 1.0;
        for k in 1..=40 {
            term *= -x / k as f64;
            let add = -term / k as f64;
            sum += add;
            if add.abs() < sum.abs() * f64::EPSILON {
                break;
            }
        }
        -EULER_GAMMA - x.ln() + sum
    } else {
        // Continued fraction E1(x) = e^{-x}/(x+1- 1/(x+3- 4/(x+5- ...))),
        // evaluated with the modified Lentz method.
        let mut b = x + 1.0;
        let mut c = 1.0 / f64::MIN_POSITIVE;
        let mut d = 1.0 / b;
        let mut h = d;
        for i in 1..=200 {
            let a = -((i * i) as f64);
            b += 2.0;
            d = 1.0 / (a * d + b);
            c = b + a / c;
            let del = c * d;
            h *= del;
            if (del - 1.0).abs() < 1e-15 {
                break;
            }
        }
        h * (-x).exp()
    }
}

/// Ei(x) for x ≤ 0 (the only range the line-source solution uses).
///
/// Returns −∞ at 0, NaN for positive or NaN input.
pub fn expi(x: f64) -> f64 {
    if x.is_nan() || x > 0.0 {
        return f64::NAN;
    }
    -e1(-x)
}
