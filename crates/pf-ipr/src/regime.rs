//! Flow regime and saturated-model selection.

/// Flow regime for the productivity-index formulas. Closed set: transient
/// needs an elapsed time; steady and pseudo-steady are time-free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// Infinite-acting buildup after `time_days` of production.
    Transient { time_days: f64 },
    /// Constant-pressure outer boundary.
    Steady,
    /// Boundary-dominated depletion (the usual default).
    Pseudo,
}

/// Rate model for bottomhole pressures at or below the bubble point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SaturatedModel {
    /// Vogel's quadratic.
    Vogel,
    /// Fetkovich's power law with exponent `n`.
    Fetkovich { n: f64 },
}
