//! Advisory conditions raised by derived-property access and solver runs.
//!
//! Advisories are values, not just log lines: a solve returns them alongside
//! the pressure field so callers and tests can inspect them deterministically.
//! Each advisory is also emitted through `tracing::warn!` when raised.

use core::fmt;

/// A non-fatal condition encountered while computing a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advisory {
    /// Some requested times precede the regime's valid time window.
    EarlyTimes { count: usize },
    /// Some requested times exceed the regime's valid time window.
    LateTimes { count: usize },
    /// Total compressibility was requested without both layer and fluid
    /// compressibility available; the derived value is left unset.
    MissingTotalCompressibility,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::EarlyTimes { count } => {
                write!(f, "{count} time value(s) do not satisfy the early time limit")
            }
            Advisory::LateTimes { count } => {
                write!(f, "{count} time value(s) do not satisfy the late time limit")
            }
            Advisory::MissingTotalCompressibility => {
                write!(f, "missing layer or fluid compressibility for total compressibility")
            }
        }
    }
}

impl Advisory {
    /// Record the advisory in the sink and mirror it to the log.
    pub fn raise(self, sink: &mut Vec<Advisory>) {
        tracing::warn!("{self}");
        sink.push(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_counts() {
        let a = Advisory::EarlyTimes { count: 3 };
        assert!(a.to_string().contains('3'));
    }

    #[test]
    fn raise_collects() {
        let mut sink = Vec::new();
        Advisory::MissingTotalCompressibility.raise(&mut sink);
        assert_eq!(sink, vec![Advisory::MissingTotalCompressibility]);
    }
}
