//! Time-domain validity screening shared by the regime solvers.

use nalgebra::DVector;
use pf_core::Advisory;

/// Valid time window of a flow regime, in seconds. `tmax_s` is `None` for
/// regimes with no late bound (pseudo-steady holds for all later times).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimeWindow {
    pub tmin_s: f64,
    pub tmax_s: Option<f64>,
}

impl TimeWindow {
    /// Replace out-of-window entries with NaN, preserving array shape.
    ///
    /// Each violated bound raises one batched advisory per call, no matter
    /// how many entries fail it. NaN input passes through as NaN without
    /// counting against either bound.
    pub(crate) fn screen(&self, times_s: &[f64], advisories: &mut Vec<Advisory>) -> DVector<f64> {
        let mut early = 0usize;
        let mut late = 0usize;

        let out = DVector::from_iterator(
            times_s.len(),
            times_s.iter().map(|&t| {
                if t.is_nan() {
                    return f64::NAN;
                }
                let ok_lo = t >= self.tmin_s;
                let ok_hi = self.tmax_s.is_none_or(|tmax| t <= tmax);
                if !ok_lo {
                    early += 1;
                }
                if !ok_hi {
                    late += 1;
                }
                if ok_lo && ok_hi { t } else { f64::NAN }
            }),
        );

        if early > 0 {
            Advisory::EarlyTimes { count: early }.raise(advisories);
        }
        if late > 0 {
            Advisory::LateTimes { count: late }.raise(advisories);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_window_passes_through() {
        let window = TimeWindow {
            tmin_s: 1.0,
            tmax_s: Some(10.0),
        };
        let mut adv = Vec::new();
        let out = window.screen(&[1.0, 5.0, 10.0], &mut adv);
        assert_eq!(out.as_slice(), &[1.0, 5.0, 10.0]);
        assert!(adv.is_empty());
    }

    #[test]
    fn violations_become_nan_with_batched_advisories() {
        let window = TimeWindow {
            tmin_s: 1.0,
            tmax_s: Some(10.0),
        };
        let mut adv = Vec::new();
        let out = window.screen(&[0.1, 0.5, 5.0, 20.0], &mut adv);

        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_eq!(out[2], 5.0);
        assert!(out[3].is_nan());
        // One advisory per violated bound, not per entry.
        assert_eq!(
            adv,
            vec![
                Advisory::EarlyTimes { count: 2 },
                Advisory::LateTimes { count: 1 }
            ]
        );
    }

    #[test]
    fn nan_input_passes_through_uncounted() {
        let window = TimeWindow {
            tmin_s: 1.0,
            tmax_s: Some(10.0),
        };
        let mut adv = Vec::new();
        let out = window.screen(&[f64::NAN, 5.0, 0.5], &mut adv);

        assert!(out[0].is_nan());
        assert_eq!(out[1], 5.0);
        assert!(out[2].is_nan());
        // The NaN entry is not an early or late time.
        assert_eq!(adv, vec![Advisory::EarlyTimes { count: 1 }]);
    }

    #[test]
    fn no_late_bound() {
        let window = TimeWindow {
            tmin_s: 2.0,
            tmax_s: None,
        };
        let mut adv = Vec::new();
        let out = window.screen(&[1.0, 1e12], &mut adv);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 1e12);
        assert_eq!(adv, vec![Advisory::EarlyTimes { count: 1 }]);
    }
}
