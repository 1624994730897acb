//! Pressure solution container.

use nalgebra::{DMatrix, DVector};
use pf_core::Advisory;
use pf_core::units::constants::{DAY_S, FT_M, PSI_PA};

/// The pressure field produced by one `solve` call.
///
/// Stored in SI (seconds, meters, Pascals), exposed in field units (days,
/// feet, psi). The field has one row per node and one column per time.
/// Entries at times outside the regime's validity window are NaN; the
/// advisories say which bound was violated.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSolution {
    times_s: DVector<f64>,
    nodes_m: DVector<f64>,
    press_pa: DMatrix<f64>,
    advisories: Vec<Advisory>,
}

impl PressureSolution {
    pub(crate) fn new(
        times_s: DVector<f64>,
        nodes_m: DVector<f64>,
        press_pa: DMatrix<f64>,
        advisories: Vec<Advisory>,
    ) -> Self {
        debug_assert_eq!(press_pa.shape(), (nodes_m.len(), times_s.len()));
        Self {
            times_s,
            nodes_m,
            press_pa,
            advisories,
        }
    }

    /// Time axis in days.
    pub fn times(&self) -> DVector<f64> {
        self.times_s.map(|t| t / DAY_S)
    }

    /// Node axis in feet.
    pub fn nodes(&self) -> DVector<f64> {
        self.nodes_m.map(|r| r / FT_M)
    }

    /// Pressure field in psi, shape (node count × time count).
    pub fn press(&self) -> DMatrix<f64> {
        self.press_pa.map(|p| p / PSI_PA)
    }

    /// Time axis in seconds.
    pub fn times_si(&self) -> &DVector<f64> {
        &self.times_s
    }

    /// Node axis in meters.
    pub fn nodes_si(&self) -> &DVector<f64> {
        &self.nodes_m
    }

    /// Pressure field in Pascals.
    pub fn press_si(&self) -> &DMatrix<f64> {
        &self.press_pa
    }

    /// Advisories raised while producing this solution.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// (node count, time count).
    pub fn shape(&self) -> (usize, usize) {
        self.press_pa.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn unit_views_invert_storage() {
        let times_s = DVector::from_vec(vec![86_400.0, 172_800.0]);
        let nodes_m = DVector::from_vec(vec![0.3048]);
        let press_pa = DMatrix::from_row_slice(1, 2, &[PSI_PA, 2.0 * PSI_PA]);
        let sol = PressureSolution::new(times_s, nodes_m, press_pa, Vec::new());

        let tol = Tolerances::default();
        assert!(nearly_equal(sol.times()[0], 1.0, tol));
        assert!(nearly_equal(sol.times()[1], 2.0, tol));
        assert!(nearly_equal(sol.nodes()[0], 1.0, tol));
        assert!(nearly_equal(sol.press()[(0, 0)], 1.0, tol));
        assert!(nearly_equal(sol.press()[(0, 1)], 2.0, tol));
        assert_eq!(sol.shape(), (1, 2));
    }
}
