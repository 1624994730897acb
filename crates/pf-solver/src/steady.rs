//! Steady-state solution of the radial diffusivity equation.

use crate::common::{nodes_to_meters, pressure_term, times_to_seconds};
use crate::error::{SolverError, SolverResult};
use crate::solution::PressureSolution;
use nalgebra::{DMatrix, DVector};
use pf_core::units::constants::PSI_PA;
use pf_media::{Medium, RadialMedium, Well};

#[derive(Debug, Clone, Copy, PartialEq)]
struct SteadyConfig {
    pinit_pa: f64,
    drop_pa: f64,
}

/// Constant-rate solution for a constant-pressure outer boundary.
///
/// The reservoir is at a time-invariant boundary-dominated condition by
/// definition, so there is no validity window: the time axis is carried
/// through the solution for interface symmetry only.
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyState {
    geom: RadialMedium,
    medium: Medium,
    cfg: Option<SteadyConfig>,
}

impl SteadyState {
    /// Build from a size slice in feet (`[radius]` or `[radius, height]`)
    /// and the medium properties.
    pub fn new(size_ft: &[f64], medium: Medium) -> SolverResult<Self> {
        Ok(Self {
            geom: RadialMedium::new(size_ft)?,
            medium,
            cfg: None,
        })
    }

    pub fn geometry(&self) -> &RadialMedium {
        &self.geom
    }

    pub fn medium(&self) -> &Medium {
        &self.medium
    }

    /// Attach a well and initial pressure (psi). May be called again to
    /// reconfigure.
    pub fn configure(&mut self, well: Well, pinit_psi: f64) -> SolverResult<&mut Self> {
        if !pinit_psi.is_finite() || pinit_psi <= 0.0 {
            return Err(SolverError::InvalidArg {
                what: "initial pressure",
            });
        }

        let term_pa = pressure_term(&self.geom, &self.medium, &well)?;
        let ratio = self.geom.radius().value / well.radius.value;
        let drop_pa = term_pa * (ratio.ln() - 0.75 + well.skin);

        self.cfg = Some(SteadyConfig {
            pinit_pa: pinit_psi * PSI_PA,
            drop_pa,
        });
        Ok(self)
    }

    /// Solve for pressure at every (node, time) pair. The drawdown is
    /// uniform: identical at every requested time and node.
    pub fn solve(&self, times_days: &[f64], nodes_ft: &[f64]) -> SolverResult<PressureSolution> {
        let cfg = self.cfg.as_ref().ok_or(SolverError::NotConfigured)?;

        let times_s = DVector::from_vec(times_to_seconds(times_days));
        let nodes_m = nodes_to_meters(nodes_ft);

        let press_pa = DMatrix::from_element(
            nodes_m.len(),
            times_s.len(),
            cfg.pinit_pa - cfg.drop_pa,
        );

        Ok(PressureSolution::new(times_s, nodes_m, press_pa, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};
    use pf_media::{Fluid, Layer};

    fn medium() -> Medium {
        Medium::new()
            .with_layer(Layer::new(0.2, 100.0, 3e-6).unwrap())
            .with_fluid(Fluid::new(1.0, 1.2e-5, 1.2).unwrap())
    }

    fn configured() -> SteadyState {
        let mut solver = SteadyState::new(&[1000.0, 20.0], medium()).unwrap();
        solver
            .configure(Well::new(0.3, 0.0, 100.0).unwrap(), 3000.0)
            .unwrap();
        solver
    }

    #[test]
    fn solve_unconfigured_fails() {
        let solver = SteadyState::new(&[1000.0, 20.0], medium()).unwrap();
        assert!(matches!(
            solver.solve(&[1.0], &[1.0]),
            Err(SolverError::NotConfigured)
        ));
    }

    #[test]
    fn pressure_is_time_invariant() {
        let solver = configured();
        let sol = solver
            .solve(&[0.001, 1.0, 100.0, 1e6], &[1.0, 10.0, 500.0])
            .unwrap();
        let press = sol.press();

        assert_eq!(sol.shape(), (3, 4));
        for i in 0..3 {
            for j in 1..4 {
                assert_eq!(press[(i, j)], press[(i, 0)]);
            }
        }
        assert!(sol.advisories().is_empty());
    }

    #[test]
    fn drawdown_matches_log_formula() {
        let solver = configured();
        let sol = solver.solve(&[1.0], &[1.0]).unwrap();

        let term = crate::common::pressure_term(
            solver.geometry(),
            solver.medium(),
            &Well::new(0.3, 0.0, 100.0).unwrap(),
        )
        .unwrap();
        let expect_pa =
            3000.0 * PSI_PA - term * ((1000.0_f64 / 0.3).ln() - 0.75);
        assert!(nearly_equal(
            sol.press_si()[(0, 0)],
            expect_pa,
            Tolerances {
                abs: 1e-6,
                rel: 1e-9
            }
        ));
    }

    #[test]
    fn reconfigure_replaces_well() {
        let mut solver = configured();
        let p1 = solver.solve(&[1.0], &[1.0]).unwrap().press()[(0, 0)];
        solver
            .configure(Well::new(0.3, 0.0, 200.0).unwrap(), 3000.0)
            .unwrap();
        let p2 = solver.solve(&[1.0], &[1.0]).unwrap().press()[(0, 0)];
        // Doubling the rate doubles the drawdown.
        assert!(p2 < p1);
        let tol = Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        };
        assert!(nearly_equal(3000.0 - p2, 2.0 * (3000.0 - p1), tol));
    }
}
