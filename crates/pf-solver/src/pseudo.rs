//! Pseudo-steady-state solution based on boundary shape factors.

use crate::boundary::BoundaryShape;
use crate::common::{hydraulic_diffusivity, nodes_to_meters, pressure_term, times_to_seconds};
use crate::error::{SolverError, SolverResult};
use crate::solution::PressureSolution;
use crate::validity::TimeWindow;
use nalgebra::DMatrix;
use pf_core::units::constants::{DAY_S, PSI_PA};
use pf_media::{Medium, RadialMedium, Well};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PseudoConfig {
    shape: BoundaryShape,
    pinit_pa: f64,
    /// Constant geometric-skin drawdown [Pa].
    drop_const_pa: f64,
    /// Depletion rate [Pa/s].
    decline_pa_s: f64,
    tmin_s: f64,
}

/// Boundary-dominated constant-rate solution built on tabulated shape
/// factors.
///
/// Also applicable with a second slightly compressible fluid at irreducible
/// saturation, not mobile. Valid from a shape-dependent onset time on; no
/// late bound exists because boundary domination only strengthens with time.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoSteadyState {
    geom: RadialMedium,
    medium: Medium,
    cfg: Option<PseudoConfig>,
}

impl PseudoSteadyState {
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

    /// Dimensionless time for a real time in days, t_D = (η/A)·t.
    pub fn t_dimensionless(&self, t_days: f64) -> SolverResult<f64> {
        let eta = hydraulic_diffusivity(&self.medium)?;
        Ok(eta / self.geom.surface().value * t_days * DAY_S)
    }

    /// Real time in days for a dimensionless time, t = (A/η)·t_D.
    pub fn t_real(&self, t_dim: f64) -> SolverResult<f64> {
        let eta = hydraulic_diffusivity(&self.medium)?;
        Ok(self.geom.surface().value / eta * t_dim / DAY_S)
    }

    /// Attach a well, boundary shape and initial pressure (psi), deriving
    /// the constant and time-linear drawdown terms and the onset time. May
    /// be called again to reconfigure.
    pub fn configure(
        &mut self,
        well: Well,
        shape: BoundaryShape,
        pinit_psi: f64,
    ) -> SolverResult<&mut Self> {
        if !pinit_psi.is_finite() || pinit_psi <= 0.0 {
            return Err(SolverError::InvalidArg {
                what: "initial pressure",
            });
        }

        let fluid = *self.medium.fluid().ok_or(SolverError::MissingProperty {
            what: "fluid properties",
        })?;
        let term_pa = pressure_term(&self.geom, &self.medium, &well)?;
        let eta = hydraulic_diffusivity(&self.medium)?;
        let tcomp = self
            .medium
            .total_compressibility()
            .ok_or(SolverError::MissingProperty {
                what: "total compressibility",
            })?;
        let vpore = self
            .medium
            .pore_volume(self.geom.volume())
            .ok_or(SolverError::MissingProperty {
                what: "layer porosity",
            })?;

        let surface = self.geom.surface().value;
        let bound = shape.bound();

        let gamma = 0.5772_f64.exp();
        let inner = 4.0 * surface / (gamma * bound.factor * well.radius.value * well.radius.value);
        let drop_const_pa = term_pa * (0.5 * inner.ln() + well.skin);

        let decline_pa_s = well.cond * fluid.fvf / (vpore.value * tcomp);

        // Onset of boundary domination, dimensionless → real time.
        let tmin_s = surface / eta * bound.time_pss_accurate;

        self.cfg = Some(PseudoConfig {
            shape,
            pinit_pa: pinit_psi * PSI_PA,
            drop_const_pa,
            decline_pa_s,
            tmin_s,
        });
        Ok(self)
    }

    /// Configured boundary shape.
    pub fn shape(&self) -> Option<BoundaryShape> {
        self.cfg.as_ref().map(|cfg| cfg.shape)
    }

    /// Onset of validity in days, available once configured.
    pub fn tmin(&self) -> Option<f64> {
        self.cfg.as_ref().map(|cfg| cfg.tmin_s / DAY_S)
    }

    /// Solve for pressure at every (node, time) pair. Times in days, nodes
    /// in feet. Pressure declines linearly with time at a rate set by total
    /// withdrawal and compressibility.
    pub fn solve(&self, times_days: &[f64], nodes_ft: &[f64]) -> SolverResult<PressureSolution> {
        let cfg = self.cfg.as_ref().ok_or(SolverError::NotConfigured)?;

        let mut advisories = Vec::new();
        let window = TimeWindow {
            tmin_s: cfg.tmin_s,
            tmax_s: None,
        };
        let times_s = window.screen(&times_to_seconds(times_days), &mut advisories);
        let nodes_m = nodes_to_meters(nodes_ft);

        let press_pa = DMatrix::from_fn(nodes_m.len(), times_s.len(), |_i, j| {
            cfg.pinit_pa - cfg.drop_const_pa - cfg.decline_pa_s * times_s[j]
        });

        Ok(PressureSolution::new(times_s, nodes_m, press_pa, advisories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::Advisory;
    use pf_core::numeric::{Tolerances, nearly_equal};
    use pf_media::{Fluid, Layer};

    fn medium() -> Medium {
        Medium::new()
            .with_layer(Layer::new(0.2, 100.0, 3e-6).unwrap())
            .with_fluid(Fluid::new(1.0, 1.2e-5, 1.2).unwrap())
            .with_tcomp_per_psi(1.5e-5)
    }

    fn configured(shape: BoundaryShape) -> PseudoSteadyState {
        let mut solver = PseudoSteadyState::new(&[1000.0, 20.0], medium()).unwrap();
        solver
            .configure(Well::new(0.3, 0.0, 100.0).unwrap(), shape, 3000.0)
            .unwrap();
        solver
    }

    #[test]
    fn solve_unconfigured_fails() {
        let solver = PseudoSteadyState::new(&[1000.0, 20.0], medium()).unwrap();
        assert!(matches!(
            solver.solve(&[1.0], &[1.0]),
            Err(SolverError::NotConfigured)
        ));
    }

    #[test]
    fn depletion_is_strictly_decreasing_in_time() {
        let solver = configured(BoundaryShape::default());
        let tmin = solver.tmin().unwrap();
        let times: Vec<f64> = (0..5).map(|i| tmin * (1.0 + i as f64)).collect();
        let sol = solver.solve(&times, &[1.0, 100.0]).unwrap();
        let press = sol.press();

        for i in 0..2 {
            for j in 1..times.len() {
                assert!(press[(i, j)] < press[(i, j - 1)]);
            }
        }
        assert!(sol.advisories().is_empty());
    }

    #[test]
    fn early_times_are_nan_with_one_advisory() {
        let solver = configured(BoundaryShape::default());
        let tmin = solver.tmin().unwrap();
        let sol = solver
            .solve(&[tmin / 100.0, tmin / 10.0, tmin * 2.0], &[1.0])
            .unwrap();
        let press = sol.press();

        assert!(press[(0, 0)].is_nan());
        assert!(press[(0, 1)].is_nan());
        assert!(press[(0, 2)].is_finite());
        assert_eq!(sol.advisories(), &[Advisory::EarlyTimes { count: 2 }]);
    }

    #[test]
    fn dimensionless_time_round_trip() {
        let solver = configured(BoundaryShape::default());
        let td = solver.t_dimensionless(3.0).unwrap();
        let back = solver.t_real(td).unwrap();
        assert!(nearly_equal(back, 3.0, Tolerances::default()));
    }

    #[test]
    fn onset_matches_shape_threshold() {
        let solver = configured(BoundaryShape::Triangle);
        let tmin_days = solver.tmin().unwrap();
        let td = solver.t_dimensionless(tmin_days).unwrap();
        assert!(nearly_equal(
            td,
            BoundaryShape::Triangle.bound().time_pss_accurate,
            Tolerances::default()
        ));
    }

    #[test]
    fn smaller_shape_factor_deepens_constant_drop() {
        // C_A(triangle) < C_A(circle) makes ln(4A/(γ·C_A·rw²)) larger.
        let circle = configured(BoundaryShape::Circle);
        let triangle = configured(BoundaryShape::Triangle);
        let t = circle.tmin().unwrap().max(triangle.tmin().unwrap()) * 2.0;

        let p_circle = circle.solve(&[t], &[1.0]).unwrap().press()[(0, 0)];
        let p_triangle = triangle.solve(&[t], &[1.0]).unwrap().press()[(0, 0)];
        assert!(p_triangle < p_circle);
    }

    #[test]
    fn missing_fluid_fails_at_configure() {
        let layer_only = Medium::new().with_layer(Layer::new(0.2, 100.0, 3e-6).unwrap());

        let mut solver = PseudoSteadyState::new(&[1000.0, 20.0], layer_only).unwrap();
        assert!(matches!(
            solver.configure(
                Well::new(0.3, 0.0, 100.0).unwrap(),
                BoundaryShape::default(),
                3000.0
            ),
            Err(SolverError::MissingProperty { .. })
        ));
    }
}
