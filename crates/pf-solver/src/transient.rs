//! Transient (infinite-acting) solution of the radial diffusivity equation.

use crate::common::{hydraulic_diffusivity, nodes_to_meters, pressure_term, times_to_seconds};
use crate::ei::expi;
use crate::error::{SolverError, SolverResult};
use crate::solution::PressureSolution;
use crate::validity::TimeWindow;
use nalgebra::DMatrix;
use pf_core::units::constants::{DAY_S, PSI_PA};
use pf_media::{Medium, RadialMedium, Well};

#[derive(Debug, Clone, Copy, PartialEq)]
struct TransientConfig {
    well: Well,
    pinit_pa: f64,
    term_pa: f64,
    eta: f64,
    tmin_s: f64,
    tmax_s: f64,
}

/// Constant-rate line-source solution based on the exponential integral.
///
/// Valid between `tmin` (finite wellbore size) and `tmax` (finite reservoir
/// size); requested times outside that window come back as NaN columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientState {
    geom: RadialMedium,
    medium: Medium,
    cfg: Option<TransientConfig>,
}

impl TransientState {
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

    /// Attach a well and initial pressure (psi), deriving the pressure term
    /// and the validity window. May be called again to reconfigure.
    pub fn configure(&mut self, well: Well, pinit_psi: f64) -> SolverResult<&mut Self> {
        if !pinit_psi.is_finite() || pinit_psi <= 0.0 {
            return Err(SolverError::InvalidArg {
                what: "initial pressure",
            });
        }

        let term_pa = pressure_term(&self.geom, &self.medium, &well)?;
        let eta = hydraulic_diffusivity(&self.medium)?;

        // Finite wellbore size below, finite reservoir size above. The upper
        // bound uses the boundary radius, not the well radius.
        let tmin_s = 100.0 * well.radius.value * well.radius.value / eta;
        let tmax_s = 0.25 * self.geom.radius().value * self.geom.radius().value / eta;

        self.cfg = Some(TransientConfig {
            well,
            pinit_pa: pinit_psi * PSI_PA,
            term_pa,
            eta,
            tmin_s,
            tmax_s,
        });
        Ok(self)
    }

    /// Early validity bound in days, available once configured.
    pub fn tmin(&self) -> Option<f64> {
        self.cfg.as_ref().map(|cfg| cfg.tmin_s / DAY_S)
    }

    /// Late validity bound in days, available once configured.
    pub fn tmax(&self) -> Option<f64> {
        self.cfg.as_ref().map(|cfg| cfg.tmax_s / DAY_S)
    }

    /// Solve for pressure at every (node, time) pair. Times in days, nodes
    /// in feet. Stateless: may be called any number of times.
    pub fn solve(&self, times_days: &[f64], nodes_ft: &[f64]) -> SolverResult<PressureSolution> {
        let cfg = self.cfg.as_ref().ok_or(SolverError::NotConfigured)?;

        let mut advisories = Vec::new();
        let window = TimeWindow {
            tmin_s: cfg.tmin_s,
            tmax_s: Some(cfg.tmax_s),
        };
        let times_s = window.screen(&times_to_seconds(times_days), &mut advisories);
        let nodes_m = nodes_to_meters(nodes_ft);

        let press_pa = DMatrix::from_fn(nodes_m.len(), times_s.len(), |i, j| {
            let t = times_s[j];
            let r = nodes_m[i];
            // NaN times propagate through the Ei argument.
            let ei = expi(-(r * r) / (4.0 * cfg.eta * t));
            cfg.pinit_pa - cfg.term_pa * (-0.5 * ei + cfg.well.skin)
        });

        Ok(PressureSolution::new(times_s, nodes_m, press_pa, advisories))
    }
}
