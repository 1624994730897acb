//! Reservoir fluid properties for a single slightly compressible phase.

use crate::check;
use crate::error::MediaResult;
use pf_core::units::{Compressibility, DynVisc, Mobility, cp, per_psi};

/// Fluid properties, SI-valued, constructed in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluid {
    /// Dynamic viscosity.
    pub visc: DynVisc,
    /// Fluid compressibility [1/Pa].
    pub comp: Compressibility,
    /// Formation volume factor, reservoir volume per surface volume.
    pub fvf: f64,
}

impl Fluid {
    /// Create a fluid from viscosity (cp), compressibility (1/psi) and
    /// formation volume factor (rb/stb).
    pub fn new(visc_cp: f64, comp_per_psi: f64, fvf: f64) -> MediaResult<Self> {
        check::positive(visc_cp, "viscosity")?;
        check::non_negative(comp_per_psi, "fluid compressibility")?;
        check::positive(fvf, "formation volume factor")?;

        Ok(Self {
            visc: cp(visc_cp),
            comp: per_psi(comp_per_psi),
            fvf,
        })
    }

    /// Fluid mobility, 1/(viscosity·FVF) [1/(Pa·s)].
    pub fn mobil(&self) -> Mobility {
        1.0 / (self.visc.value * self.fvf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn mobility_inverts_viscosity_and_fvf() {
        let fluid = Fluid::new(1.0, 5e-6, 1.25).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(fluid.mobil(), 1.0 / (1e-3 * 1.25), tol));
    }

    #[test]
    fn rejects_non_physical() {
        assert!(Fluid::new(0.0, 5e-6, 1.2).is_err());
        assert!(Fluid::new(1.0, -1e-6, 1.2).is_err());
        assert!(Fluid::new(1.0, 5e-6, 0.0).is_err());
    }
}
