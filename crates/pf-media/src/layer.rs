//! Reservoir rock properties.

use crate::check;
use crate::error::{MediaError, MediaResult};
use pf_core::units::{Compressibility, Permeability, md, per_psi};

/// Rock properties of a single layer, SI-valued, constructed in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Porosity, pore fraction of bulk volume.
    pub poro: f64,
    /// Permeability [m²].
    pub perm: Permeability,
    /// Rock compressibility [1/Pa].
    pub comp: Compressibility,
}

impl Layer {
    /// Create a layer from porosity (fraction), permeability (mD) and
    /// compressibility (1/psi).
    pub fn new(poro: f64, perm_md: f64, comp_per_psi: f64) -> MediaResult<Self> {
        check::positive(poro, "porosity")?;
        if poro > 1.0 {
            return Err(MediaError::NonPhysical { what: "porosity" });
        }
        check::positive(perm_md, "permeability")?;
        check::non_negative(comp_per_psi, "rock compressibility")?;

        Ok(Self {
            poro,
            perm: md(perm_md),
            comp: per_psi(comp_per_psi),
        })
    }
}
