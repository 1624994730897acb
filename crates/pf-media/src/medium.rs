//! Medium properties shared by every diffusivity-equation solver.

use crate::fluid::Fluid;
use crate::layer::Layer;
use pf_core::Advisory;
use pf_core::units::{Compressibility, Diffusivity, Length, Volume, per_psi};

/// Combines layer and fluid data into the derived scalars the solvers need:
/// total compressibility and hydraulic diffusivity.
///
/// All parts are optional at construction; derived accessors recompute from
/// the current values on every call and return `None` while a required part
/// is missing. Solvers turn that `None` into a missing-property error at
/// configuration time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Medium {
    layer: Option<Layer>,
    fluid: Option<Fluid>,
    tcomp: Option<Compressibility>,
}

impl Medium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn with_fluid(mut self, fluid: Fluid) -> Self {
        self.fluid = Some(fluid);
        self
    }

    /// Override the total compressibility instead of deriving it from the
    /// layer and fluid compressibilities. Field units (1/psi).
    pub fn with_tcomp_per_psi(mut self, tcomp: f64) -> Self {
        self.tcomp = Some(per_psi(tcomp));
        self
    }

    pub fn layer(&self) -> Option<&Layer> {
        self.layer.as_ref()
    }

    pub fn fluid(&self) -> Option<&Fluid> {
        self.fluid.as_ref()
    }

    /// Total compressibility [1/Pa]: the override if one was supplied,
    /// otherwise layer + fluid compressibility.
    ///
    /// Missing sources are non-fatal here: a warning is logged and `None`
    /// is returned, deferring failure to the first solver that needs the
    /// value.
    pub fn total_compressibility(&self) -> Option<Compressibility> {
        if let Some(ct) = self.tcomp {
            return Some(ct);
        }
        match (self.layer, self.fluid) {
            (Some(layer), Some(fluid)) => Some(layer.comp + fluid.comp),
            _ => {
                tracing::warn!("{}", Advisory::MissingTotalCompressibility);
                None
            }
        }
    }

    /// Hydraulic diffusivity, k/(φ·μ·c_t) [m²/s].
    pub fn hydraulic_diffusivity(&self) -> Option<Diffusivity> {
        let layer = self.layer?;
        let fluid = self.fluid?;
        let ct = self.total_compressibility()?;
        Some(layer.perm / (layer.poro * fluid.visc.value * ct))
    }

    /// Flow capacity k·h [m³] for a medium of the given height.
    pub fn flow_capacity(&self, height: Length) -> Option<f64> {
        Some(self.layer?.perm * height.value)
    }

    /// Pore volume φ·V [m³] for the given bulk volume.
    pub fn pore_volume(&self, bulk: Volume) -> Option<Volume> {
        Some(self.layer?.poro * bulk)
    }
}
