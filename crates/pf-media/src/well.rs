//! Well description used by the solvers.

use crate::check;
use crate::error::MediaResult;
use pf_core::units::{FlowRate, Length, bpd, ft};

/// A constant-rate vertical well, SI-valued, constructed in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Well {
    /// Wellbore radius.
    pub radius: Length,
    /// Dimensionless skin factor (negative for stimulated wells).
    pub skin: f64,
    /// Well conductivity (flow index) [m³/s].
    pub cond: FlowRate,
}

impl Well {
    /// Create a well from radius (ft), skin (dimensionless) and rate (bbl/day).
    pub fn new(radius_ft: f64, skin: f64, rate_bpd: f64) -> MediaResult<Self> {
        check::positive(radius_ft, "well radius")?;
        check::finite(skin, "skin factor")?;
        check::non_negative(rate_bpd, "well rate")?;

        Ok(Self {
            radius: ft(radius_ft),
            skin,
            cond: bpd(rate_bpd),
        })
    }
}
