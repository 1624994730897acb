//! Shared configuration math for the regime solvers.

use crate::error::{SolverError, SolverResult};
use nalgebra::DVector;
use pf_core::units::constants::{DAY_S, FT_M};
use pf_media::{Medium, RadialMedium, Well};
use std::f64::consts::PI;

/// Pressure term scaling every regime's drawdown [Pa]:
/// q / (2π · k·h · λ), with λ the fluid mobility.
pub(crate) fn pressure_term(
    geom: &RadialMedium,
    medium: &Medium,
    well: &Well,
) -> SolverResult<f64> {
    let fluid = medium.fluid().ok_or(SolverError::MissingProperty {
        what: "fluid properties",
    })?;
    let flow_capacity = medium
        .flow_capacity(geom.height())
        .ok_or(SolverError::MissingProperty {
            what: "layer permeability",
        })?;
    Ok(well.cond / (2.0 * PI * flow_capacity * fluid.mobil()))
}

pub(crate) fn hydraulic_diffusivity(medium: &Medium) -> SolverResult<f64> {
    medium
        .hydraulic_diffusivity()
        .ok_or(SolverError::MissingProperty {
            what: "hydraulic diffusivity",
        })
}

/// Requested times, days → seconds.
pub(crate) fn times_to_seconds(times_days: &[f64]) -> Vec<f64> {
    times_days.iter().map(|&t| t * DAY_S).collect()
}

/// Requested nodes, feet → meters, as a column axis.
pub(crate) fn nodes_to_meters(nodes_ft: &[f64]) -> DVector<f64> {
    DVector::from_iterator(nodes_ft.len(), nodes_ft.iter().map(|&r| r * FT_M))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};
    use pf_media::{Fluid, Layer};

    #[test]
    fn term_matches_hand_calculation() {
        let geom = RadialMedium::new(&[1000.0, 20.0]).unwrap();
        let medium = Medium::new()
            .with_layer(Layer::new(0.2, 100.0, 3e-6).unwrap())
            .with_fluid(Fluid::new(1.0, 1.2e-5, 1.2).unwrap());
        let well = Well::new(0.3, 0.0, 100.0).unwrap();

        let term = pressure_term(&geom, &medium, &well).unwrap();

        let q = 100.0 * 0.158987294928 / 86_400.0;
        let kh = 100.0 * 9.869233e-16 * 20.0 * 0.3048;
        let mobil = 1.0 / (1e-3 * 1.2);
        let expect = q / (2.0 * PI * kh * mobil);
        assert!(nearly_equal(term, expect, Tolerances::default()));
    }

    #[test]
    fn term_requires_layer_and_fluid() {
        let geom = RadialMedium::new(&[1000.0, 20.0]).unwrap();
        let well = Well::new(0.3, 0.0, 100.0).unwrap();

        let no_fluid = Medium::new().with_layer(Layer::new(0.2, 100.0, 3e-6).unwrap());
        assert!(matches!(
            pressure_term(&geom, &no_fluid, &well),
            Err(SolverError::MissingProperty { .. })
        ));

        let no_layer = Medium::new().with_fluid(Fluid::new(1.0, 1.2e-5, 1.2).unwrap());
        assert!(matches!(
            pressure_term(&geom, &no_layer, &well),
            Err(SolverError::MissingProperty { .. })
        ));
    }
}
