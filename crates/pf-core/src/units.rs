// pf-core/src/units.rs
//
// Every physical quantity is stored in SI and crosses the API boundary in
// petroleum field units (feet, psi, days, centipoise, millidarcy, bbl/day).

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    Pressure as UomPressure, Ratio as UomRatio, Time as UomTime, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Time = UomTime;
pub type Volume = UomVolume;

/// Permeability [m²].
///
/// Not part of uom's standard set (darcy is not an SI unit), so we use f64
/// with clear documentation.
pub type Permeability = f64;

/// Compressibility [1/Pa].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type Compressibility = f64;

/// Fluid mobility, 1/(viscosity·FVF) [1/(Pa·s)].
pub type Mobility = f64;

/// Hydraulic diffusivity [m²/s].
pub type Diffusivity = f64;

/// Volumetric flow rate at the well [m³/s].
pub type FlowRate = f64;

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn to_ft(q: Length) -> f64 {
    use uom::si::length::foot;
    q.get::<foot>()
}

#[inline]
pub fn to_ft2(q: Area) -> f64 {
    use uom::si::area::square_foot;
    q.get::<square_foot>()
}

#[inline]
pub fn to_ft3(q: Volume) -> f64 {
    use uom::si::volume::cubic_foot;
    q.get::<cubic_foot>()
}

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn to_psi(q: Pressure) -> f64 {
    use uom::si::pressure::pound_force_per_square_inch;
    q.get::<pound_force_per_square_inch>()
}

#[inline]
pub fn days(v: f64) -> Time {
    use uom::si::time::day;
    Time::new::<day>(v)
}

#[inline]
pub fn to_days(q: Time) -> f64 {
    use uom::si::time::day;
    q.get::<day>()
}

#[inline]
pub fn cp(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::centipoise;
    DynVisc::new::<centipoise>(v)
}

#[inline]
pub fn to_cp(q: DynVisc) -> f64 {
    use uom::si::dynamic_viscosity::centipoise;
    q.get::<centipoise>()
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

// Conversions for the documented-f64 quantities.

#[inline]
pub fn md(v: f64) -> Permeability {
    v * constants::MD_M2
}

#[inline]
pub fn to_md(q: Permeability) -> f64 {
    q / constants::MD_M2
}

#[inline]
pub fn per_psi(v: f64) -> Compressibility {
    v / constants::PSI_PA
}

#[inline]
pub fn to_per_psi(q: Compressibility) -> f64 {
    q * constants::PSI_PA
}

#[inline]
pub fn bpd(v: f64) -> FlowRate {
    v * constants::BBL_M3 / constants::DAY_S
}

#[inline]
pub fn to_bpd(q: FlowRate) -> f64 {
    q * constants::DAY_S / constants::BBL_M3
}

/// ft²/day view of a hydraulic diffusivity.
#[inline]
pub fn to_ft2_per_day(q: Diffusivity) -> f64 {
    q / (constants::FT_M * constants::FT_M) * constants::DAY_S
}

pub mod constants {
    /// Millidarcy in m².
    pub const MD_M2: f64 = 9.869_233e-16;

    /// psi in Pa.
    pub const PSI_PA: f64 = 6_894.757_293_168_361;

    /// Oil barrel in m³.
    pub const BBL_M3: f64 = 0.158_987_294_928;

    /// Day in seconds.
    pub const DAY_S: f64 = 86_400.0;

    /// Foot in meters.
    pub const FT_M: f64 = 0.3048;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _l = ft(1000.0);
        let _p = psi(3000.0);
        let _t = days(30.0);
        let _mu = cp(1.7);
        let _k = md(100.0);
        let _c = per_psi(1.5e-5);
        let _q = bpd(500.0);
        let _r = unitless(0.2);
    }

    #[test]
    fn field_units_store_si() {
        let tol = Tolerances::default();
        assert!(nearly_equal(ft(1.0).value, 0.3048, tol));
        assert!(nearly_equal(psi(1.0).value, 6894.757293168361, tol));
        assert!(nearly_equal(days(1.0).value, 86400.0, tol));
        assert!(nearly_equal(cp(1.0).value, 1e-3, tol));
        assert!(nearly_equal(md(1.0), 9.869233e-16, tol));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trips(v in 1e-6_f64..1e9_f64) {
                let tol = Tolerances { abs: 0.0, rel: 1e-9 };
                prop_assert!(nearly_equal(to_ft(ft(v)), v, tol));
                prop_assert!(nearly_equal(to_psi(psi(v)), v, tol));
                prop_assert!(nearly_equal(to_days(days(v)), v, tol));
                prop_assert!(nearly_equal(to_cp(cp(v)), v, tol));
                prop_assert!(nearly_equal(to_md(md(v)), v, tol));
                prop_assert!(nearly_equal(to_per_psi(per_psi(v)), v, tol));
                prop_assert!(nearly_equal(to_bpd(bpd(v)), v, tol));
            }
        }
    }
}
