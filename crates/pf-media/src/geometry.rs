//! Reservoir geometry for radial and linear flow calculations.
//!
//! Both types are constructed from a size slice in feet and are immutable
//! afterwards, so the derived areas and bulk volume are computed once at
//! construction.

use crate::error::{MediaError, MediaResult};
use pf_core::numeric::ensure_positive;
use pf_core::units::{Area, Length, Volume, ft, to_ft, to_ft2, to_ft3};
use std::f64::consts::PI;

fn dim(v: f64, what: &'static str) -> MediaResult<Length> {
    ensure_positive(v, what).map_err(|_| MediaError::InvalidSize { what })?;
    Ok(ft(v))
}

/// A reservoir for radial flow calculations.
///
/// Size is (radius, height) in feet; a one-element slice leaves height at
/// the 1 ft default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialMedium {
    radius: Length,
    height: Length,
    surface: Area,
    volume: Volume,
}

impl RadialMedium {
    /// Build from a size slice in feet: `[radius]` or `[radius, height]`.
    pub fn new(size_ft: &[f64]) -> MediaResult<Self> {
        let (r, h) = match size_ft {
            [r] => (*r, 1.0),
            [r, h] => (*r, *h),
            _ => {
                return Err(MediaError::InvalidSize {
                    what: "size slice must have 1 or 2 elements (radius[, height])",
                });
            }
        };

        let radius = dim(r, "radius")?;
        let height = dim(h, "height")?;

        // Flow surface perpendicular to the radial direction, and bulk volume.
        let surface = PI * radius * radius;
        let volume = surface * height;

        Ok(Self {
            radius,
            height,
            surface,
            volume,
        })
    }

    /// Size tuple (radius, height) in feet.
    pub fn size(&self) -> (f64, f64) {
        (to_ft(self.radius), to_ft(self.height))
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn height(&self) -> Length {
        self.height
    }

    /// Surface area perpendicular to flow, π·r².
    pub fn surface(&self) -> Area {
        self.surface
    }

    /// Bulk volume, π·r²·h.
    pub fn volume(&self) -> Volume {
        self.volume
    }
}

/// A reservoir for one-dimensional linear flow calculations.
///
/// Size is (length, width, height) in feet; missing trailing dimensions
/// default to 1 ft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMedium {
    length: Length,
    width: Length,
    height: Length,
    area: Area,
    surface: Area,
    volume: Volume,
}

impl LinearMedium {
    /// Build from a size slice in feet: `[length]`, `[length, width]` or
    /// `[length, width, height]`.
    pub fn new(size_ft: &[f64]) -> MediaResult<Self> {
        let (l, w, h) = match size_ft {
            [l] => (*l, 1.0, 1.0),
            [l, w] => (*l, *w, 1.0),
            [l, w, h] => (*l, *w, *h),
            _ => {
                return Err(MediaError::InvalidSize {
                    what: "size slice must have 1 to 3 elements (length[, width[, height]])",
                });
            }
        };

        let length = dim(l, "length")?;
        let width = dim(w, "width")?;
        let height = dim(h, "height")?;

        Ok(Self {
            length,
            width,
            height,
            // Cross-section whose normal is parallel to flow.
            area: height * width,
            // Surface whose normal is perpendicular to flow.
            surface: length * width,
            volume: length * width * height,
        })
    }

    /// Size tuple (length, width, height) in feet.
    pub fn size(&self) -> (f64, f64, f64) {
        (to_ft(self.length), to_ft(self.width), to_ft(self.height))
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn width(&self) -> Length {
        self.width
    }

    pub fn height(&self) -> Length {
        self.height
    }

    /// Cross-sectional area parallel to flow, h·w.
    pub fn area(&self) -> Area {
        self.area
    }

    /// Surface area perpendicular to flow, l·w.
    pub fn surface(&self) -> Area {
        self.surface
    }

    /// Bulk volume, l·w·h.
    pub fn volume(&self) -> Volume {
        self.volume
    }
}
