//! Shared validation for property constructors.

use crate::error::{MediaError, MediaResult};
use pf_core::numeric::{ensure_finite, ensure_positive};

/// Ensure a property is finite and strictly positive.
pub(crate) fn positive(v: f64, what: &'static str) -> MediaResult<f64> {
    ensure_positive(v, what).map_err(|_| MediaError::NonPhysical { what })
}

/// Ensure a property is finite.
pub(crate) fn finite(v: f64, what: &'static str) -> MediaResult<f64> {
    ensure_finite(v, what).map_err(|_| MediaError::NonPhysical { what })
}

/// Ensure a property is finite and not negative.
pub(crate) fn non_negative(v: f64, what: &'static str) -> MediaResult<f64> {
    let v = finite(v, what)?;
    if v < 0.0 {
        return Err(MediaError::NonPhysical { what });
    }
    Ok(v)
}
