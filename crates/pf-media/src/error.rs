//! Error types for media construction.

use thiserror::Error;

pub type MediaResult<T> = Result<T, MediaError>;

/// Errors raised while constructing geometry or property records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    /// Malformed size slice (wrong element count or non-positive entry).
    #[error("Invalid size: {what}")]
    InvalidSize { what: &'static str },

    /// Non-physical property value (zero or negative porosity, viscosity, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },
}
