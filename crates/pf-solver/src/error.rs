//! Error types for solver operations.

use pf_media::MediaError;
use thiserror::Error;

/// Errors that can occur while building, configuring, or running a solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// `solve` was called before `configure`.
    #[error("Solver is not configured: attach a well and initial pressure first")]
    NotConfigured,

    /// A derived medium property required by the regime is unavailable.
    #[error("Missing property: {what}")]
    MissingProperty { what: &'static str },

    /// Boundary-shape key not in the closed set.
    #[error("Unknown boundary shape: {name}")]
    UnknownShape { name: String },

    /// Invalid argument to a solver operation.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Geometry or property construction error.
    #[error("Media error: {0}")]
    Media(#[from] MediaError),
}

pub type SolverResult<T> = Result<T, SolverError>;
