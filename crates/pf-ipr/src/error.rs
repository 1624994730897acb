//! Error types for inflow-performance calculations.

use thiserror::Error;

pub type IprResult<T> = Result<T, IprError>;

/// Errors raised at the point of use, never at construction: every field of
/// [`crate::Ipr`] is optional until a method actually needs it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IprError {
    #[error("Missing field: {name}")]
    MissingField { name: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
