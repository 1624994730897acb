//! pf-ipr: inflow-performance relationships.
//!
//! Converts reservoir, fluid and well scalars into a productivity index for
//! a chosen flow regime, then into a rate-vs-bottomhole-pressure curve via
//! the undersaturated (linear), Vogel or Fetkovich models. Everything here
//! works in oil-field units and is plain algebra, independent of the
//! diffusivity-equation solvers.

pub mod curves;
pub mod error;
pub mod ipr;
pub mod regime;

pub use curves::{fetkovich_pwf, fetkovich_rate, vogel_pwf, vogel_rate};
pub use error::{IprError, IprResult};
pub use ipr::Ipr;
pub use regime::{Regime, SaturatedModel};
