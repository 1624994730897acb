//! pf-core: stable foundation for porflow.
//!
//! Contains:
//! - units (uom SI types + field-unit constructors/getters)
//! - numeric (Real + tolerances + float helpers)
//! - diagnostics (advisory conditions raised by solvers)
//! - error (shared error types)

pub mod diagnostics;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use diagnostics::Advisory;
pub use error::{PfError, PfResult};
pub use numeric::*;
pub use units::*;
