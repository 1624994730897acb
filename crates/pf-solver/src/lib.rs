//! Analytical solvers of the radial diffusivity equation.
//!
//! This crate provides closed-form constant-rate pressure solutions for a
//! single slightly compressible fluid in a radial porous medium, one solver
//! per flow regime:
//!
//! - [`TransientState`]: exponential-integral line-source solution, valid
//!   between a finite-wellbore lower time bound and a finite-reservoir upper
//!   time bound;
//! - [`SteadyState`]: time-invariant solution for a constant-pressure outer
//!   boundary;
//! - [`PseudoSteadyState`]: boundary-dominated solution built on tabulated
//!   shape factors, valid after a shape-dependent onset time.
//!
//! A solver is built from a geometry size and a [`pf_media::Medium`], then
//! configured with a well and an initial pressure, and finally asked to
//! `solve` over a time/node grid. The output is a [`PressureSolution`]
//! holding the node×time pressure field together with any advisories raised
//! while screening the requested times.

pub mod boundary;
pub mod ei;
pub mod error;
pub mod pseudo;
pub mod solution;
pub mod steady;
pub mod transient;

mod common;
mod validity;

pub use boundary::{Boundary, BoundaryShape};
pub use error::{SolverError, SolverResult};
pub use pseudo::PseudoSteadyState;
pub use solution::PressureSolution;
pub use steady::SteadyState;
pub use transient::TransientState;
