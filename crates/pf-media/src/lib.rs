//! pf-media: porous-media geometry and rock/fluid/well properties.
//!
//! Geometry types own the characteristic lengths of a reservoir and derive
//! flow areas and bulk volume. Property types are thin SI-valued records
//! constructed in petroleum field units. `Medium` combines layer and fluid
//! data into the derived scalars every diffusivity-equation solver needs.

mod check;
pub mod error;
pub mod fluid;
pub mod geometry;
pub mod layer;
pub mod medium;
pub mod well;

pub use error::{MediaError, MediaResult};
pub use fluid::Fluid;
pub use geometry::{LinearMedium, RadialMedium};
pub use layer::Layer;
pub use medium::Medium;
pub use well::Well;
