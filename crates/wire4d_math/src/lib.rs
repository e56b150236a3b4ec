//! Vector and Transform Math
//!
//! This crate provides the vector, projection, and transform types used by
//! the wire4d renderer.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - 2/3/4-component vectors
//! - [`Transform3`] - 3D affine transform (position, scale, Euler rotation)
//!
//! ## Operations
//!
//! - [`project4to3`] / [`project3to2`] - perspective-divide projections
//! - [`rotate4`] - 4D rotation in the XW and YW coordinate planes

mod vec2;
mod vec3;
mod vec4;
pub mod projection;
pub mod rotate4;
pub mod transform3;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use projection::{project3to2, project4to3, projection_constant, FOV};
pub use rotate4::{rotate4, rotate_in_plane, Plane4};
pub use transform3::Transform3;
