//! Perspective-divide projections
//!
//! Each projection collapses one dimension by dividing the remaining
//! coordinates by the distance between the projection constant `k` and the
//! dropped coordinate. Chaining [`project4to3`] and [`project3to2`] maps a
//! 4D point onto the 2D image plane.
//!
//! `k` equal to the dropped coordinate of a vertex is a domain error: the
//! divide blows up and the projected point diverges. The renderer's fixed
//! geometry keeps every vertex well inside `k`, so this is not guarded.

use crate::{Vec2, Vec3, Vec4};

/// Field of view of the fixed camera, in radians (90 degrees)
pub const FOV: f32 = std::f32::consts::FRAC_PI_2;

/// Projection constant for a given field of view
///
/// This is a single scalar computed once per render, not per-vertex state.
#[inline]
pub fn projection_constant(fov: f32) -> f32 {
    1.0 / (fov * 0.5).tan()
}

/// Project a 4D point to 3D with a perspective divide along w
#[inline]
pub fn project4to3(v: Vec4, k: f32) -> Vec3 {
    let d = k - v.w;
    Vec3::new(v.x / d, v.y / d, v.z / d)
}

/// Project a 3D point to 2D with a perspective divide along z
#[inline]
pub fn project3to2(v: Vec3, k: f32) -> Vec2 {
    let d = k - v.z;
    Vec2::new(v.x / d, v.y / d)
}
