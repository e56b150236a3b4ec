//! 3D affine transform (position, scale, Euler rotation)
//!
//! A Transform3 places a projected object in 3D space before the final
//! perspective divide. It is stateless and reusable: the animation builds
//! one per frame with that frame's rotation angles.

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// A 3D transform with position, component-wise scale, and Euler rotation
///
/// Rotation angles are in radians about the fixed x, y, z axes, applied
/// intrinsically in x-then-y-then-z order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Transform3 {
    /// Translation applied last
    pub position: Vec3,
    /// Component-wise pre-scale applied first
    pub scale: Vec3,
    /// Euler angles (radians) about the x, y, z axes
    pub rotation: Vec3,
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3 {
    /// Create a new transform
    pub const fn new(position: Vec3, scale: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    /// Identity transform (no translation, rotation, or scale change)
    pub const fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
        }
    }

    /// Transform a point from local space to world space
    ///
    /// Applies scale, then the three axis rotations, then translation.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.apply(p, &self.rotation_sin_cos())
    }

    /// Transform a batch of points, returning a new batch
    ///
    /// The rotation terms are computed once for the whole batch.
    pub fn transform_points(&self, points: &[Vec3]) -> Vec<Vec3> {
        let sin_cos = self.rotation_sin_cos();
        points.iter().map(|&p| self.apply(p, &sin_cos)).collect()
    }

    /// Sine and cosine of each rotation angle
    #[inline]
    fn rotation_sin_cos(&self) -> [(f32, f32); 3] {
        [
            self.rotation.x.sin_cos(),
            self.rotation.y.sin_cos(),
            self.rotation.z.sin_cos(),
        ]
    }

    #[inline]
    fn apply(&self, p: Vec3, sin_cos: &[(f32, f32); 3]) -> Vec3 {
        let [(sx, cx), (sy, cy), (sz, cz)] = *sin_cos;

        let scaled = p.component_mul(self.scale);
        let (mut x, mut y, mut z) = (scaled.x, scaled.y, scaled.z);

        // Rotate about x
        let (ny, nz) = (y * cx - z * sx, y * sx + z * cx);
        y = ny;
        z = nz;

        // Rotate about y
        let (nx, nz) = (x * cy + z * sy, -x * sy + z * cy);
        x = nx;
        z = nz;

        // Rotate about z
        let (nx, ny) = (x * cz - y * sz, x * sz + y * cz);
        x = nx;
        y = ny;

        Vec3::new(x, y, z) + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform3::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
    }

    #[test]
    fn test_translation() {
        let t = Transform3::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE, Vec3::ZERO);
        let p = t.transform_point(Vec3::ZERO);
        assert!(vec_approx_eq(p, Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_component_scale() {
        let t = Transform3::new(Vec3::ZERO, Vec3::new(2.0, 3.0, 4.0), Vec3::ZERO);
        let p = t.transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert!(vec_approx_eq(p, Vec3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_rotation_about_z() {
        let t = Transform3::new(Vec3::ZERO, Vec3::ONE, Vec3::new(0.0, 0.0, PI / 2.0));
        let p = t.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(vec_approx_eq(p, Vec3::new(0.0, 1.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_rotation_about_x() {
        let t = Transform3::new(Vec3::ZERO, Vec3::ONE, Vec3::new(PI / 2.0, 0.0, 0.0));
        let p = t.transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!(vec_approx_eq(p, Vec3::new(0.0, 0.0, 1.0)), "got {:?}", p);
    }

    #[test]
    fn test_rotation_about_y() {
        let t = Transform3::new(Vec3::ZERO, Vec3::ONE, Vec3::new(0.0, PI / 2.0, 0.0));
        let p = t.transform_point(Vec3::new(1.0, 0.0, 0.0));
        // x rotates toward -z with this convention
        assert!(vec_approx_eq(p, Vec3::new(0.0, 0.0, -1.0)), "got {:?}", p);
    }

    #[test]
    fn test_transform_order() {
        // Scale, then rotate, then translate
        let t = Transform3::new(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::splat(2.0),
            Vec3::new(0.0, 0.0, PI / 2.0),
        );
        // (1,0,0) * 2 = (2,0,0), rotated 90 deg about z = (0,2,0), + (10,0,0)
        let p = t.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(vec_approx_eq(p, Vec3::new(10.0, 2.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_batch_matches_single() {
        let t = Transform3::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::splat(3.0),
            Vec3::new(0.3, 0.7, 0.0),
        );
        let points = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.5, 2.0),
        ];
        let batch = t.transform_points(&points);
        for (p, b) in points.iter().zip(&batch) {
            assert!(vec_approx_eq(t.transform_point(*p), *b));
        }
    }

    #[test]
    fn test_does_not_mutate_input() {
        let t = Transform3::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE, Vec3::ZERO);
        let points = vec![Vec3::new(1.0, 2.0, 3.0)];
        let _ = t.transform_points(&points);
        assert_eq!(points[0], Vec3::new(1.0, 2.0, 3.0));
    }
}
