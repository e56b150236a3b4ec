//! 4D rotation in fixed coordinate planes
//!
//! In 4D, rotations happen in planes rather than around axes. The animation
//! pipeline only exercises the two planes that mix a spatial axis with w:
//! XW and YW. Each rotation is a planar (2D) rotation embedded in 4-space.

use crate::Vec4;

/// The rotation planes exercised by the animation pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane4 {
    /// XW plane - rotation mixing x and w
    XW,
    /// YW plane - rotation mixing y and w
    YW,
}

/// Rotate a 4D point within a single coordinate plane
#[inline]
pub fn rotate_in_plane(v: Vec4, plane: Plane4, angle: f32) -> Vec4 {
    let (s, c) = angle.sin_cos();
    match plane {
        Plane4::XW => Vec4::new(v.x * c - v.w * s, v.y, v.z, v.x * s + v.w * c),
        Plane4::YW => Vec4::new(v.x, v.y * c - v.w * s, v.z, v.y * s + v.w * c),
    }
}

/// Rotate a 4D point in the XW plane by `theta`, then in the YW plane by `phi`
///
/// The order is fixed: both rotations touch the w axis, so they do not
/// commute.
#[inline]
pub fn rotate4(v: Vec4, theta: f32, phi: f32) -> Vec4 {
    rotate_in_plane(rotate_in_plane(v, Plane4::XW, theta), Plane4::YW, phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.z - b.z).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
    }

    #[test]
    fn test_zero_angles_is_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rotate4(v, 0.0, 0.0), v);
    }

    #[test]
    fn test_quarter_turn_xw() {
        let r = rotate_in_plane(Vec4::X, Plane4::XW, PI / 2.0);
        assert!(vec_approx_eq(r, Vec4::W), "expected W, got {:?}", r);
    }

    #[test]
    fn test_quarter_turn_yw() {
        let r = rotate_in_plane(Vec4::Y, Plane4::YW, PI / 2.0);
        assert!(vec_approx_eq(r, Vec4::W), "expected W, got {:?}", r);
    }

    #[test]
    fn test_untouched_components() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let r = rotate_in_plane(v, Plane4::XW, 1.3);
        assert_eq!(r.y, v.y);
        assert_eq!(r.z, v.z);
    }

    #[test]
    fn test_norm_preserving() {
        let v = Vec4::new(1.0, -2.0, 0.5, 3.0);
        for i in 0..8 {
            let theta = i as f32 * 0.7;
            let phi = i as f32 * 0.3;
            let r = rotate4(v, theta, phi);
            assert!(
                (r.length() - v.length()).abs() < EPSILON,
                "norm changed at theta={}, phi={}",
                theta,
                phi
            );
        }
    }

    #[test]
    fn test_order_matters() {
        // XW then YW differs from YW then XW when both angles are nonzero
        let v = Vec4::new(1.0, 1.0, 0.0, 1.0);
        let a = rotate4(v, 0.8, 0.4);
        let b = rotate_in_plane(rotate_in_plane(v, Plane4::YW, 0.4), Plane4::XW, 0.8);
        assert!(!vec_approx_eq(a, b));
    }

    #[test]
    fn test_full_turn_round_trips() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let r = rotate4(v, 2.0 * PI, 2.0 * PI);
        assert!(vec_approx_eq(r, v), "expected {:?}, got {:?}", v, r);
    }
}
