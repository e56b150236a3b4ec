//! Frame compositing
//!
//! Projects wireframe vertices into screen space and rasterizes every edge
//! into a single pixel buffer. Multiple wireframes composite in input
//! order; later lines overdraw earlier ones. There is no depth test.

use wire4d_math::{project3to2, project4to3, Vec2, Vec3, Vec4};

use crate::frame::{PixelBuffer, Rgb};
use crate::raster::draw_line;

/// Fraction of the buffer width that one unit of projected space spans
const SCREEN_SCALE: f32 = 0.3;

/// Draw a 3D wireframe into the buffer
///
/// Each vertex goes through the final perspective divide with constant `k`,
/// is scaled by `width * 0.3`, and offset to the buffer center; edges are
/// then rasterized between the projected endpoints.
pub fn draw_wireframe3(
    buf: &mut PixelBuffer,
    vertices: &[Vec3],
    edges: &[[usize; 2]],
    k: f32,
    color: Rgb,
) {
    let scale = buf.width() as f32 * SCREEN_SCALE;
    let offset = Vec2::new(buf.width() as f32 / 2.0, buf.height() as f32 / 2.0);

    let projected: Vec<Vec2> = vertices
        .iter()
        .map(|&v| project3to2(v, k) * scale + offset)
        .collect();

    for &[a, b] in edges {
        draw_line(buf, projected[a], projected[b], color);
    }
}

/// Draw a 4D wireframe: collapse to 3D with constant `k4`, then draw
pub fn draw_wireframe4(
    buf: &mut PixelBuffer,
    vertices: &[Vec4],
    edges: &[[usize; 2]],
    k4: f32,
    k3: f32,
    color: Rgb,
) {
    let vertices_3d: Vec<Vec3> = vertices.iter().map(|&v| project4to3(v, k4)).collect();
    draw_wireframe3(buf, &vertices_3d, edges, k3, color);
}
