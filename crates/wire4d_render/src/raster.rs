//! Anti-aliased line rasterization (Wu-style)
//!
//! Steps one pixel along the major axis while tracking a fractional
//! position along the minor axis; at each step the coverage is split
//! linearly between the two adjacent minor-axis pixels. Fractional
//! positions truncate toward zero, matching the two-pixel coverage
//! footprint the output format is checked against.

use wire4d_math::Vec2;

use crate::frame::{PixelBuffer, Rgb};

/// Draw an anti-aliased line between two points
///
/// Endpoint coordinates are in pixel space; anything falling outside the
/// buffer is clipped by the per-pixel bounds check.
pub fn draw_line(buf: &mut PixelBuffer, p0: Vec2, p1: Vec2, color: Rgb) {
    let (mut x0, mut y0) = (p0.x, p0.y);
    let (mut x1, mut y1) = (p1.x, p1.y);

    // A diverged projection yields non-finite endpoints; every pixel of
    // such a line is out of bounds, so drop it before the cast saturates
    if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
        return;
    }

    // Step along the axis with the larger extent
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let mut intery = y0;
    for x in (x0 as i64)..=(x1 as i64) {
        let base = intery as i64;
        let frac = intery - base as f32;
        if steep {
            buf.blend(base, x, 1.0 - frac, color);
            buf.blend(base + 1, x, frac, color);
        } else {
            buf.blend(x, base, 1.0 - frac, color);
            buf.blend(x, base + 1, frac, color);
        }
        intery += gradient;
    }
}
