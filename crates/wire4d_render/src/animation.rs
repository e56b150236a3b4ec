//! Animation scheduling
//!
//! Maps a frame index to a finished pixel buffer. The mapping is a pure
//! function of the index and the fixed geometry/constants, which is what
//! makes it safe to compute frames on parallel workers in any order.

use wire4d_math::{project4to3, projection_constant, rotate4, Transform3, Vec3, Vec4, FOV};

use crate::compositor::draw_wireframe3;
use crate::frame::{PixelBuffer, Rgb};
use crate::wireframe::Wireframe4;

/// Camera distance for the 4D -> 3D perspective divide
const CAMERA_4D: f32 = 3.0;

/// Degrees of rotation added per frame
const DEGREES_PER_FRAME: f32 = 2.0;

/// A fixed scene animated over discrete frame indices
///
/// Holds the immutable inputs of every frame: the wireframe, the output
/// dimensions, and the screen projection constant (computed once from the
/// field of view, not per vertex).
pub struct Animation {
    geometry: Wireframe4,
    width: usize,
    height: usize,
    screen_k: f32,
}

impl Animation {
    /// Create an animation of `geometry` rendered at `width` x `height`
    pub fn new(geometry: Wireframe4, width: usize, height: usize) -> Self {
        Self {
            geometry,
            width,
            height,
            screen_k: projection_constant(FOV),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Render one frame
    ///
    /// Per frame `i` the chain is: rotate each vertex in 4D by
    /// `(angle, angle/2)` with `angle = 2*i` degrees, collapse 4D -> 3D,
    /// place the object in front of the camera with a scaled and rotated
    /// affine transform, then composite the edges into a fresh buffer.
    pub fn render_frame(&self, index: usize) -> PixelBuffer {
        let angle = (index as f32 * DEGREES_PER_FRAME).to_radians();

        let rotated: Vec<Vec4> = self
            .geometry
            .vertices
            .iter()
            .map(|&v| rotate4(v, angle, angle * 0.5))
            .collect();

        let projected: Vec<Vec3> = rotated
            .iter()
            .map(|&v| project4to3(v, CAMERA_4D))
            .collect();

        let placement = Transform3::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::splat(3.0),
            Vec3::new(angle * 0.2, angle * 0.3, 0.0),
        );
        let vertices = placement.transform_points(&projected);

        let mut buf = PixelBuffer::new(self.width, self.height);
        draw_wireframe3(
            &mut buf,
            &vertices,
            &self.geometry.edges,
            self.screen_k,
            Rgb::BLACK,
        );
        buf
    }
}
