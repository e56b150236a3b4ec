//! Pixel buffer for software rendering
//!
//! One buffer is owned by exactly one frame under construction. It starts
//! white and line coverage is blended into it; once handed to the sink it
//! is discarded.

use bytemuck::{Pod, Zeroable};

/// An RGB pixel, 3 bytes, no padding
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Create a new Rgb color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row-major RGB pixel buffer, initialized to a white background
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a new buffer filled with the white background
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::WHITE; width * height],
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

    /// Read a pixel; panics if out of bounds
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// Blend `color` over the background at the given brightness
    ///
    /// `brightness` 0 leaves the white background, 1 writes pure `color`;
    /// each channel is `255*(1-brightness) + channel*brightness`, truncated
    /// and clamped to 0..=255. Coordinates outside the buffer are silently
    /// dropped.
    pub fn blend(&mut self, x: i64, y: i64, brightness: f32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;

        let mix = |channel: u8| -> u8 {
            let v = 255.0 * (1.0 - brightness) + channel as f32 * brightness;
            (v as i32).clamp(0, 255) as u8
        };
        self.pixels[idx] = Rgb::new(mix(color.r), mix(color.g), mix(color.b));
    }

    /// The raw pixel bytes, row-major, 3 bytes per pixel
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// True if every pixel is the white background
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == Rgb::WHITE)
    }
}
