//! Wireframe geometry
//!
//! A wireframe is a list of vertices plus a list of unordered index pairs
//! into that list. The tesseract has 16 vertices (all combinations of ±h
//! for x,y,z,w) and 32 edges; every vertex has degree 4.

use wire4d_math::Vec4;

/// An immutable 4D wireframe: vertices plus edges as index pairs
///
/// Built once and shared read-only across render workers.
#[derive(Clone, Debug)]
pub struct Wireframe4 {
    /// Vertex positions
    pub vertices: Vec<Vec4>,
    /// Unordered pairs of indices into `vertices`
    pub edges: Vec<[usize; 2]>,
}

impl Wireframe4 {
    /// Tesseract (4D hypercube) centered at origin with given side length
    pub fn tesseract(size: f32) -> Self {
        let h = size * 0.5;

        // All 16 vertices are combinations of ±h for each coordinate.
        // Using binary counting: vertex i has coordinates based on bits of i
        let vertices = [
            Vec4::new(-h, -h, -h, -h), // 0  = 0b0000
            Vec4::new( h, -h, -h, -h), // 1  = 0b0001
            Vec4::new(-h,  h, -h, -h), // 2  = 0b0010
            Vec4::new( h,  h, -h, -h), // 3  = 0b0011
            Vec4::new(-h, -h,  h, -h), // 4  = 0b0100
            Vec4::new( h, -h,  h, -h), // 5  = 0b0101
            Vec4::new(-h,  h,  h, -h), // 6  = 0b0110
            Vec4::new( h,  h,  h, -h), // 7  = 0b0111
            Vec4::new(-h, -h, -h,  h), // 8  = 0b1000
            Vec4::new( h, -h, -h,  h), // 9  = 0b1001
            Vec4::new(-h,  h, -h,  h), // 10 = 0b1010
            Vec4::new( h,  h, -h,  h), // 11 = 0b1011
            Vec4::new(-h, -h,  h,  h), // 12 = 0b1100
            Vec4::new( h, -h,  h,  h), // 13 = 0b1101
            Vec4::new(-h,  h,  h,  h), // 14 = 0b1110
            Vec4::new( h,  h,  h,  h), // 15 = 0b1111
        ];

        // Two vertices share an edge when they differ in exactly one
        // coordinate, i.e. their indices differ in exactly one bit
        let mut edges = Vec::with_capacity(32);
        for i in 0..16usize {
            for j in (i + 1)..16 {
                if (i ^ j).count_ones() == 1 {
                    edges.push([i, j]);
                }
            }
        }

        Self {
            vertices: vertices.to_vec(),
            edges,
        }
    }
}
