//! wire4d - offline tesseract animation renderer
//!
//! Renders a rotating 4D hypercube to a sequence of PPM frames, splitting
//! the timeline across parallel workers. The binary wires configuration,
//! logging, and progress reporting around the `wire4d_render` pipeline.

pub mod config;
