//! Frame sinks
//!
//! A sink persists finished frames keyed by frame index. Workers call it
//! concurrently; no cross-worker ordering is required because every frame
//! index maps to a distinct output name.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::frame::PixelBuffer;

/// Error type for sink operations
#[derive(Debug)]
pub enum SinkError {
    /// IO error (directory missing, disk full, permission denied, etc.)
    Io(io::Error),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Io(err) => write!(f, "Frame sink IO error: {}", err),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(err: io::Error) -> Self {
        SinkError::Io(err)
    }
}

/// Destination for finished frames, shared across render workers
pub trait FrameSink: Sync {
    /// Persist one frame; a failure is fatal to the caller's batch
    fn write_frame(&self, index: usize, frame: &PixelBuffer) -> Result<(), SinkError>;
}

/// The binary PPM header for a buffer of the given dimensions
#[inline]
pub fn ppm_header(width: usize, height: usize) -> String {
    format!("P6\n{} {}\n255\n", width, height)
}

/// Encode a buffer as a binary PPM (P6) image
///
/// Header followed by `width * height * 3` raw RGB bytes, row-major,
/// no padding. Downstream viewers depend on this byte-for-byte.
pub fn encode_ppm(frame: &PixelBuffer) -> Vec<u8> {
    let header = ppm_header(frame.width(), frame.height());
    let mut out = Vec::with_capacity(header.len() + frame.as_bytes().len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(frame.as_bytes());
    out
}

/// Writes each frame as `frame{index}.ppm` under a directory
pub struct PpmDirSink {
    dir: PathBuf,
}

impl PpmDirSink {
    /// Create the sink, creating the output directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, SinkError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path a given frame index is written to
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame{}.ppm", index))
    }
}

impl FrameSink for PpmDirSink {
    fn write_frame(&self, index: usize, frame: &PixelBuffer) -> Result<(), SinkError> {
        let file = fs::File::create(self.frame_path(index))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(ppm_header(frame.width(), frame.height()).as_bytes())?;
        writer.write_all(frame.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
