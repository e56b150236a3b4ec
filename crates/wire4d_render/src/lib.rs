//! Wireframe Rendering Library
//!
//! CPU rasterization pipeline for the wire4d renderer.
//!
//! ## Key Components
//!
//! - [`frame::PixelBuffer`] - row-major RGB buffer with a white background
//! - [`raster::draw_line`] - Wu-style anti-aliased line rasterizer
//! - [`wireframe::Wireframe4`] - vertex/edge geometry (tesseract constructor)
//! - [`compositor`] - screen-space projection and edge rasterization
//! - [`animation::Animation`] - frame index -> pixel buffer, a pure function
//! - [`partition::WorkerShare`] - deterministic frame assignment per worker
//! - [`sink::FrameSink`] - persistence seam ([`sink::PpmDirSink`] writes PPM)
//!
//! [`render`] fans the animation out across a fixed pool of workers. Frame
//! computation never touches shared mutable state, so workers need no
//! locks; the geometry is shared read-only.

pub mod animation;
pub mod compositor;
pub mod frame;
pub mod partition;
pub mod raster;
pub mod sink;
pub mod wireframe;

pub use animation::Animation;
pub use frame::{PixelBuffer, Rgb};
pub use partition::{WorkerShare, BATCH_SIZE};
pub use sink::{encode_ppm, FrameSink, PpmDirSink, SinkError};
pub use wireframe::Wireframe4;

use std::thread;

/// Render `framecount` frames across `workers` parallel workers
///
/// Each worker renders its [`WorkerShare`] batch by batch: a batch of
/// frames is computed, then written to the sink and released. `progress`
/// is called once per persisted frame with its index; it is observational
/// only. A sink failure stops that worker's batch and becomes the result
/// of the whole render (first error wins; other workers run to
/// completion).
///
/// Panics if `workers` is zero.
pub fn render<S, P>(
    animation: &Animation,
    framecount: usize,
    sink: &S,
    workers: usize,
    progress: P,
) -> Result<(), SinkError>
where
    S: FrameSink + ?Sized,
    P: Fn(usize) + Sync,
{
    assert!(workers > 0, "worker count must be positive");
    log::info!(
        "rendering {} frames at {}x{} across {} workers",
        framecount,
        animation.width(),
        animation.height(),
        workers
    );

    let progress = &progress;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let share = WorkerShare::new(worker, workers, framecount);
            handles.push(scope.spawn(move || run_worker(animation, share, sink, progress)));
        }

        let mut result = Ok(());
        for handle in handles {
            match handle.join() {
                Ok(worker_result) => {
                    if result.is_ok() {
                        result = worker_result;
                    }
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        result
    })
}

fn run_worker<S, P>(
    animation: &Animation,
    share: WorkerShare,
    sink: &S,
    progress: &P,
) -> Result<(), SinkError>
where
    S: FrameSink + ?Sized,
    P: Fn(usize) + Sync,
{
    for batch in share.batches() {
        let frames: Vec<(usize, PixelBuffer)> = batch
            .into_iter()
            .map(|index| (index, animation.render_frame(index)))
            .collect();

        for (index, frame) in &frames {
            if let Err(err) = sink.write_frame(*index, frame) {
                log::error!("failed to write frame {}: {}", index, err);
                return Err(err);
            }
            progress(*index);
        }
    }
    log::debug!("worker {:?} finished", share);
    Ok(())
}
