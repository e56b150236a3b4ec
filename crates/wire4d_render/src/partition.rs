//! Work partitioning
//!
//! Frame index `i` belongs to worker `i mod N`. Each worker walks its
//! indices in ascending order, chunked into fixed-size batches so a worker
//! only ever holds one batch of finished frames in memory before handing
//! them to the sink. Assignment is a pure function of `(i, N)`; workers
//! never coordinate.

/// Frames rendered per batch before they are flushed to the sink
pub const BATCH_SIZE: usize = 50;

/// One worker's deterministic share of the animation timeline
#[derive(Clone, Copy, Debug)]
pub struct WorkerShare {
    worker: usize,
    workers: usize,
    framecount: usize,
}

impl WorkerShare {
    /// Share of `framecount` frames owned by `worker` out of `workers`
    ///
    /// Panics if `worker >= workers` or `workers == 0`.
    pub fn new(worker: usize, workers: usize, framecount: usize) -> Self {
        assert!(workers > 0, "worker count must be positive");
        assert!(worker < workers, "worker index out of range");
        Self {
            worker,
            workers,
            framecount,
        }
    }

    /// This worker's frame indices in ascending order
    pub fn frames(&self) -> impl Iterator<Item = usize> {
        let share = *self;
        (share.worker..share.framecount).step_by(share.workers)
    }

    /// Number of frames in this share
    pub fn len(&self) -> usize {
        if self.worker >= self.framecount {
            0
        } else {
            (self.framecount - self.worker).div_ceil(self.workers)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The share grouped into batches of at most [`BATCH_SIZE`] frames
    pub fn batches(&self) -> impl Iterator<Item = Vec<usize>> {
        let mut frames = self.frames().peekable();
        std::iter::from_fn(move || {
            frames.peek()?;
            Some(frames.by_ref().take(BATCH_SIZE).collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_striding() {
        let share = WorkerShare::new(1, 4, 12);
        let frames: Vec<usize> = share.frames().collect();
        assert_eq!(frames, vec![1, 5, 9]);
    }

    #[test]
    fn test_single_worker_owns_everything() {
        let share = WorkerShare::new(0, 1, 5);
        let frames: Vec<usize> = share.frames().collect();
        assert_eq!(frames, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_every_frame_assigned_exactly_once() {
        for &(framecount, workers) in &[(0, 3), (1, 1), (7, 3), (100, 8), (1800, 12), (13, 16)] {
            let mut seen = vec![0usize; framecount];
            for worker in 0..workers {
                for i in WorkerShare::new(worker, workers, framecount).frames() {
                    seen[i] += 1;
                }
            }
            assert!(
                seen.iter().all(|&n| n == 1),
                "framecount={} workers={}",
                framecount,
                workers
            );
        }
    }

    #[test]
    fn test_len_matches_iterator() {
        for &(framecount, workers) in &[(0, 2), (50, 3), (1800, 7), (3, 8)] {
            for worker in 0..workers {
                let share = WorkerShare::new(worker, workers, framecount);
                assert_eq!(share.len(), share.frames().count());
            }
        }
    }

    #[test]
    fn test_batches_bound_memory() {
        let share = WorkerShare::new(0, 2, 250);
        let batches: Vec<Vec<usize>> = share.batches().collect();
        // 125 frames in batches of 50
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), BATCH_SIZE);
        assert_eq!(batches[1].len(), BATCH_SIZE);
        assert_eq!(batches[2].len(), 25);
    }

    #[test]
    fn test_batches_preserve_order() {
        let share = WorkerShare::new(2, 3, 400);
        let from_batches: Vec<usize> = share.batches().flatten().collect();
        let from_frames: Vec<usize> = share.frames().collect();
        assert_eq!(from_batches, from_frames);
    }

    #[test]
    fn test_empty_share_has_no_batches() {
        let share = WorkerShare::new(5, 8, 3);
        assert!(share.is_empty());
        assert_eq!(share.batches().count(), 0);
    }

    #[test]
    #[should_panic(expected = "worker index out of range")]
    fn test_worker_out_of_range_panics() {
        WorkerShare::new(4, 4, 10);
    }
}
