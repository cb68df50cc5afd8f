use rayon::prelude::*;

use crate::eval::evaluator::Evaluator;
use crate::eval::fingerprint::fingerprint_properties;
use crate::eval::motion::Motion;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{MotionError, MotionResult};
use crate::style::properties::PropertySet;

/// How [`sample_range`] spreads work across threads.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SampleThreading {
    /// Evaluate on a dedicated rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames handed to the pool per batch.
    pub chunk_size: usize,
    /// Pool size; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for SampleThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters reported by [`sample_range_with_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames whose properties equal the previous frame's (e.g. before a delay or after
    /// settling). Consumers can skip re-rendering these.
    pub frames_static: u64,
}

/// Evaluate `motion` at every frame of `range`, in frame order.
///
/// Sequential and parallel sampling produce bit-identical output.
pub fn sample_range(
    evaluator: &Evaluator,
    range: FrameRange,
    motion: &Motion,
    threading: &SampleThreading,
) -> MotionResult<Vec<PropertySet>> {
    sample_range_with_stats(evaluator, range, motion, threading).map(|(sets, _)| sets)
}

/// [`sample_range`] plus [`SampleStats`].
#[tracing::instrument(skip(evaluator, motion), fields(frames = range.len_frames()))]
pub fn sample_range_with_stats(
    evaluator: &Evaluator,
    range: FrameRange,
    motion: &Motion,
    threading: &SampleThreading,
) -> MotionResult<(Vec<PropertySet>, SampleStats)> {
    if range.is_empty() {
        return Err(MotionError::validation("sample range must be non-empty"));
    }

    let len = usize::try_from(range.len_frames())
        .map_err(|_| MotionError::sampling("sample range does not fit in memory"))?;
    let mut out = Vec::with_capacity(len.min(1 << 16));

    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
            let n = (chunk_end - chunk_start) as usize;
            let chunk = pool.install(|| {
                (0..n)
                    .into_par_iter()
                    .map(|i| evaluator.evaluate_motion(FrameIndex(chunk_start + i as u64), motion))
                    .collect::<Vec<_>>()
            });
            out.extend(chunk);
            chunk_start = chunk_end;
        }
    } else {
        out.extend(range.frames().map(|f| evaluator.evaluate_motion(f, motion)));
    }

    let stats = SampleStats {
        frames_total: out.len() as u64,
        frames_static: count_static(&out),
    };
    tracing::debug!(
        frames_total = stats.frames_total,
        frames_static = stats.frames_static,
        "sampled range"
    );
    Ok((out, stats))
}

fn count_static(sets: &[PropertySet]) -> u64 {
    sets.windows(2)
        .filter(|w| fingerprint_properties(&w[0]) == fingerprint_properties(&w[1]))
        .count() as u64
}

fn build_thread_pool(threads: Option<usize>) -> MotionResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MotionError::validation(
            "sampling threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MotionError::sampling(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sampling.rs"]
mod tests;
