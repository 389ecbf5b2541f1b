//! # Chunk Size Planning

use crate::errors::{CMResult, CorpusmillError};

/// Chunk size bounds for [`plan_chunks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkOptions {
    /// Smallest chunk size the caller will accept.
    ///
    /// Downstream samplers draw a second, distinct record from within a
    /// chunk, so this must be at least 2.
    pub min_chunk: usize,

    /// Largest chunk size the caller will accept; bounds per-task memory
    /// and spawn overhead for large corpora.
    pub max_chunk: usize,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            min_chunk: 4,
            max_chunk: 2000,
        }
    }
}

/// A work-partitioning plan for a corpus.
///
/// Produced by [`plan_chunks`]; consumed by a dispatch layer such as
/// [`crate::rayon::par_map_chunks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkPlan {
    /// Records per work unit.
    pub chunk_size: usize,

    /// Number of full chunks (`num_records / chunk_size`, floored).
    pub batches: usize,

    /// Number of workers worth spinning up; at least 1, at most the
    /// parallelism degree the plan was computed for.
    pub workers: usize,
}

/// Plan chunk size and worker count for a corpus of `num_records` records.
///
/// Small corpora get chunks small enough to keep every worker busy (but
/// never below `min_chunk`); large corpora are capped at `max_chunk` to
/// bound per-task overhead. The chunk size is then nudged upward until the
/// final chunk holds more than a single record, since a one-record chunk
/// starves samplers that need an alternate record from the same chunk.
///
/// The nudge loop is bounded by `max_chunk`; if the remainder is still 1 at
/// the ceiling, a warning is logged and the capped plan is returned.
///
/// ## Arguments
/// * `num_records` - total records to partition; must be non-zero.
/// * `parallelism` - available parallelism degree; values below 1 count as 1.
/// * `options` - chunk size bounds.
///
/// ## Returns
/// A [`ChunkPlan`], or [`CorpusmillError::EmptyCorpus`] when
/// `num_records == 0`.
pub fn plan_chunks(
    num_records: usize,
    parallelism: usize,
    options: &ChunkOptions,
) -> CMResult<ChunkPlan> {
    if num_records == 0 {
        return Err(CorpusmillError::EmptyCorpus);
    }
    debug_assert!(2 <= options.min_chunk && options.min_chunk <= options.max_chunk);

    let parallelism = parallelism.max(1);
    let per_worker = num_records.div_ceil(parallelism);

    let mut chunk_size = per_worker
        .div_ceil(5)
        .min(options.max_chunk)
        .max(options.min_chunk);

    while num_records % chunk_size == 1 && chunk_size < options.max_chunk {
        chunk_size += 1;
    }
    if num_records % chunk_size == 1 {
        log::warn!(
            "chunk size capped at {chunk_size}; the final chunk of {num_records} records holds a single record"
        );
    }

    let batches = num_records / chunk_size;
    let workers = parallelism.min(batches).max(1);

    Ok(ChunkPlan {
        chunk_size,
        batches,
        workers,
    })
}

/// [`plan_chunks`] against the host's parallelism degree.
///
/// See [`crate::chunking::threads::est_max_parallelism`].
pub fn plan_chunks_auto(
    num_records: usize,
    options: &ChunkOptions,
) -> CMResult<ChunkPlan> {
    plan_chunks(
        num_records,
        crate::chunking::threads::est_max_parallelism(),
        options,
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_plan_chunks_small_corpus() {
        // 100 records over 8 workers: 13 per worker, ceil(13/5) = 3,
        // clamped up to min_chunk = 4; 100 % 4 == 0, no nudge.
        let plan = plan_chunks(100, 8, &ChunkOptions::default()).unwrap();
        assert_eq!(
            plan,
            ChunkPlan {
                chunk_size: 4,
                batches: 25,
                workers: 8,
            }
        );
    }

    #[test]
    fn test_plan_chunks_large_corpus_caps_chunk_size() {
        let options = ChunkOptions::default();
        let plan = plan_chunks(1_000_000, 4, &options).unwrap();
        assert_eq!(plan.chunk_size, options.max_chunk);
        assert_eq!(plan.batches, 500);
        assert_eq!(plan.workers, 4);
    }

    #[test]
    fn test_plan_chunks_nudges_away_from_single_record_remainder() {
        // 9 records, chunk size 4 would leave a 1-record tail; nudged to 5.
        let plan = plan_chunks(9, 1, &ChunkOptions::default()).unwrap();
        assert_eq!(plan.chunk_size, 5);
        assert_eq!(plan.batches, 1);
        assert_eq!(plan.workers, 1);
    }

    #[test]
    fn test_plan_chunks_fewer_records_than_min_chunk() {
        // 3 records fit in a single sub-minimum chunk; still one worker.
        let plan = plan_chunks(3, 16, &ChunkOptions::default()).unwrap();
        assert_eq!(plan.chunk_size, 4);
        assert_eq!(plan.batches, 0);
        assert_eq!(plan.workers, 1);
    }

    #[test]
    fn test_plan_chunks_single_record_hits_ceiling() {
        // 1 % c == 1 for every c >= 2; the nudge loop must stop at max_chunk.
        let options = ChunkOptions {
            min_chunk: 2,
            max_chunk: 8,
        };
        let plan = plan_chunks(1, 4, &options).unwrap();
        assert_eq!(plan.chunk_size, 8);
        assert_eq!(plan.workers, 1);
    }

    #[test]
    fn test_plan_chunks_zero_parallelism_counts_as_one() {
        let plan = plan_chunks(40, 0, &ChunkOptions::default()).unwrap();
        assert_eq!(plan.workers, 1);
        assert_eq!(plan.chunk_size, 8);
    }

    #[test]
    fn test_plan_chunks_empty_corpus() {
        assert!(matches!(
            plan_chunks(0, 8, &ChunkOptions::default()),
            Err(crate::errors::CorpusmillError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_plan_chunks_auto() {
        let plan = plan_chunks_auto(100, &ChunkOptions::default()).unwrap();
        assert!(plan.workers >= 1);
        assert!(plan.chunk_size >= 4);
    }

    proptest! {
        #[test]
        fn test_plan_invariants(
            num_records in 1usize..100_000,
            parallelism in 0usize..64,
        ) {
            let options = ChunkOptions::default();
            let plan = plan_chunks(num_records, parallelism, &options).unwrap();

            prop_assert!(plan.workers >= 1);
            prop_assert!(plan.workers <= parallelism.max(1));
            prop_assert!(plan.chunk_size >= options.min_chunk);
            prop_assert!(plan.chunk_size <= options.max_chunk);
            prop_assert_eq!(plan.batches, num_records / plan.chunk_size);

            // The degenerate 1-record tail only survives at the ceiling.
            if plan.chunk_size < options.max_chunk {
                prop_assert_ne!(num_records % plan.chunk_size, 1);
            }
        }
    }
}
