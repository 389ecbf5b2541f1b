//! # Chunk-Plan Parallel Map

use rayon::prelude::*;

use crate::chunking::ChunkPlan;

/// Apply `f` to each chunk of `records` in parallel.
///
/// `records` is split into chunks of `plan.chunk_size` records (the final
/// chunk may be shorter); results preserve chunk order. Scheduling runs on
/// rayon's current thread pool, so `plan.workers` is advisory here — it is
/// meant for dispatchers that spawn their own workers.
///
/// ## Arguments
/// * `records` - the records to partition.
/// * `plan` - the partitioning plan; see [`crate::chunking::plan_chunks`].
/// * `f` - the per-chunk map function.
///
/// ## Returns
/// One result per chunk, in chunk order.
pub fn par_map_chunks<T, R, F>(records: &[T], plan: &ChunkPlan, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync + Send,
{
    records.par_chunks(plan.chunk_size).map(f).collect()
}
