//! # Corpus Chunk Planning
//!
//! This module decides how a corpus of records should be partitioned for
//! parallel processing:
//!
//! * [`ChunkOptions`] bounds the chunk size a caller will accept.
//! * [`plan_chunks`] turns a record count and a parallelism degree into a
//!   [`ChunkPlan`] of chunk size, batch count, and worker count.
//!
//! The planner only *plans*; dispatching chunks to workers is the caller's
//! business (see the crate's `rayon` module for an in-process dispatcher).

pub mod chunk_plan;
pub mod threads;

#[doc(inline)]
pub use chunk_plan::{ChunkOptions, ChunkPlan, plan_chunks, plan_chunks_auto};
