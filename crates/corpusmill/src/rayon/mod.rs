//! # Parallelism Wrappers
//!
//! Enables ``rayon`` dispatch of a [`crate::chunking::ChunkPlan`].

pub mod par_chunks;

#[doc(inline)]
pub use par_chunks::par_map_chunks;
