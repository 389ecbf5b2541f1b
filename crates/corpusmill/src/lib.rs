//! # `corpusmill` Corpus Pipeline Support
//!
//! Small, pure building blocks for NLP corpus-processing pipelines:
//!
//! * [`chunking`] to plan chunk sizes and worker counts for a corpus.
//! * [`iob`] to merge token-level IOB tags and offsets into entity spans.
//! * [`idcodec`] to pack long hex identifiers into fixed-width integers.
//!
//! All three are deterministic input-to-output functions with no shared
//! state; they are safe to call concurrently without coordination.
//!
//! ## Crate Features
//!
//! #### feature: ``rayon``
//!
//! Enables the [`rayon`] module, which applies a [`chunking::ChunkPlan`]
//! to a record slice with `rayon` data parallelism; also lets
//! [`chunking::threads::est_max_parallelism`] honor rayon's thread-count
//! environment variables.
//!
//! Enabled by default.
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod chunking;
pub mod errors;
pub mod idcodec;
pub mod iob;

pub use chunking::{ChunkOptions, ChunkPlan, plan_chunks, plan_chunks_auto};
pub use errors::{CMResult, CorpusmillError};
pub use idcodec::{EncodedId, decode_id, encode_id};
pub use iob::{EntitySpan, merge_iob_spans};
