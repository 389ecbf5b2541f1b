//! # IOB Span Merging
//!
//! Sequence-labeling models emit one IOB tag per token (`O`, `B-<TYPE>`,
//! `I-<TYPE>`) alongside per-token character offsets. Consumers want whole
//! entities: one plain-tagged span per contiguous run.
//!
//! * [`IobTag`] classifies a raw label.
//! * [`merge_iob_spans`] runs the merge state machine.

pub mod merge;

#[doc(inline)]
pub use merge::{EntitySpan, IobTag, merge_iob_spans};
