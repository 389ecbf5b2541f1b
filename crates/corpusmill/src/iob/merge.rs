//! # IOB Merge State Machine

use core::ops::Range;

/// A classified IOB label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IobTag<'a> {
    /// Not part of any entity.
    Outside,

    /// First token of an entity of the given type.
    Begin(&'a str),

    /// Continuation token of an entity of the given type.
    Inside(&'a str),
}

impl<'a> IobTag<'a> {
    /// Classify a raw label by its `B-` / `I-` prefix.
    ///
    /// Anything without either prefix (including the literal `O`) is
    /// [`IobTag::Outside`].
    pub fn parse(label: &'a str) -> Self {
        if let Some(tag) = label.strip_prefix("B-") {
            IobTag::Begin(tag)
        } else if let Some(tag) = label.strip_prefix("I-") {
            IobTag::Inside(tag)
        } else {
            IobTag::Outside
        }
    }
}

/// One merged entity: a plain (non-prefixed) tag over a token offset range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntitySpan {
    /// The entity type, without its IOB prefix.
    pub tag: String,

    /// Offsets spanning the entity's first token's `start` through its
    /// last token's `end`.
    pub range: Range<usize>,
}

/// Merge per-token IOB labels and offset ranges into entity spans.
///
/// Tokens are processed left to right against a single open-span state:
///
/// * `O` closes any open entity.
/// * `B-X` closes any open entity and opens a new `X` at this token.
/// * `I-X` extends an open `X` entity through this token's `end`; against
///   an open entity of a different type it closes that entity without
///   opening one; with nothing open it is dropped.
/// * Whatever is still open at the end of input is closed.
///
/// Entities are emitted in the order their opening token occurred.
///
/// Malformed input never fails: orphan `I-` tokens and mid-span type
/// mismatches are tolerated per the rules above. `tags` and `spans` must
/// be the same length (caller contract; the longer tail is ignored).
pub fn merge_iob_spans<S: AsRef<str>>(tags: &[S], spans: &[Range<usize>]) -> Vec<EntitySpan> {
    debug_assert_eq!(tags.len(), spans.len());

    let mut merged: Vec<EntitySpan> = Vec::new();
    let mut open: Option<EntitySpan> = None;

    for (label, span) in tags.iter().zip(spans) {
        match IobTag::parse(label.as_ref()) {
            IobTag::Outside => {
                if let Some(entity) = open.take() {
                    merged.push(entity);
                }
            }
            IobTag::Begin(tag) => {
                if let Some(entity) = open.take() {
                    merged.push(entity);
                }
                open = Some(EntitySpan {
                    tag: tag.to_string(),
                    range: span.clone(),
                });
            }
            IobTag::Inside(tag) => {
                let continues_open = open.as_ref().is_some_and(|e| e.tag == tag);
                if continues_open {
                    if let Some(entity) = open.as_mut() {
                        entity.range.end = span.end;
                    }
                } else if let Some(entity) = open.take() {
                    merged.push(entity);
                }
            }
        }
    }

    if let Some(entity) = open {
        merged.push(entity);
    }

    merged
}
