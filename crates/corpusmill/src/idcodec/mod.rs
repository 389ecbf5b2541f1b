//! # Hex Identifier Codec
//!
//! Document stores hand out hex identifiers of 24, 32, or 40 digits. Those
//! exceed 64-bit integer range as single values, but numeric record layouts
//! (tensor fields, fixed-width columns) want integers. [`encode_id`] packs
//! an identifier into four `u64`s; [`decode_id`] reverses it exactly.
//!
//! Hex case is normalized to lowercase: encoding accepts either case, and
//! decoding always emits lowercase, so
//! `decode_id(&encode_id(Some(id))?)` returns `id.to_lowercase()`.

use crate::errors::{CMResult, CorpusmillError};

/// Identifier lengths the codec accepts.
pub const SUPPORTED_LENGTHS: [usize; 3] = [24, 32, 40];

/// Segment widths (in hex digits) for a supported id length.
///
/// Length 40 splits as 14/13/13. Other lengths split at `len / 3`, with
/// the final segment absorbing the division remainder (10/10/12 for
/// length 32), so the partition always consumes the whole identifier.
fn segment_widths(len: usize) -> (usize, usize, usize) {
    if len == 40 {
        (14, 13, 13)
    } else {
        let third = len / 3;
        (third, third, len - 2 * third)
    }
}

/// A hex identifier packed into four fixed-width integers.
///
/// The all-zero value ([`EncodedId::NONE`]) is the canonical sentinel for
/// an absent identifier. Each segment is at most 14 hex digits (56 bits),
/// so `u64` parts are sufficient by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodedId {
    /// Length of the original identifier in hex digits; 0 when absent.
    pub len: u64,

    /// The three packed segments, in identifier order.
    pub parts: [u64; 3],
}

impl EncodedId {
    /// The canonical "no id" sentinel.
    pub const NONE: EncodedId = EncodedId {
        len: 0,
        parts: [0; 3],
    };

    /// Whether this value is the absent-id sentinel.
    pub fn is_none(&self) -> bool {
        self.len == 0
    }
}

/// Pack a hex identifier into an [`EncodedId`].
///
/// `None` encodes to [`EncodedId::NONE`].
///
/// ## Errors
/// * [`CorpusmillError::InvalidIdLength`] when the id length is not one
///   of [`SUPPORTED_LENGTHS`].
/// * [`CorpusmillError::InvalidHexDigit`] when the id contains a
///   character outside `[0-9a-fA-F]`.
pub fn encode_id(id: Option<&str>) -> CMResult<EncodedId> {
    let Some(id) = id else {
        return Ok(EncodedId::NONE);
    };

    let len = id.len();
    if !SUPPORTED_LENGTHS.contains(&len) {
        return Err(CorpusmillError::InvalidIdLength { len });
    }

    // Pure-hex ids are ASCII, which makes the byte-offset splits below
    // character-safe.
    if let Some(digit) = id.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CorpusmillError::InvalidHexDigit { digit });
    }

    let (w1, w2, _) = segment_widths(len);
    let parts = [
        u64::from_str_radix(&id[..w1], 16)?,
        u64::from_str_radix(&id[w1..w1 + w2], 16)?,
        u64::from_str_radix(&id[w1 + w2..], 16)?,
    ];

    Ok(EncodedId {
        len: len as u64,
        parts,
    })
}

/// Reconstruct the hex identifier packed in an [`EncodedId`].
///
/// Each part is rendered as lowercase hex and left-zero-padded back to
/// its encode-time segment width; integer parsing drops leading zero
/// digits, so the padding is what makes the codec lossless.
///
/// Returns `Ok(None)` for the absent-id sentinel.
///
/// ## Errors
/// * [`CorpusmillError::InvalidIdLength`] when the stored length is not
///   one of [`SUPPORTED_LENGTHS`] (or 0).
/// * [`CorpusmillError::LengthMismatch`] when a part overflows its
///   segment width; this signals corrupted stored integers.
pub fn decode_id(encoded: &EncodedId) -> CMResult<Option<String>> {
    if encoded.is_none() {
        return Ok(None);
    }

    let len = encoded.len as usize;
    if !SUPPORTED_LENGTHS.contains(&len) {
        return Err(CorpusmillError::InvalidIdLength { len });
    }

    let (w1, w2, w3) = segment_widths(len);
    let [p1, p2, p3] = encoded.parts;
    let id = format!("{p1:0w1$x}{p2:0w2$x}{p3:0w3$x}");

    if id.len() != len {
        return Err(CorpusmillError::LengthMismatch {
            expected: len,
            actual: id.len(),
        });
    }

    Ok(Some(id))
}
