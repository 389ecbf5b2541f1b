//! # Error Types

/// Errors from corpusmill operations.
#[derive(Debug, thiserror::Error)]
pub enum CorpusmillError {
    /// Chunk planning was asked to partition an empty corpus.
    #[error("cannot plan chunks for an empty corpus")]
    EmptyCorpus,

    /// An identifier's length is not one of the supported widths.
    #[error("id length ({len}) must be one of 24, 32, or 40")]
    InvalidIdLength {
        /// The rejected identifier length.
        len: usize,
    },

    /// An identifier contained a character outside the hex alphabet.
    #[error("id contains non-hex character {digit:?}")]
    InvalidHexDigit {
        /// The offending character.
        digit: char,
    },

    /// An identifier segment failed base-16 integer parsing.
    #[error("invalid hex segment: {0}")]
    InvalidHexSegment(#[from] core::num::ParseIntError),

    /// A decoded identifier's length disagrees with its stored length.
    ///
    /// This signals corrupted stored integers; it is not recoverable.
    #[error("decoded id length ({actual}) does not match stored length ({expected})")]
    LengthMismatch {
        /// The length recorded at encode time.
        expected: usize,
        /// The length of the reconstructed identifier.
        actual: usize,
    },
}

/// Result type for corpusmill operations.
pub type CMResult<T> = core::result::Result<T, CorpusmillError>;
