//! Errors raised by the aligners and their collaborators.

use thiserror::Error;

/// Everything that can go wrong while scoring, aligning or merging sequences.
///
/// No operation returns a partial result: every variant aborts the whole call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A required sequence was not supplied.
    #[error("Missing input sequence: {which}")]
    MissingInput {
        /// Which argument was absent.
        which: &'static str,
    },
    /// Progressive alignment needs at least two sequences.
    #[error("Progressive alignment needs at least two sequences, but {found} were given")]
    InsufficientInput {
        /// The number of sequences that were supplied.
        found: usize,
    },
    /// The scorer has no entry for the pair of symbols.
    #[error("No substitution score for the pair ({a}, {b})")]
    UnknownSymbol {
        /// The symbol from the first sequence.
        a: char,
        /// The symbol from the second sequence.
        b: char,
    },
    /// A row of an alignment does not have the same width as the others.
    #[error("Row {row} of the alignment has length {found}, expected {expected}")]
    LengthMismatch {
        /// The index of the offending row.
        row: usize,
        /// The width shared by the preceding rows.
        expected: usize,
        /// The width of the offending row.
        found: usize,
    },
    /// An alignment with no rows was given where at least one is required.
    #[error("The alignment has no rows")]
    EmptyAlignment,
    /// A gap column was requested past the end of the rebuilt alignment.
    #[error("Cannot insert a gap column at {index} in an alignment of width {width}")]
    GapIndexOutOfBounds {
        /// The requested column.
        index: usize,
        /// The width of the alignment after all insertions.
        width: usize,
    },
    /// A DP cell score does not fit in an `i32`.
    #[error("Alignment score overflowed an i32")]
    ScoreOverflow,
    /// A DP table does not have one row per prefix of the first sequence and
    /// one column per prefix of the second.
    #[error("Expected a DP table of shape {expected:?}, found {found:?}")]
    TableMismatch {
        /// The shape implied by the sequences.
        expected: [usize; 2],
        /// The shape of the table, or of its first ragged row.
        found: [usize; 2],
    },
    /// Traceback started outside the table or moved off its edge.
    #[error("Traceback left the DP table at cell {cell:?}")]
    TracebackOutOfBounds {
        /// The cell that was outside the table or whose move left it.
        cell: [usize; 2],
    },
    /// A substitution table could not be parsed.
    #[error("Failed to parse substitution table: {0}")]
    Parse(String),
}

impl AlignError {
    /// The error for a pair of bytes missing from a scorer's domain.
    #[must_use]
    pub fn unknown_symbol(a: u8, b: u8) -> Self {
        Self::UnknownSymbol {
            a: char::from(a),
            b: char::from(b),
        }
    }
}
