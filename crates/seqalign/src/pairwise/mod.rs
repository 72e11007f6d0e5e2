//! Pairwise alignment with Needleman-Wunsch (global) and Smith-Waterman
//! (local) dynamic programming.

mod global;
mod local;
pub mod ops;

use core::fmt;

use crate::{scoring::Scorer, AlignError, GAP};

pub use ops::Direction;

/// A table of scores and moves between prefixes of two sequences.
///
/// Rows are indexed by the first sequence and columns by the second, so the
/// cell at `(i, j)` holds the best score for `x[..i]` against `y[..j]`.
pub type DpTable = Vec<Vec<(i32, Direction)>>;

/// The gap penalty used when none is given.
pub const DEFAULT_GAP: i32 = -1;

/// Adds two DP scores.
///
/// # Errors
///
/// - `ScoreOverflow` if the sum does not fit in an `i32`.
pub(crate) fn add(a: i32, b: i32) -> Result<i32, AlignError> {
    a.checked_add(b).ok_or(AlignError::ScoreOverflow)
}

/// Which optimal alignment to compute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Needleman-Wunsch over both whole sequences.
    #[default]
    Global,
    /// Smith-Waterman over the best-scoring pair of substrings.
    Local,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// The result of aligning two sequences.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PairwiseAlignment {
    /// The mode that produced the alignment.
    pub mode: Mode,
    /// The optimal score.
    pub score: i32,
    /// The two aligned rows, of equal length.
    pub rows: [Vec<u8>; 2],
    /// Where the aligned region starts in each input sequence.
    pub start: [usize; 2],
    /// Where the aligned region ends (exclusive) in each input sequence.
    pub end: [usize; 2],
}

impl PairwiseAlignment {
    /// The number of alignment columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether the alignment has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows[0].is_empty()
    }

    /// The aligned rows as strings.
    #[must_use]
    pub fn strings(&self) -> [String; 2] {
        let [x, y] = &self.rows;
        [
            String::from_utf8_lossy(x).to_string(),
            String::from_utf8_lossy(y).to_string(),
        ]
    }

    /// The fraction of columns holding the same residue in both rows.
    ///
    /// This is 0 for an empty alignment.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let [x, y] = &self.rows;
        let matches = x.iter().zip(y).filter(|&(&a, &b)| a == b && a != GAP).count();
        matches as f64 / self.width() as f64
    }
}

/// A pairwise aligner over a borrowed scorer and a linear gap penalty.
///
/// Every call builds its DP table from scratch; nothing is kept between calls.
#[derive(Debug)]
pub struct Aligner<'a, S: Scorer + ?Sized> {
    /// The source of substitution scores.
    scorer: &'a S,
    /// The score added for every gap column.
    gap: i32,
}

impl<S: Scorer + ?Sized> Clone for Aligner<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scorer + ?Sized> Copy for Aligner<'_, S> {}

impl<'a, S: Scorer + ?Sized> Aligner<'a, S> {
    /// Create a new aligner with the default gap penalty of -1.
    pub const fn new(scorer: &'a S) -> Self {
        Self {
            scorer,
            gap: DEFAULT_GAP,
        }
    }

    /// Set the gap penalty.
    #[must_use]
    pub const fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    /// The gap penalty.
    #[must_use]
    pub const fn gap(&self) -> i32 {
        self.gap
    }

    /// The scorer.
    #[must_use]
    pub const fn scorer(&self) -> &'a S {
        self.scorer
    }

    /// Align two sequences in the given mode.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` if the scorer rejects a pair of residues.
    /// - `ScoreOverflow` if a cell score does not fit in an `i32`.
    pub fn align<X, Y>(&self, mode: Mode, x: &X, y: &Y) -> Result<PairwiseAlignment, AlignError>
    where
        X: AsRef<[u8]> + ?Sized,
        Y: AsRef<[u8]> + ?Sized,
    {
        match mode {
            Mode::Global => self.global(x, y),
            Mode::Local => self.local(x, y),
        }
    }

    /// Align two sequences that may not have been supplied.
    ///
    /// # Errors
    ///
    /// - `MissingInput` if either sequence is `None`.
    /// - See `align`.
    pub fn align_optional<X, Y>(&self, mode: Mode, x: Option<&X>, y: Option<&Y>) -> Result<PairwiseAlignment, AlignError>
    where
        X: AsRef<[u8]> + ?Sized,
        Y: AsRef<[u8]> + ?Sized,
    {
        let x = x.ok_or(AlignError::MissingInput { which: "first sequence" })?;
        let y = y.ok_or(AlignError::MissingInput { which: "second sequence" })?;
        self.align(mode, x, y)
    }

    /// Walk the recorded moves back from `end`, emitting aligned columns.
    ///
    /// In global mode the walk ends at the origin. In local mode it also ends
    /// at any cell on the top row or left column, or any cell scoring zero.
    ///
    /// # Returns
    ///
    /// The two aligned rows, read left to right, and the cell where the walk
    /// ended.
    ///
    /// # Errors
    ///
    /// - `TableMismatch` if `table` is not `(x.len() + 1) × (y.len() + 1)`.
    /// - `TracebackOutOfBounds` if `end` is not a cell of `table`, or a
    ///   recorded move leaves the table.
    #[allow(clippy::type_complexity)]
    pub fn trace_back(
        &self,
        x: &[u8],
        y: &[u8],
        table: &DpTable,
        end: [usize; 2],
        mode: Mode,
    ) -> Result<([Vec<u8>; 2], [usize; 2]), AlignError> {
        let expected = [x.len() + 1, y.len() + 1];
        if table.len() != expected[0] {
            return Err(AlignError::TableMismatch {
                expected,
                found: [table.len(), table.first().map_or(0, Vec::len)],
            });
        }
        if let Some(row) = table.iter().find(|row| row.len() != expected[1]) {
            return Err(AlignError::TableMismatch {
                expected,
                found: [table.len(), row.len()],
            });
        }
        if end[0] >= expected[0] || end[1] >= expected[1] {
            return Err(AlignError::TracebackOutOfBounds { cell: end });
        }

        let [mut i, mut j] = end;
        let [mut x_aligned, mut y_aligned] = [Vec::with_capacity(i + j), Vec::with_capacity(i + j)];

        loop {
            let (score, direction) = table[i][j];
            if mode == Mode::Local && (i == 0 || j == 0 || score <= 0) {
                break;
            }
            let off_table = AlignError::TracebackOutOfBounds { cell: [i, j] };
            match direction {
                Direction::Diagonal => {
                    let (Some(pi), Some(pj)) = (i.checked_sub(1), j.checked_sub(1)) else {
                        return Err(off_table);
                    };
                    x_aligned.push(x[pi]);
                    y_aligned.push(y[pj]);
                    [i, j] = [pi, pj];
                }
                Direction::Up => {
                    let Some(pi) = i.checked_sub(1) else {
                        return Err(off_table);
                    };
                    x_aligned.push(x[pi]);
                    y_aligned.push(GAP);
                    i = pi;
                }
                Direction::Left => {
                    let Some(pj) = j.checked_sub(1) else {
                        return Err(off_table);
                    };
                    x_aligned.push(GAP);
                    y_aligned.push(y[pj]);
                    j = pj;
                }
                Direction::Stop => break,
            }
        }

        x_aligned.reverse();
        y_aligned.reverse();

        Ok(([x_aligned, y_aligned], [i, j]))
    }
}
