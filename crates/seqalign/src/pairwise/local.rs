//! Smith-Waterman local alignment.

use crate::{scoring::Scorer, AlignError};

use super::{add, Aligner, Direction, DpTable, Mode, PairwiseAlignment};

impl<S: Scorer + ?Sized> Aligner<'_, S> {
    /// Compute the dynamic programming table for local alignment.
    ///
    /// The top row and left column are zero, and every other cell is floored
    /// at zero. The floor is considered before the diagonal, up and left
    /// moves, so a cell that cannot score above zero is a `Stop`.
    ///
    /// # Returns
    ///
    /// The table and the first cell, in row-major order, holding its maximum
    /// score. That cell is `(0, 0)` when no pair of substrings scores above 0.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` if the scorer rejects a pair of residues.
    /// - `ScoreOverflow` if a cell score does not fit in an `i32`.
    pub fn local_table<X, Y>(&self, x: &X, y: &Y) -> Result<(DpTable, [usize; 2]), AlignError>
    where
        X: AsRef<[u8]> + ?Sized,
        Y: AsRef<[u8]> + ?Sized,
    {
        let (x, y) = (x.as_ref(), y.as_ref());

        let mut table = vec![vec![(0, Direction::Stop); y.len() + 1]; x.len() + 1];
        let (mut best, mut best_cell) = (0, [0, 0]);

        for (i, &xc) in x.iter().enumerate() {
            for (j, &yc) in y.iter().enumerate() {
                let diag = add(table[i][j].0, self.scorer.score(xc, yc)?)?;
                let up = add(table[i][j + 1].0, self.gap)?;
                let left = add(table[i + 1][j].0, self.gap)?;

                let cell = Direction::best_local(diag, up, left);
                if cell.0 > best {
                    best = cell.0;
                    best_cell = [i + 1, j + 1];
                }
                table[i + 1][j + 1] = cell;
            }
        }

        Ok((table, best_cell))
    }

    /// Locally align two sequences.
    ///
    /// The score is never negative. When no positive-scoring pair of
    /// substrings exists, the score is 0 and both rows are empty.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` if the scorer rejects a pair of residues.
    /// - `ScoreOverflow` if a cell score does not fit in an `i32`.
    pub fn local<X, Y>(&self, x: &X, y: &Y) -> Result<PairwiseAlignment, AlignError>
    where
        X: AsRef<[u8]> + ?Sized,
        Y: AsRef<[u8]> + ?Sized,
    {
        let (x, y) = (x.as_ref(), y.as_ref());
        let (table, end) = self.local_table(x, y)?;

        let score = table[end[0]][end[1]].0;
        let (rows, start) = self.trace_back(x, y, &table, end, Mode::Local)?;
        ftlog::trace!("Local traceback ran from {end:?} back to {start:?}");

        ftlog::debug!(
            "Local alignment of lengths {} and {}: score {score}, width {}",
            x.len(),
            y.len(),
            rows[0].len()
        );

        Ok(PairwiseAlignment {
            mode: Mode::Local,
            score,
            rows,
            start,
            end,
        })
    }
}
