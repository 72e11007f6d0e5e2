//! Needleman-Wunsch global alignment.

use crate::{scoring::Scorer, AlignError};

use super::{add, Aligner, Direction, DpTable, Mode, PairwiseAlignment};

impl<S: Scorer + ?Sized> Aligner<'_, S> {
    /// Compute the dynamic programming table for global alignment.
    ///
    /// The top row and left column hold the cost of aligning a prefix against
    /// nothing but gaps. Every other cell takes the best of the diagonal, up
    /// and left moves, preferring them in that order on ties.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` if the scorer rejects a pair of residues.
    /// - `ScoreOverflow` if a cell score does not fit in an `i32`.
    pub fn global_table<X, Y>(&self, x: &X, y: &Y) -> Result<DpTable, AlignError>
    where
        X: AsRef<[u8]> + ?Sized,
        Y: AsRef<[u8]> + ?Sized,
    {
        let (x, y) = (x.as_ref(), y.as_ref());

        let mut table = vec![vec![(0, Direction::Stop); y.len() + 1]; x.len() + 1];

        // Residues of the second sequence against leading gaps.
        for j in 1..table[0].len() {
            table[0][j] = (add(table[0][j - 1].0, self.gap)?, Direction::Left);
        }

        // Residues of the first sequence against leading gaps.
        for i in 1..table.len() {
            table[i][0] = (add(table[i - 1][0].0, self.gap)?, Direction::Up);
        }

        // On iteration (i, j), we fill in the cell at (i + 1, j + 1).
        for (i, &xc) in x.iter().enumerate() {
            for (j, &yc) in y.iter().enumerate() {
                let diag = add(table[i][j].0, self.scorer.score(xc, yc)?)?;
                let up = add(table[i][j + 1].0, self.gap)?;
                let left = add(table[i + 1][j].0, self.gap)?;
                table[i + 1][j + 1] = Direction::best(diag, up, left);
            }
        }

        Ok(table)
    }

    /// Globally align two sequences.
    ///
    /// Empty sequences are valid: two empty sequences score 0 with empty rows.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` if the scorer rejects a pair of residues.
    /// - `ScoreOverflow` if a cell score does not fit in an `i32`.
    pub fn global<X, Y>(&self, x: &X, y: &Y) -> Result<PairwiseAlignment, AlignError>
    where
        X: AsRef<[u8]> + ?Sized,
        Y: AsRef<[u8]> + ?Sized,
    {
        let (x, y) = (x.as_ref(), y.as_ref());
        let table = self.global_table(x, y)?;

        let end = [x.len(), y.len()];
        let score = table[x.len()][y.len()].0;
        let (rows, start) = self.trace_back(x, y, &table, end, Mode::Global)?;

        ftlog::debug!(
            "Global alignment of lengths {} and {}: score {score}, width {}",
            x.len(),
            y.len(),
            rows[0].len()
        );

        Ok(PairwiseAlignment {
            mode: Mode::Global,
            score,
            rows,
            start,
            end,
        })
    }

    /// The optimal global score, without reconstructing the alignment.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` if the scorer rejects a pair of residues.
    /// - `ScoreOverflow` if a cell score does not fit in an `i32`.
    pub fn global_score<X, Y>(&self, x: &X, y: &Y) -> Result<i32, AlignError>
    where
        X: AsRef<[u8]> + ?Sized,
        Y: AsRef<[u8]> + ?Sized,
    {
        let table = self.global_table(x, y)?;
        Ok(table.last().and_then(|row| row.last()).map_or(0, |&(s, _)| s))
    }
}
