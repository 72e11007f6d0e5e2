//! All-vs-all pairwise scores.
//!
//! Each pair is an independent call to the aligner. The parallel variants run
//! whole pairwise alignments concurrently; a single DP table is always filled
//! by one thread.

use rayon::prelude::*;

use crate::{
    pairwise::{Aligner, Mode},
    scoring::Scorer,
    AlignError,
};

/// The optimal score for every ordered pair of sequences.
///
/// Entry `[i][j]` is the score of aligning sequence `i` (first) against
/// sequence `j` (second).
///
/// # Errors
///
/// - `UnknownSymbol` if the scorer rejects a pair of residues.
/// - `ScoreOverflow` if a cell score does not fit in an `i32`.
///
/// The error for the first failing pair, in row-major order, is returned.
pub fn pairwise_scores<S, I>(aligner: &Aligner<S>, mode: Mode, sequences: &[I]) -> Result<Vec<Vec<i32>>, AlignError>
where
    S: Scorer + ?Sized,
    I: AsRef<[u8]>,
{
    sequences
        .iter()
        .map(|x| {
            sequences
                .iter()
                .map(|y| score(aligner, mode, x.as_ref(), y.as_ref()))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Parallel version of [`pairwise_scores`].
///
/// # Errors
///
/// See [`pairwise_scores`].
pub fn par_pairwise_scores<S, I>(
    aligner: &Aligner<S>,
    mode: Mode,
    sequences: &[I],
) -> Result<Vec<Vec<i32>>, AlignError>
where
    S: Scorer + Sync + ?Sized,
    I: AsRef<[u8]> + Sync,
{
    ftlog::debug!(
        "Computing {} {mode} scores in parallel",
        sequences.len() * sequences.len()
    );

    // Every pair is scored before any error is checked, so the error reported
    // is the first one in row-major order.
    let results = sequences
        .par_iter()
        .map(|x| {
            sequences
                .par_iter()
                .map(|y| score(aligner, mode, x.as_ref(), y.as_ref()))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    results
        .into_iter()
        .map(|row| row.into_iter().collect::<Result<Vec<_>, _>>())
        .collect()
}

/// The score of one pair, skipping traceback for global alignment.
fn score<S: Scorer + ?Sized>(aligner: &Aligner<S>, mode: Mode, x: &[u8], y: &[u8]) -> Result<i32, AlignError> {
    match mode {
        Mode::Global => aligner.global_score(x, y),
        Mode::Local => aligner.local_table(x, y).map(|(table, [i, j])| table[i][j].0),
    }
}
