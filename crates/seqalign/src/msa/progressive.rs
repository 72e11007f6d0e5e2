//! Progressive alignment against an evolving consensus.

use crate::{
    pairwise::{Aligner, PairwiseAlignment},
    scoring::Scorer,
    AlignError, GAP,
};

use super::Msa;

/// Builds an MSA by globally aligning each new sequence against the consensus
/// of the sequences merged so far.
///
/// This is a greedy heuristic: the result depends on the order of the input,
/// and a merged sequence is never revisited.
#[derive(Debug)]
pub struct Progressive<'a, S: Scorer + ?Sized> {
    /// The global aligner used for every merge.
    aligner: Aligner<'a, S>,
}

impl<'a, S: Scorer + ?Sized> Progressive<'a, S> {
    /// Create a new progressive aligner.
    pub const fn new(aligner: Aligner<'a, S>) -> Self {
        Self { aligner }
    }

    /// The pairwise aligner.
    #[must_use]
    pub const fn aligner(&self) -> &Aligner<'a, S> {
        &self.aligner
    }

    /// Align the sequences, merging them in the order given.
    ///
    /// The first two sequences are aligned with each other. Every later
    /// sequence is merged with `merge`.
    ///
    /// # Errors
    ///
    /// - `InsufficientInput` if fewer than two sequences are given.
    /// - `UnknownSymbol` if the scorer rejects a pair of residues.
    /// - `ScoreOverflow` if a cell score does not fit in an `i32`.
    pub fn align<I: AsRef<[u8]>>(&self, sequences: &[I]) -> Result<Msa, AlignError> {
        let [first, second, rest @ ..] = sequences else {
            return Err(AlignError::InsufficientInput {
                found: sequences.len(),
            });
        };

        let mut msa = Msa::from(self.aligner.global(first.as_ref(), second.as_ref())?);
        ftlog::debug!("Seeded progressive MSA with width {}", msa.width());

        for (i, sequence) in rest.iter().enumerate() {
            self.merge(&mut msa, sequence.as_ref())?;
            ftlog::debug!("Merged sequence {} into MSA, width is now {}", i + 2, msa.width());
        }

        Ok(msa)
    }

    /// Merge one more sequence into an MSA.
    ///
    /// The sequence is globally aligned against the ungapped consensus of the
    /// MSA. Wherever that alignment puts a gap in the consensus, a gap column
    /// is inserted into every existing row. The aligned sequence then becomes
    /// the last row.
    ///
    /// # Errors
    ///
    /// - `EmptyAlignment` if the MSA has no rows.
    /// - `UnknownSymbol` if the scorer rejects a pair of residues.
    /// - `ScoreOverflow` if a cell score does not fit in an `i32`.
    /// - `LengthMismatch` if the consensus had all-gap columns, so that the
    ///   new row cannot line up with the existing ones.
    pub fn merge(&self, msa: &mut Msa, sequence: &[u8]) -> Result<(), AlignError> {
        let consensus = msa
            .consensus()?
            .into_iter()
            .filter(|&c| c != GAP)
            .collect::<Vec<_>>();

        let PairwiseAlignment {
            rows: [consensus_aligned, sequence_aligned],
            ..
        } = self.aligner.global(&consensus, sequence)?;

        let gap_columns = consensus_aligned
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == GAP)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        ftlog::trace!("Inserting gap columns at {gap_columns:?}");

        msa.insert_gap_columns(&gap_columns)?;
        msa.push_row(sequence_aligned)
    }
}
