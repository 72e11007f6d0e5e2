//! Substitution scoring for the aligners.
//!
//! The aligners only need one capability from a scoring source: the score for
//! substituting one symbol with another. That capability is the [`Scorer`]
//! trait, with two concrete sources:
//!
//! - [`SubstitutionMatrix`], a dense and possibly asymmetric lookup table such
//!   as BLOSUM62.
//! - [`MatchMismatch`], a generated scheme that rewards equal symbols and
//!   penalizes unequal ones over a fixed alphabet.
//!
//! [`ScoringScheme`] picks one of the two at construction time.

mod match_mismatch;
mod substitution_matrix;

pub use match_mismatch::MatchMismatch;
pub use substitution_matrix::SubstitutionMatrix;

use crate::AlignError;

/// The number of distinct byte symbols.
pub(crate) const NUM_CHARS: usize = 1 + (u8::MAX as usize);

/// A source of pairwise substitution scores.
pub trait Scorer {
    /// The score for aligning symbol `a` from the first sequence against
    /// symbol `b` from the second sequence.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` if either symbol is outside the scorer's domain.
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignError>;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignError> {
        (**self).score(a, b)
    }
}

/// A scoring source chosen at runtime.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringScheme {
    /// A dense substitution table.
    Matrix(SubstitutionMatrix),
    /// Uniform match and mismatch scores over an alphabet.
    MatchMismatch(MatchMismatch),
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::Matrix(SubstitutionMatrix::blosum62())
    }
}

impl Scorer for ScoringScheme {
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignError> {
        match self {
            Self::Matrix(m) => m.score(a, b),
            Self::MatchMismatch(m) => m.score(a, b),
        }
    }
}

impl From<SubstitutionMatrix> for ScoringScheme {
    fn from(m: SubstitutionMatrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<MatchMismatch> for ScoringScheme {
    fn from(m: MatchMismatch) -> Self {
        Self::MatchMismatch(m)
    }
}
