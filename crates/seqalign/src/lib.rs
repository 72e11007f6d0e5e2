#![doc = include_str!("../README.md")]

mod error;

pub mod batch;
pub mod msa;
pub mod pairwise;
pub mod scoring;

pub use error::AlignError;
pub use msa::{consensus, Msa, Progressive};
pub use pairwise::{Aligner, Direction, Mode, PairwiseAlignment, DEFAULT_GAP};
pub use scoring::{MatchMismatch, Scorer, ScoringScheme, SubstitutionMatrix};

/// The symbol that marks a gap in an aligned sequence.
pub const GAP: u8 = b'-';

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";

/// Globally align two sequences with the Needleman-Wunsch algorithm.
///
/// # Errors
///
/// - `UnknownSymbol` if the scorer rejects a pair of residues.
/// - `ScoreOverflow` if a cell score does not fit in an `i32`.
pub fn global_align<S: Scorer + ?Sized>(x: &str, y: &str, scorer: &S, gap: i32) -> Result<PairwiseAlignment, AlignError> {
    Aligner::new(scorer).with_gap(gap).global(x, y)
}

/// Locally align two sequences with the Smith-Waterman algorithm.
///
/// # Errors
///
/// - `UnknownSymbol` if the scorer rejects a pair of residues.
/// - `ScoreOverflow` if a cell score does not fit in an `i32`.
pub fn local_align<S: Scorer + ?Sized>(x: &str, y: &str, scorer: &S, gap: i32) -> Result<PairwiseAlignment, AlignError> {
    Aligner::new(scorer).with_gap(gap).local(x, y)
}

/// Progressively align two or more sequences against their running consensus.
///
/// # Errors
///
/// - `InsufficientInput` if fewer than two sequences are given.
/// - `UnknownSymbol` if the scorer rejects a pair of residues.
/// - `ScoreOverflow` if a cell score does not fit in an `i32`.
pub fn progressive_align<S, I>(sequences: &[I], scorer: &S, gap: i32) -> Result<Msa, AlignError>
where
    S: Scorer + ?Sized,
    I: AsRef<[u8]>,
{
    Progressive::new(Aligner::new(scorer).with_gap(gap)).align(sequences)
}
