//! Uniform match/mismatch scoring over a fixed alphabet.

use crate::AlignError;

use super::{Scorer, SubstitutionMatrix};

/// Scores equal symbols with `match_score` and unequal ones with
/// `mismatch_score`, for symbols in the alphabet only.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchMismatch {
    /// The score for two equal symbols.
    match_score: i32,
    /// The score for two different symbols.
    mismatch_score: i32,
    /// The symbols that may be scored.
    alphabet: Vec<u8>,
}

impl Default for MatchMismatch {
    fn default() -> Self {
        Self::new(1, -1, "ACGT")
    }
}

impl MatchMismatch {
    /// Create a new match/mismatch scheme over the symbols of `alphabet`.
    ///
    /// Repeated symbols in `alphabet` are ignored.
    #[must_use]
    pub fn new<A: AsRef<[u8]>>(match_score: i32, mismatch_score: i32, alphabet: A) -> Self {
        let alphabet = alphabet.as_ref().iter().fold(Vec::new(), |mut acc, &c| {
            if !acc.contains(&c) {
                acc.push(c);
            }
            acc
        });
        Self {
            match_score,
            mismatch_score,
            alphabet,
        }
    }

    /// The score for two equal symbols.
    #[must_use]
    pub const fn match_score(&self) -> i32 {
        self.match_score
    }

    /// The score for two different symbols.
    #[must_use]
    pub const fn mismatch_score(&self) -> i32 {
        self.mismatch_score
    }

    /// The symbols that may be scored.
    #[must_use]
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Whether the symbol is in the alphabet.
    #[must_use]
    pub fn contains(&self, c: u8) -> bool {
        self.alphabet.contains(&c)
    }
}

impl Scorer for MatchMismatch {
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignError> {
        if !(self.contains(a) && self.contains(b)) {
            Err(AlignError::unknown_symbol(a, b))
        } else if a == b {
            Ok(self.match_score)
        } else {
            Ok(self.mismatch_score)
        }
    }
}

impl From<&MatchMismatch> for SubstitutionMatrix {
    /// Expands the scheme into an explicit table over its alphabet.
    fn from(m: &MatchMismatch) -> Self {
        m.alphabet
            .iter()
            .flat_map(|&a| m.alphabet.iter().map(move |&b| (a, b)))
            .fold(Self::default(), |matrix, (a, b)| {
                let s = if a == b { m.match_score } else { m.mismatch_score };
                matrix.with_score(a, b, s)
            })
    }
}
