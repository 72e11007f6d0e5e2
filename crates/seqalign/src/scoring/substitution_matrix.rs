//! A dense table of substitution scores.

use core::str::FromStr;

use crate::AlignError;

use super::{Scorer, NUM_CHARS};

/// The symbols of the built-in BLOSUM62 table, in row and column order.
const BLOSUM62_SYMBOLS: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZX-";

/// The BLOSUM62 scores, including the ambiguity codes `B`, `Z`, `X` and the
/// gap symbol.
#[rustfmt::skip]
const BLOSUM62: [[i32; 24]; 24] = [
    //A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V   B   Z   X   -
    [ 4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, -2, -1,  0, -4],  // A
    [-1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, -1,  0, -1, -4],  // R
    [-2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3,  3,  0, -1, -4],  // N
    [-2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3,  4,  1, -1, -4],  // D
    [ 0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, -3, -3, -2, -4],  // C
    [-1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2,  0,  3, -1, -4],  // Q
    [-1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4],  // E
    [ 0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, -1, -2, -1, -4],  // G
    [-2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3,  0,  0, -1, -4],  // H
    [-1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, -3, -3, -1, -4],  // I
    [-1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, -4, -3, -1, -4],  // L
    [-1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2,  0,  1, -1, -4],  // K
    [-1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, -3, -1, -1, -4],  // M
    [-2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, -3, -3, -1, -4],  // F
    [-1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, -2, -1, -2, -4],  // P
    [ 1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2,  0,  0,  0, -4],  // S
    [ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, -1, -1,  0, -4],  // T
    [-3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, -4, -3, -2, -4],  // W
    [-2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, -3, -2, -1, -4],  // Y
    [ 0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, -3, -2, -1, -4],  // V
    [-2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4,  1, -1, -4],  // B
    [-1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4, -1, -4],  // Z
    [ 0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1, -4],  // X
    [-4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1],  // -
];

/// A substitution matrix over byte symbols.
///
/// The table is a partial mapping: only the pairs that were set have a score,
/// and looking up any other pair is an error. The lookup is ordered, so
/// `score(a, b)` and `score(b, a)` are independent entries.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubstitutionMatrix {
    /// The score for each ordered pair of symbols, if one was set.
    scores: Vec<Vec<Option<i32>>>,
    /// The symbols with at least one score, in the order they were first set.
    symbols: Vec<u8>,
}

impl Default for SubstitutionMatrix {
    fn default() -> Self {
        Self {
            scores: vec![vec![None; NUM_CHARS]; NUM_CHARS],
            symbols: Vec::new(),
        }
    }
}

impl SubstitutionMatrix {
    /// The BLOSUM62 matrix for proteins.
    ///
    /// Covers the twenty amino acids, the ambiguity codes `B`, `Z` and `X`, and
    /// the gap symbol `-`.
    ///
    /// See [here](https://en.wikipedia.org/wiki/BLOSUM) for more information.
    #[must_use]
    pub fn blosum62() -> Self {
        BLOSUM62_SYMBOLS
            .iter()
            .zip(BLOSUM62.iter())
            .flat_map(|(&a, row)| BLOSUM62_SYMBOLS.iter().zip(row.iter()).map(move |(&b, &s)| (a, b, s)))
            .fold(Self::default(), |matrix, (a, b, s)| matrix.with_score(a, b, s))
    }

    /// Parses a whitespace-separated substitution table.
    ///
    /// The first non-empty line lists the column symbols. Every following
    /// non-empty line starts with its row symbol and has one integer per
    /// column.
    ///
    /// ```text
    ///    A  C
    /// A  2 -1
    /// C -1  2
    /// ```
    ///
    /// # Errors
    ///
    /// - `Parse` if the header is missing, a symbol is not a single byte, a row
    ///   has the wrong number of cells or a cell is not an integer.
    pub fn from_table(table: &str) -> Result<Self, AlignError> {
        let mut lines = table.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| AlignError::Parse("the table is empty".to_string()))?
            .split_whitespace()
            .map(parse_symbol)
            .collect::<Result<Vec<_>, _>>()?;

        lines.enumerate().try_fold(Self::default(), |matrix, (i, line)| {
            let mut cells = line.split_whitespace();
            let a = cells
                .next()
                .map(parse_symbol)
                .ok_or_else(|| AlignError::Parse(format!("row {i} is empty")))??;

            let scores = cells
                .map(|c| {
                    c.parse::<i32>()
                        .map_err(|e| AlignError::Parse(format!("row {i}: bad score {c:?}: {e}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if scores.len() != header.len() {
                return Err(AlignError::Parse(format!(
                    "row {i} ({}) has {} scores but the header has {} symbols",
                    char::from(a),
                    scores.len(),
                    header.len()
                )));
            }

            Ok(header
                .iter()
                .zip(scores)
                .fold(matrix, |matrix, (&b, s)| matrix.with_score(a, b, s)))
        })
    }

    /// Set the score for aligning `a` against `b`.
    ///
    /// Only the ordered pair `(a, b)` is set.
    #[must_use]
    pub fn with_score(mut self, a: u8, b: u8, score: i32) -> Self {
        for c in [a, b] {
            if !self.symbols.contains(&c) {
                self.symbols.push(c);
            }
        }
        self.scores[a as usize][b as usize] = Some(score);
        self
    }

    /// The symbols that have at least one score.
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Whether every pair that was set has the same score in both orders.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.symbols.iter().all(|&a| {
            self.symbols
                .iter()
                .all(|&b| self.scores[a as usize][b as usize] == self.scores[b as usize][a as usize])
        })
    }
}

impl Scorer for SubstitutionMatrix {
    fn score(&self, a: u8, b: u8) -> Result<i32, AlignError> {
        self.scores
            .get(a as usize)
            .and_then(|row| row.get(b as usize))
            .copied()
            .flatten()
            .ok_or_else(|| AlignError::unknown_symbol(a, b))
    }
}

impl FromStr for SubstitutionMatrix {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_table(s)
    }
}

/// Parses a table token that must be exactly one byte.
fn parse_symbol(token: &str) -> Result<u8, AlignError> {
    match token.as_bytes() {
        &[c] => Ok(c),
        _ => Err(AlignError::Parse(format!("{token:?} is not a single-byte symbol"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blosum62_is_square_and_symmetric() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.symbols(), BLOSUM62_SYMBOLS);
        assert!(m.is_symmetric());
        assert_eq!(m.score(b'A', b'A'), Ok(4));
        assert_eq!(m.score(b'W', b'W'), Ok(11));
        assert_eq!(m.score(b'-', b'-'), Ok(1));
        assert_eq!(m.score(b'X', b'-'), Ok(-4));
    }

    #[test]
    fn parse_symbol_rejects_long_tokens() {
        assert_eq!(parse_symbol("A"), Ok(b'A'));
        assert!(parse_symbol("AB").is_err());
    }
}
