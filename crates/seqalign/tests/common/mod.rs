//! Helpers shared by the integration tests.

#![allow(dead_code)]

use rand::{prelude::*, rngs::StdRng};
use seqalign::{PairwiseAlignment, Scorer, GAP};

/// The nucleotide alphabet.
pub const DNA: &str = "ACGT";

/// The amino-acid alphabet of BLOSUM62, without ambiguity codes.
pub const PROTEIN: &str = "ARNDCQEGHILKMFPSTWYV";

/// Generates `cardinality` random sequences with lengths in `min_len..=max_len`.
pub fn random_sequences(cardinality: usize, min_len: usize, max_len: usize, alphabet: &str, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet = alphabet.as_bytes();
    (0..cardinality)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            (0..len)
                .map(|_| char::from(*alphabet.choose(&mut rng).unwrap_or(&b'A')))
                .collect()
        })
        .collect()
}

/// Removes the gaps from an aligned row.
pub fn ungap(row: &[u8]) -> Vec<u8> {
    row.iter().copied().filter(|&c| c != GAP).collect()
}

/// Re-scores an alignment column by column.
pub fn rescore<S: Scorer>(alignment: &PairwiseAlignment, scorer: &S, gap: i32) -> i32 {
    let [x, y] = &alignment.rows;
    x.iter()
        .zip(y)
        .map(|(&a, &b)| {
            if a == GAP || b == GAP {
                gap
            } else {
                scorer.score(a, b).unwrap_or(i32::MIN / 4)
            }
        })
        .sum()
}
