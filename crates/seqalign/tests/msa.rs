//! Tests for the consensus and progressive multiple sequence alignment.

use seqalign::{consensus, AlignError, Aligner, MatchMismatch, Msa, Progressive, SubstitutionMatrix};
use test_case::test_case;

mod common;

#[test_case(&["AC-", "A-G", "AAG"], "ACG"; "majority")]
#[test_case(&["A-C", "ACC", "ATC"], "ACC"; "gap_minority")]
#[test_case(&["AT", "TA"], "AT"; "first_seen_tie")]
#[test_case(&["-", "-"], "-"; "all_gaps")]
#[test_case(&["AC-GT", "A--GT", "ACGGT", "-C-GT"], "ACGGT"; "four_rows")]
#[test_case(&["ACGT"], "ACGT"; "single_row")]
fn consensus_rows(rows: &[&str], expected: &str) -> Result<(), AlignError> {
    let consensus = consensus(rows)?;
    assert_eq!(consensus, expected.as_bytes());
    Ok(())
}

#[test]
fn consensus_errors() {
    assert_eq!(consensus::<&str>(&[]), Err(AlignError::EmptyAlignment));
    assert_eq!(
        consensus(&["ACG", "AC", "ACG"]),
        Err(AlignError::LengthMismatch {
            row: 1,
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn consensus_of_identical_rows() -> Result<(), AlignError> {
    for row in common::random_sequences(10, 1, 30, common::PROTEIN, 17) {
        let rows = vec![row.as_str(); 4];
        assert_eq!(consensus(&rows)?, row.as_bytes());
    }
    Ok(())
}

#[test_case(&["AC", "AG", "AT"], -1, &["A-C", "AG-", "A-T"]; "short")]
#[test_case(&["ATGC", "ATCC", "ATGG"], -1, &["AT--GC", "AT-C-C", "ATG-G-"]; "widening")]
#[test_case(&["MKVL", "MKIVL", "MVL"], -2, &["MK-VL", "MKIVL", "M--VL"]; "protein")]
fn progressive_blosum(sequences: &[&str], gap: i32, expected: &[&str]) -> Result<(), AlignError> {
    let blosum = SubstitutionMatrix::blosum62();
    let msa = Progressive::new(Aligner::new(&blosum).with_gap(gap)).align(sequences)?;

    assert_eq!(msa.strings(), expected);
    Ok(())
}

#[test_case(&["ACGT", "ACGT", "ACGGT"], &["AC-GT", "AC-GT", "ACGGT"]; "insertion")]
#[test_case(&["ACGT", "AGT", "ACGGT", "CGT"], &["AC-GT", "A--GT", "ACGGT", "-C-GT"]; "four")]
#[test_case(
    &["GATTACA", "GATACA", "GTTACA", "GATTTACA"],
    &["GA-TTACA", "GA--TACA", "G--TTACA", "GATTTACA"];
    "gattaca"
)]
fn progressive_dna(sequences: &[&str], expected: &[&str]) -> Result<(), AlignError> {
    let dna = MatchMismatch::default();
    let msa = seqalign::progressive_align(sequences, &dna, -1)?;

    assert_eq!(msa.strings(), expected);
    Ok(())
}

#[test]
fn progressive_needs_two() {
    let dna = MatchMismatch::default();
    let progressive = Progressive::new(Aligner::new(&dna));

    assert_eq!(
        progressive.align(&["ACGT"]),
        Err(AlignError::InsufficientInput { found: 1 })
    );
    assert_eq!(
        progressive.align::<&str>(&[]),
        Err(AlignError::InsufficientInput { found: 0 })
    );
}

#[test]
fn progressive_of_two_is_global() -> Result<(), AlignError> {
    let blosum = SubstitutionMatrix::blosum62();
    let aligner = Aligner::new(&blosum);

    let msa = Progressive::new(aligner).align(&["HEAGAWGHEE", "PAWHEAE"])?;
    let alignment = aligner.global("HEAGAWGHEE", "PAWHEAE")?;

    assert_eq!(msa.rows(), alignment.rows);
    assert_eq!(msa.strings(), ["HEAGAWGHE-E", "--P-AW-HEAE"]);
    Ok(())
}

#[test]
fn progressive_propagates_unknown_symbols() {
    let dna = MatchMismatch::default();
    let result = seqalign::progressive_align(&["ACGT", "ACGT", "ACNT"], &dna, -1);
    assert!(matches!(result, Err(AlignError::UnknownSymbol { .. })));
}

#[test_case(common::DNA, 3; "dna")]
#[test_case(common::PROTEIN, 11; "protein")]
fn random_progressive(alphabet: &str, seed: u64) -> Result<(), AlignError> {
    let blosum = SubstitutionMatrix::blosum62();
    let progressive = Progressive::new(Aligner::new(&blosum));

    for cardinality in [2, 3, 8] {
        let sequences = common::random_sequences(cardinality, 1, 25, alphabet, seed);
        let msa = progressive.align(&sequences)?;

        assert_eq!(msa.len(), cardinality);
        assert!(msa.rows().iter().all(|r| r.len() == msa.width()));
        for (i, sequence) in sequences.iter().enumerate() {
            assert_eq!(msa.ungapped(i), Some(sequence.as_bytes().to_vec()));
        }
    }

    Ok(())
}

#[test]
fn msa_accessors() -> Result<(), AlignError> {
    let msa = Msa::new(&["AC-GT", "A--GT", "ACGGT", "-C-GT"])?;

    assert_eq!(msa.len(), 4);
    assert_eq!(msa.width(), 5);
    assert_eq!(&msa[2], b"ACGGT");
    assert_eq!(msa.consensus()?, b"ACGGT");
    assert_eq!(msa.column_counts(1), vec![(b'C', 3)]);
    assert_eq!(msa.column_counts(2), vec![(b'G', 1)]);
    assert!(msa.column_counts(5).is_empty());
    assert_eq!(msa.conserved_columns(), vec![3, 4]);
    assert!((msa.gap_fraction() - 5.0 / 20.0).abs() < f64::EPSILON);
    assert_eq!(msa.ungapped(1), Some(b"AGT".to_vec()));
    assert_eq!(msa.ungapped(4), None);

    Ok(())
}

#[test]
fn msa_construction_errors() -> Result<(), AlignError> {
    assert_eq!(Msa::new::<&str>(&[]), Err(AlignError::EmptyAlignment));
    assert_eq!(
        Msa::new(&["AC", "ACG"]),
        Err(AlignError::LengthMismatch {
            row: 1,
            expected: 2,
            found: 3
        })
    );

    let mut msa = Msa::new(&["AC", "AG"])?;
    assert_eq!(
        msa.push_row(b"A".to_vec()),
        Err(AlignError::LengthMismatch {
            row: 2,
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        msa.insert_gap_columns(&[3]),
        Err(AlignError::GapIndexOutOfBounds { index: 3, width: 3 })
    );

    msa.insert_gap_columns(&[2, 0, 2])?;
    assert_eq!(msa.strings(), ["-A-C", "-A-G"]);
    msa.push_row(b"TAGC".to_vec())?;
    assert_eq!(msa.len(), 3);

    Ok(())
}

#[test]
fn empty_msa_has_no_consensus() {
    let dna = MatchMismatch::default();
    let progressive = Progressive::new(Aligner::new(&dna));

    let mut msa = Msa::default();
    assert_eq!(msa.consensus(), Err(AlignError::EmptyAlignment));
    assert_eq!(progressive.merge(&mut msa, b"ACGT"), Err(AlignError::EmptyAlignment));
    assert!(msa.is_empty());
}
