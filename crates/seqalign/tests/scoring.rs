//! Tests for the substitution matrices and the match/mismatch scheme.

use seqalign::{AlignError, MatchMismatch, Scorer, ScoringScheme, SubstitutionMatrix};
use test_case::test_case;

#[test_case(b'A', b'A', 4; "a_a")]
#[test_case(b'A', b'G', 0; "a_g")]
#[test_case(b'W', b'Y', 2; "w_y")]
#[test_case(b'W', b'W', 11; "w_w")]
#[test_case(b'C', b'G', -3; "c_g")]
#[test_case(b'C', b'T', -1; "c_t")]
#[test_case(b'G', b'T', -2; "g_t")]
#[test_case(b'A', b'-', -4; "a_gap")]
#[test_case(b'-', b'-', 1; "gap_gap")]
fn blosum62(a: u8, b: u8, expected: i32) -> Result<(), AlignError> {
    let blosum = SubstitutionMatrix::blosum62();
    assert_eq!(blosum.score(a, b)?, expected);
    assert_eq!(blosum.score(b, a)?, expected);
    Ok(())
}

#[test]
fn blosum62_unknown() {
    let blosum = SubstitutionMatrix::blosum62();
    assert_eq!(blosum.score(b'J', b'A'), Err(AlignError::UnknownSymbol { a: 'J', b: 'A' }));
    assert_eq!(blosum.score(b'a', b'a'), Err(AlignError::UnknownSymbol { a: 'a', b: 'a' }));
    assert_eq!(blosum.symbols().len(), 24);
}

#[test]
fn parse_asymmetric_table() -> Result<(), AlignError> {
    let table = "
           A   B
        A  2  -3
        B  5   1
    ";
    let matrix: SubstitutionMatrix = table.parse()?;

    assert_eq!(matrix.score(b'A', b'A')?, 2);
    assert_eq!(matrix.score(b'A', b'B')?, -3);
    assert_eq!(matrix.score(b'B', b'A')?, 5);
    assert_eq!(matrix.score(b'B', b'B')?, 1);
    assert_eq!(matrix.symbols(), b"AB");
    assert!(!matrix.is_symmetric());
    assert!(matrix.score(b'A', b'C').is_err());

    Ok(())
}

#[test]
fn parse_partial_table() -> Result<(), AlignError> {
    // Rows need not cover every header symbol.
    let matrix = SubstitutionMatrix::from_table("A C\nA 1 0\n")?;
    assert_eq!(matrix.score(b'A', b'C')?, 0);
    assert!(matrix.score(b'C', b'A').is_err());
    Ok(())
}

#[test_case(""; "empty")]
#[test_case("   \n  \n"; "blank")]
#[test_case("A C\nA 1\n"; "short_row")]
#[test_case("A C\nA 1 2 3\n"; "long_row")]
#[test_case("A C\nA 1 x\n"; "bad_score")]
#[test_case("AB C\nA 1 2\n"; "long_header_symbol")]
#[test_case("A C\nAC 1 2\n"; "long_row_symbol")]
fn parse_errors(table: &str) {
    assert!(matches!(SubstitutionMatrix::from_table(table), Err(AlignError::Parse(_))));
}

#[test]
fn with_score_overrides() -> Result<(), AlignError> {
    let matrix = SubstitutionMatrix::blosum62().with_score(b'A', b'W', 7);
    assert_eq!(matrix.score(b'A', b'W')?, 7);
    assert_eq!(matrix.score(b'W', b'A')?, -3);
    assert!(!matrix.is_symmetric());
    Ok(())
}

#[test_case(1, -1, b'A', b'A', 1; "dna_match")]
#[test_case(1, -1, b'A', b'C', -1; "dna_mismatch")]
#[test_case(2, -1, b'G', b'G', 2; "weighted_match")]
#[test_case(5, -4, b'T', b'G', -4; "weighted_mismatch")]
fn match_mismatch(match_score: i32, mismatch_score: i32, a: u8, b: u8, expected: i32) -> Result<(), AlignError> {
    let scorer = MatchMismatch::new(match_score, mismatch_score, "ACGT");
    assert_eq!(scorer.score(a, b)?, expected);
    Ok(())
}

#[test]
fn match_mismatch_alphabet() -> Result<(), AlignError> {
    let scorer = MatchMismatch::new(1, 0, "ABBA");
    assert_eq!(scorer.alphabet(), b"AB");
    assert_eq!(scorer.score(b'A', b'B')?, 0);
    assert_eq!(scorer.score(b'A', b'N'), Err(AlignError::UnknownSymbol { a: 'A', b: 'N' }));
    assert_eq!(scorer.score(b'-', b'A'), Err(AlignError::UnknownSymbol { a: '-', b: 'A' }));
    Ok(())
}

#[test]
fn match_mismatch_as_matrix() -> Result<(), AlignError> {
    let scorer = MatchMismatch::default();
    let matrix = SubstitutionMatrix::from(&scorer);

    assert!(matrix.is_symmetric());
    for &a in scorer.alphabet() {
        for &b in scorer.alphabet() {
            assert_eq!(matrix.score(a, b)?, scorer.score(a, b)?);
        }
    }
    assert!(matrix.score(b'N', b'A').is_err());

    Ok(())
}

#[test]
fn scheme_dispatch() -> Result<(), AlignError> {
    let scheme = ScoringScheme::default();
    assert_eq!(scheme.score(b'W', b'W')?, 11);

    let scheme = ScoringScheme::from(MatchMismatch::new(3, -2, "ACGT"));
    assert_eq!(scheme.score(b'A', b'A')?, 3);
    assert_eq!(scheme.score(b'A', b'C')?, -2);
    assert!(scheme.score(b'W', b'W').is_err());

    Ok(())
}

#[test]
fn scheme_serde() -> Result<(), serde_json::Error> {
    let scheme = ScoringScheme::from(MatchMismatch::new(1, -1, "AC"));
    let json = serde_json::to_string(&scheme)?;
    assert!(json.contains(r#""kind":"match_mismatch""#));

    let parsed: ScoringScheme = serde_json::from_str(&json)?;
    assert_eq!(parsed, scheme);
    Ok(())
}
