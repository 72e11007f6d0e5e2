//! Choosing a scoring scheme from the command line.

use std::path::Path;

use seqalign::{MatchMismatch, ScoringScheme, SubstitutionMatrix};

/// The built-in scoring schemes.
#[derive(clap::ValueEnum, Debug, Clone)]
#[non_exhaustive]
pub enum MatrixChoice {
    /// The BLOSUM62 matrix for proteins.
    #[clap(name = "blosum62")]
    Blosum62,
    /// Uniform match and mismatch scores over `--alphabet`.
    #[clap(name = "match-mismatch")]
    MatchMismatch,
}

/// Builds the scoring scheme for a run.
///
/// A table read from `matrix_file` takes precedence over `choice`.
///
/// # Errors
///
/// - If the table file cannot be read or parsed.
pub fn scheme<P: AsRef<Path>>(
    choice: &MatrixChoice,
    matrix_file: Option<P>,
    match_score: i32,
    mismatch_score: i32,
    alphabet: &str,
) -> Result<ScoringScheme, String> {
    if let Some(path) = matrix_file {
        let path = path.as_ref();
        ftlog::info!("Reading substitution table from {path:?}.");
        let table = std::fs::read_to_string(path).map_err(|e| format!("Failed to read {path:?}: {e}"))?;
        let matrix = SubstitutionMatrix::from_table(&table).map_err(|e| e.to_string())?;
        if !matrix.is_symmetric() {
            ftlog::warn!("The substitution table in {path:?} is not symmetric.");
        }
        return Ok(matrix.into());
    }

    let scheme = match choice {
        MatrixChoice::Blosum62 => SubstitutionMatrix::blosum62().into(),
        MatrixChoice::MatchMismatch => {
            MatchMismatch::new(match_score, mismatch_score, alphabet.to_uppercase()).into()
        }
    };
    Ok(scheme)
}
