//! All-vs-all pairwise scores.

use std::path::Path;

use seqalign::{batch, Aligner, Mode, ScoringScheme};

use super::{print_json, OutputFormat};
use crate::data::fasta;

/// The alignment mode to score with.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    /// Needleman-Wunsch.
    Global,
    /// Smith-Waterman.
    Local,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Global => Self::Global,
            ModeArg::Local => Self::Local,
        }
    }
}

/// A score matrix with the names of its rows and columns.
#[derive(serde::Serialize)]
struct ScoresReport<'a> {
    ids: Vec<&'a str>,
    mode: Mode,
    scores: Vec<Vec<i32>>,
}

/// Scores every ordered pair of records in the FASTA file at `inp_path`.
///
/// # Errors
///
/// - If the file cannot be read.
/// - If the scorer rejects a residue.
pub fn run(
    aligner: &Aligner<ScoringScheme>,
    mode: ModeArg,
    inp_path: &Path,
    parallel: bool,
    format: &OutputFormat,
) -> Result<(), String> {
    let mode = Mode::from(mode);
    let records = fasta::read(inp_path)?;
    let (ids, sequences): (Vec<_>, Vec<_>) = records.iter().map(|(id, s)| (id.as_str(), s.as_str())).unzip();

    let scores = if parallel {
        batch::par_pairwise_scores(aligner, mode, &sequences)
    } else {
        batch::pairwise_scores(aligner, mode, &sequences)
    }
    .map_err(|e| e.to_string())?;
    ftlog::info!("Computed {} {mode} scores.", ids.len() * ids.len());

    match format {
        OutputFormat::Json => print_json(&ScoresReport { ids, mode, scores }),
        OutputFormat::Fasta => Err("Scores cannot be written as FASTA.".to_string()),
        OutputFormat::Text => {
            println!("\t{}", ids.join("\t"));
            for (id, row) in ids.iter().zip(&scores) {
                let row = row.iter().map(ToString::to_string).collect::<Vec<_>>();
                println!("{id}\t{}", row.join("\t"));
            }
            Ok(())
        }
    }
}
