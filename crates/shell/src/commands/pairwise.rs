//! Aligning the first two sequences of a file.

use std::path::Path;

use seqalign::{Aligner, Mode, PairwiseAlignment, ScoringScheme};

use super::{print_json, OutputFormat};
use crate::data::fasta;

/// A pairwise alignment with the names of its sequences.
#[derive(serde::Serialize)]
struct PairwiseReport<'a> {
    ids: [&'a str; 2],
    mode: Mode,
    score: i32,
    identity: f64,
    rows: [String; 2],
    start: [usize; 2],
    end: [usize; 2],
}

impl<'a> PairwiseReport<'a> {
    fn new(ids: [&'a str; 2], alignment: &PairwiseAlignment) -> Self {
        Self {
            ids,
            mode: alignment.mode,
            score: alignment.score,
            identity: alignment.identity(),
            rows: alignment.strings(),
            start: alignment.start,
            end: alignment.end,
        }
    }
}

/// Aligns the first two records of the FASTA file at `inp_path`.
///
/// # Errors
///
/// - If the file cannot be read.
/// - If it holds fewer than two records.
/// - If the scorer rejects a residue.
pub fn run(aligner: &Aligner<ScoringScheme>, mode: Mode, inp_path: &Path, format: &OutputFormat) -> Result<(), String> {
    let records = fasta::read(inp_path)?;
    if records.len() > 2 {
        ftlog::warn!("Only the first two of {} sequences are aligned.", records.len());
    }

    let (x, y) = (records.first(), records.get(1));
    let alignment = aligner
        .align_optional(mode, x.map(|(_, s)| s.as_str()), y.map(|(_, s)| s.as_str()))
        .map_err(|e| e.to_string())?;
    let ids = [x, y].map(|r| r.map_or("", |(id, _)| id.as_str()));
    ftlog::info!("Aligned {} and {} with score {}.", ids[0], ids[1], alignment.score);

    let report = PairwiseReport::new(ids, &alignment);
    match format {
        OutputFormat::Text => {
            println!("{mode} alignment of {} and {}", ids[0], ids[1]);
            println!("score: {}", report.score);
            println!("identity: {:.3}", report.identity);
            let width = ids.iter().map(|id| id.len()).max().unwrap_or(0);
            for ((id, row), (start, end)) in ids.iter().zip(&report.rows).zip(report.start.iter().zip(&report.end)) {
                println!("{id:<width$} {start:>5} {row} {end}");
            }
            Ok(())
        }
        OutputFormat::Fasta => fasta::write(std::io::stdout(), ids.iter().zip(&report.rows)),
        OutputFormat::Json => print_json(&report),
    }
}
