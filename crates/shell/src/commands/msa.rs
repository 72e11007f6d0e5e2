//! Building and summarizing multiple sequence alignments.

use std::path::Path;

use seqalign::{Aligner, Msa, Progressive, ScoringScheme};

use super::{print_json, OutputFormat};
use crate::data::fasta;

/// An MSA with the names of its rows and its column statistics.
#[derive(serde::Serialize)]
struct MsaReport<'a> {
    ids: Vec<&'a str>,
    rows: Vec<String>,
    width: usize,
    consensus: String,
    gap_fraction: f64,
    conserved_columns: Vec<usize>,
}

impl<'a> MsaReport<'a> {
    fn new(ids: Vec<&'a str>, msa: &Msa) -> Result<Self, String> {
        let consensus = msa.consensus().map_err(|e| e.to_string())?;
        Ok(Self {
            ids,
            rows: msa.strings(),
            width: msa.width(),
            consensus: String::from_utf8_lossy(&consensus).to_string(),
            gap_fraction: msa.gap_fraction(),
            conserved_columns: msa.conserved_columns(),
        })
    }

    /// Prints the report, with the consensus as the only FASTA record when
    /// `with_rows` is false.
    fn print(&self, format: &OutputFormat, with_rows: bool) -> Result<(), String> {
        match format {
            OutputFormat::Text => {
                if with_rows {
                    let width = self.ids.iter().map(|id| id.len()).max().unwrap_or(0);
                    for (id, row) in self.ids.iter().zip(&self.rows) {
                        println!("{id:<width$} {row}");
                    }
                }
                println!("consensus: {}", self.consensus);
                println!("rows: {}, width: {}", self.rows.len(), self.width);
                println!("gap fraction: {:.3}", self.gap_fraction);
                println!("conserved columns: {}", self.conserved_columns.len());
                Ok(())
            }
            OutputFormat::Fasta if with_rows => fasta::write(std::io::stdout(), self.ids.iter().zip(&self.rows)),
            OutputFormat::Fasta => fasta::write(std::io::stdout(), [("consensus", &self.consensus)]),
            OutputFormat::Json => print_json(self),
        }
    }
}

/// Progressively aligns every record of the FASTA file at `inp_path`, in file
/// order.
///
/// # Errors
///
/// - If the file cannot be read.
/// - If it holds fewer than two records.
/// - If the scorer rejects a residue.
/// - If the output file cannot be written.
pub fn progressive<P: AsRef<Path>>(
    aligner: Aligner<ScoringScheme>,
    inp_path: &Path,
    out_path: Option<P>,
    format: &OutputFormat,
) -> Result<(), String> {
    let records = fasta::read(inp_path)?;
    let (ids, sequences): (Vec<_>, Vec<_>) = records.iter().map(|(id, s)| (id.as_str(), s.as_str())).unzip();

    let msa = Progressive::new(aligner).align(&sequences).map_err(|e| e.to_string())?;
    ftlog::info!("Aligned {} sequences into {} columns.", msa.len(), msa.width());

    if let Some(out_path) = out_path {
        fasta::write_file(out_path, ids.iter().zip(msa.strings()))?;
    }

    MsaReport::new(ids, &msa)?.print(format, true)
}

/// Summarizes the aligned FASTA file at `inp_path` by its consensus.
///
/// # Errors
///
/// - If the file cannot be read.
/// - If it holds no records or its rows differ in length.
pub fn consensus(inp_path: &Path, format: &OutputFormat) -> Result<(), String> {
    let records = fasta::read(inp_path)?;
    let (ids, rows): (Vec<_>, Vec<_>) = records.iter().map(|(id, s)| (id.as_str(), s.as_str())).unzip();

    let msa = Msa::new(&rows).map_err(|e| e.to_string())?;
    ftlog::info!("Read an MSA of {} rows and {} columns.", msa.len(), msa.width());

    MsaReport::new(ids, &msa)?.print(format, false)
}
