//! The commands under the `seqalign` CLI.

pub mod msa;
pub mod pairwise;
pub mod scores;

use std::path::PathBuf;

use clap::Subcommand;

/// How results are printed.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// A human-readable summary.
    Text,
    /// Aligned rows as FASTA records.
    Fasta,
    /// A JSON document.
    Json,
}

/// The subcommands, one per library operation.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Globally align the first two sequences of a FASTA file.
    Global {
        /// Path to the input FASTA file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,
    },
    /// Locally align the first two sequences of a FASTA file.
    Local {
        /// Path to the input FASTA file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,
    },
    /// Progressively align every sequence of a FASTA file.
    Progressive {
        /// Path to the input FASTA file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,
        /// Path to write the aligned sequences to, as FASTA.
        #[arg(short('o'), long)]
        out_path: Option<PathBuf>,
    },
    /// Compute the consensus of an aligned FASTA file.
    Consensus {
        /// Path to the aligned FASTA file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,
    },
    /// Score every ordered pair of sequences in a FASTA file.
    Scores {
        /// Path to the input FASTA file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,
        /// Which alignment to score.
        #[arg(long, default_value = "global")]
        mode: scores::ModeArg,
        /// Whether to align the pairs in parallel.
        #[arg(short('p'), long)]
        parallel: bool,
    },
}

/// Prints a value as pretty JSON.
///
/// # Errors
///
/// - If the value cannot be serialized.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
