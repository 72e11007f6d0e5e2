//! CLI for pairwise and progressive multiple sequence alignment.

mod commands;
mod data;
mod logger;
mod scoring;

use std::path::PathBuf;

use clap::Parser;

use commands::{Commands, OutputFormat};
use logger::LogLevel;
use scoring::MatrixChoice;

/// Global, local and progressive alignment of FASTA sequences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The substitution matrix to score residues with.
    #[arg(short('m'), long, default_value = "blosum62")]
    matrix: MatrixChoice,

    /// Path to a whitespace-separated substitution table. Overrides `--matrix`.
    #[arg(long)]
    matrix_file: Option<PathBuf>,

    /// The score for two equal residues with `--matrix match-mismatch`.
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    match_score: i32,

    /// The score for two different residues with `--matrix match-mismatch`.
    #[arg(long, default_value = "-1", allow_negative_numbers = true)]
    mismatch_score: i32,

    /// The residues scored by `--matrix match-mismatch`.
    #[arg(long, default_value = "ACGT")]
    alphabet: String,

    /// The score added for every gap column.
    #[arg(short('g'), long, default_value = "-1", allow_negative_numbers = true)]
    gap: i32,

    /// The most detailed level written to the log file.
    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// How to print results.
    #[arg(short('f'), long, default_value = "text")]
    format: OutputFormat,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = logger::configure_logger("seqalign", args.log_level.filter())?;
    ftlog::info!("Args: {args:?}");
    ftlog::info!("Logging to {log_path:?}");

    let scheme = scoring::scheme(
        &args.matrix,
        args.matrix_file.as_ref(),
        args.match_score,
        args.mismatch_score,
        &args.alphabet,
    )?;
    let aligner = seqalign::Aligner::new(&scheme).with_gap(args.gap);

    match args.command {
        Commands::Global { inp_path } => {
            commands::pairwise::run(&aligner, seqalign::Mode::Global, &inp_path, &args.format)?;
        }
        Commands::Local { inp_path } => {
            commands::pairwise::run(&aligner, seqalign::Mode::Local, &inp_path, &args.format)?;
        }
        Commands::Progressive { inp_path, out_path } => {
            commands::msa::progressive(aligner, &inp_path, out_path.as_ref(), &args.format)?;
        }
        Commands::Consensus { inp_path } => commands::msa::consensus(&inp_path, &args.format)?,
        Commands::Scores {
            inp_path,
            mode,
            parallel,
        } => commands::scores::run(&aligner, mode, &inp_path, parallel, &args.format)?,
    }

    ftlog::info!("Done.");
    Ok(())
}
