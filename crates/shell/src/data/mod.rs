//! Data formats supported in the CLI.

pub mod fasta;

/// A named sequence.
pub type Record = (String, String);
