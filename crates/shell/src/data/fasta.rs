//! Reading and writing FASTA files.

use std::path::Path;

use super::Record;

/// Reads a FASTA file from the given path.
///
/// Sequences are trimmed and upper-cased. Gaps are kept, so that aligned files
/// can be read back.
///
/// # Errors
///
/// * If the file does not exist.
/// * If the file cannot be read as a FASTA file.
/// * If any ID is empty.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("Path {path:?} does not exist!"));
    }

    ftlog::info!("Reading FASTA file from {path:?}.");

    let mut records = Vec::new();
    for record in bio::io::fasta::Reader::from_file(path)
        .map_err(|e| e.to_string())?
        .records()
    {
        let record = record.map_err(|e| format!("Failed to read record {}: {e}", records.len()))?;

        let name = record.id().to_string();
        if name.is_empty() {
            return Err(format!("Empty ID for record {}.", records.len()));
        }

        let seq = String::from_utf8_lossy(record.seq()).trim().to_ascii_uppercase();
        records.push((name, seq));
    }

    ftlog::info!("Read {} sequences.", records.len());
    Ok(records)
}

/// Writes records in FASTA format.
///
/// # Errors
///
/// * If a record cannot be written.
pub fn write<W, I, A, B>(writer: W, records: I) -> Result<(), String>
where
    W: std::io::Write,
    I: IntoIterator<Item = (A, B)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut writer = bio::io::fasta::Writer::new(writer);
    for (id, seq) in records {
        let record = bio::io::fasta::Record::with_attrs(id.as_ref(), None, seq.as_ref().as_bytes());
        writer
            .write_record(&record)
            .map_err(|e| format!("Failed to write record: {e}"))?;
    }
    writer.flush().map_err(|e| e.to_string())
}

/// Writes records to a new FASTA file at the given path.
///
/// # Errors
///
/// * If the file cannot be created.
/// * See [`write`].
pub fn write_file<P, I, A, B>(path: P, records: I) -> Result<(), String>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (A, B)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| format!("Failed to create file {path:?}: {e}"))?;
    write(file, records)?;
    ftlog::info!("Wrote FASTA file to {path:?}.");
    Ok(())
}
