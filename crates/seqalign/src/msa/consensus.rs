//! Per-column majority consensus of an alignment.

use crate::{AlignError, GAP};

/// The consensus of an alignment.
///
/// Each column becomes its most frequent non-gap symbol. Ties go to the symbol
/// seen first when reading the column from the first row down. A column of
/// only gaps becomes a gap.
///
/// # Errors
///
/// - `EmptyAlignment` if there are no rows.
/// - `LengthMismatch` if the rows do not all have the same length.
pub fn consensus<I: AsRef<[u8]>>(rows: &[I]) -> Result<Vec<u8>, AlignError> {
    let width = check_widths(rows)?;
    Ok((0..width)
        .map(|col| majority(&column_counts(rows.iter().map(|r| r.as_ref()[col]))))
        .collect())
}

/// Checks that all rows share one width, and returns it.
pub(crate) fn check_widths<I: AsRef<[u8]>>(rows: &[I]) -> Result<usize, AlignError> {
    let (first, rest) = rows.split_first().ok_or(AlignError::EmptyAlignment)?;
    let expected = first.as_ref().len();
    rest.iter()
        .enumerate()
        .find(|(_, r)| r.as_ref().len() != expected)
        .map_or(Ok(expected), |(i, r)| {
            Err(AlignError::LengthMismatch {
                row: i + 1,
                expected,
                found: r.as_ref().len(),
            })
        })
}

/// Counts the non-gap symbols of a column, in the order they first appear.
pub(crate) fn column_counts<C: IntoIterator<Item = u8>>(column: C) -> Vec<(u8, usize)> {
    column
        .into_iter()
        .filter(|&c| c != GAP)
        .fold(Vec::new(), |mut counts, c| {
            match counts.iter_mut().find(|(s, _)| *s == c) {
                Some((_, n)) => *n += 1,
                None => counts.push((c, 1)),
            }
            counts
        })
}

/// The symbol with the highest count, the earliest one on ties, or a gap if
/// there are no counts.
fn majority(counts: &[(u8, usize)]) -> u8 {
    counts
        .iter()
        .fold(None, |best: Option<(u8, usize)>, &(c, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((c, n)),
        })
        .map_or(GAP, |(c, _)| c)
}
