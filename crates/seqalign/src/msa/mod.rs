//! Multiple sequence alignment by progressive merging against a consensus.

mod consensus;
mod progressive;

use core::ops::Index;

use crate::{pairwise::PairwiseAlignment, AlignError, GAP};

pub use consensus::consensus;
pub use progressive::Progressive;

/// A multiple sequence alignment (MSA).
///
/// Every row has the same width, and removing the gaps from a row gives back
/// the sequence it was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Msa {
    /// The aligned sequences.
    rows: Vec<Vec<u8>>,
}

impl Msa {
    /// Create an MSA from aligned rows.
    ///
    /// # Errors
    ///
    /// - `EmptyAlignment` if there are no rows.
    /// - `LengthMismatch` if the rows do not all have the same length.
    pub fn new<I: AsRef<[u8]>>(rows: &[I]) -> Result<Self, AlignError> {
        consensus::check_widths(rows)?;
        Ok(Self {
            rows: rows.iter().map(|r| r.as_ref().to_vec()).collect(),
        })
    }

    /// The aligned rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// The number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the MSA has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The number of columns.
    ///
    /// If the MSA is empty, this will return 0.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The rows as strings.
    #[must_use]
    pub fn strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| String::from_utf8_lossy(r).to_string())
            .collect()
    }

    /// The row at `index` with its gaps removed.
    #[must_use]
    pub fn ungapped(&self, index: usize) -> Option<Vec<u8>> {
        self.rows
            .get(index)
            .map(|r| r.iter().copied().filter(|&c| c != GAP).collect())
    }

    /// The consensus of the rows. See [`consensus`].
    ///
    /// # Errors
    ///
    /// - `EmptyAlignment` if the MSA has no rows, as `Msa::default()` does.
    pub fn consensus(&self) -> Result<Vec<u8>, AlignError> {
        consensus(&self.rows)
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if the row is not as wide as the existing rows.
    pub fn push_row(&mut self, row: Vec<u8>) -> Result<(), AlignError> {
        if !self.is_empty() && row.len() != self.width() {
            return Err(AlignError::LengthMismatch {
                row: self.len(),
                expected: self.width(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Insert gap columns into every row in a single pass.
    ///
    /// The `indices` are the positions of the new gap columns in the widened
    /// alignment, so inserting at `[1, 2]` into `AB` gives `A--B`. They may be
    /// given in any order; duplicates are ignored.
    ///
    /// # Errors
    ///
    /// - `GapIndexOutOfBounds` if an index is not a column of the widened
    ///   alignment.
    pub fn insert_gap_columns(&mut self, indices: &[usize]) -> Result<(), AlignError> {
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        let width = self.width() + indices.len();
        if let Some(&index) = indices.last().filter(|&&i| i >= width) {
            return Err(AlignError::GapIndexOutOfBounds { index, width });
        }

        for row in &mut self.rows {
            let mut residues = row.iter().copied();
            let mut gaps = indices.iter().peekable();
            *row = (0..width)
                .map(|col| {
                    if gaps.next_if(|&&g| g == col).is_some() {
                        GAP
                    } else {
                        residues.next().unwrap_or(GAP)
                    }
                })
                .collect();
        }

        Ok(())
    }

    /// The non-gap symbols of a column with their counts, in the order they
    /// first appear from the top row down.
    ///
    /// Returns an empty list if `col` is not a column.
    #[must_use]
    pub fn column_counts(&self, col: usize) -> Vec<(u8, usize)> {
        if col >= self.width() {
            return Vec::new();
        }
        consensus::column_counts(self.rows.iter().map(|r| r[col]))
    }

    /// The fraction of all cells holding a gap.
    ///
    /// This is 0 for an MSA with no cells.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gap_fraction(&self) -> f64 {
        let cells = self.len() * self.width();
        if cells == 0 {
            return 0.0;
        }
        let gaps = self.rows.iter().flatten().filter(|&&c| c == GAP).count();
        gaps as f64 / cells as f64
    }

    /// The columns where every row holds the same residue.
    #[must_use]
    pub fn conserved_columns(&self) -> Vec<usize> {
        (0..self.width())
            .filter(|&col| {
                let counts = self.column_counts(col);
                counts.len() == 1 && counts[0].1 == self.len()
            })
            .collect()
    }
}

impl Index<usize> for Msa {
    type Output = [u8];

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl From<PairwiseAlignment> for Msa {
    fn from(alignment: PairwiseAlignment) -> Self {
        let [x, y] = alignment.rows;
        Self { rows: vec![x, y] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_columns_in_widened_coordinates() -> Result<(), AlignError> {
        let mut msa = Msa::new(&["AB", "CD"])?;
        msa.insert_gap_columns(&[1, 2])?;
        assert_eq!(msa.strings(), ["A--B", "C--D"]);

        msa.insert_gap_columns(&[0, 5])?;
        assert_eq!(msa.strings(), ["-A--B-", "-C--D-"]);
        assert_eq!(msa.ungapped(1), Some(b"CD".to_vec()));

        assert_eq!(
            msa.insert_gap_columns(&[7]),
            Err(AlignError::GapIndexOutOfBounds { index: 7, width: 7 })
        );
        Ok(())
    }

    #[test]
    fn push_row_checks_width() -> Result<(), AlignError> {
        let mut msa = Msa::default();
        msa.push_row(b"A-C".to_vec())?;
        msa.push_row(b"AGC".to_vec())?;
        assert_eq!(
            msa.push_row(b"AG".to_vec()),
            Err(AlignError::LengthMismatch {
                row: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(msa.len(), 2);
        Ok(())
    }

    #[test]
    fn column_statistics() -> Result<(), AlignError> {
        let msa = Msa::new(&["AC-", "A-G", "AAG"])?;
        assert_eq!(msa.conserved_columns(), vec![0]);
        assert_eq!(msa.column_counts(1), vec![(b'C', 1), (b'A', 1)]);
        assert!(msa.column_counts(3).is_empty());
        assert!((msa.gap_fraction() - 2.0 / 9.0).abs() < f64::EPSILON);
        Ok(())
    }
}
