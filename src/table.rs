//! The sectoral transaction table: the immutable input to the pipeline.

use nalgebra::DMatrix;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("transaction matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("{labels} sector labels for a {rows}-row matrix")]
    LabelCountMismatch { labels: usize, rows: usize },
}

/// A square inter-industry transaction table.
///
/// Rows are producing sectors, columns are consuming sectors: cell
/// (i, j) is the value of sector i's output consumed by sector j.
/// Labels and matrix share one ordering and never change after
/// construction, so the table can be shared read-only across queries.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorTable {
    sectors: Vec<String>,
    transactions: DMatrix<f64>,
}

impl SectorTable {
    pub fn new(sectors: Vec<String>, transactions: DMatrix<f64>) -> Result<Self, TableError> {
        if transactions.nrows() != transactions.ncols() {
            return Err(TableError::NotSquare {
                rows: transactions.nrows(),
                cols: transactions.ncols(),
            });
        }
        if sectors.len() != transactions.nrows() {
            return Err(TableError::LabelCountMismatch {
                labels: sectors.len(),
                rows: transactions.nrows(),
            });
        }
        Ok(Self { sectors, transactions })
    }

    /// Number of sectors (the matrix is `sector_count` x `sector_count`).
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }

    pub fn sector_name(&self, index: usize) -> Option<&str> {
        self.sectors.get(index).map(String::as_str)
    }

    pub fn transactions(&self) -> &DMatrix<f64> {
        &self.transactions
    }
}
