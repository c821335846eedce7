//! Lenient CSV loading of the transaction table.
//!
//! Expected layout: first column = sector label, header row = sector
//! labels repeated as column names (only counted, not matched), every
//! other cell numeric. Provider files routinely carry blanks, text
//! markers, and trailing summary columns, so parsing is deliberately
//! forgiving; see [`load_transaction_table`].

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use nalgebra::DMatrix;
use thiserror::Error;

use crate::table::{SectorTable, TableError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} contains no data rows", .path.display())]
    Empty { path: PathBuf },

    #[error(
        "{} has {rows} data rows but only {cols} data columns; \
         cannot square the table by truncating columns",
        .path.display()
    )]
    TooFewColumns { path: PathBuf, rows: usize, cols: usize },

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Reads a transaction table from a delimited text file.
///
/// Two lenient behaviors are contractual and must not be "fixed":
///
/// - any cell that does not parse as a number (blanks, `n.d.`, stray
///   text) is silently coerced to 0.0, never an error;
/// - a table with more columns than rows is forced square by keeping
///   only the first N columns (N = row count). This assumes trailing
///   columns are provider artifacts such as final-demand or total
///   columns, which holds for the supported sources but is a
///   compatibility assumption, not a general rule.
pub fn load_transaction_table(path: impl AsRef<Path>) -> Result<SectorTable, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Data columns are everything after the label column.
    let header_width = reader.headers().map_err(csv_err)?.len().saturating_sub(1);

    let mut labels: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let mut fields = record.iter();
        labels.push(fields.next().unwrap_or_default().to_string());
        rows.push(fields.map(parse_cell).collect());
    }

    let n = rows.len();
    if n == 0 {
        return Err(LoadError::Empty { path: path.to_path_buf() });
    }
    if header_width < n {
        return Err(LoadError::TooFewColumns {
            path: path.to_path_buf(),
            rows: n,
            cols: header_width,
        });
    }

    // Keep the first n columns; short rows are padded with zeros, the
    // same treatment as any other missing cell.
    let matrix = DMatrix::from_fn(n, n, |i, j| rows[i].get(j).copied().unwrap_or(0.0));

    if header_width > n {
        tracing::info!(
            kept = n,
            dropped = header_width - n,
            "truncated trailing non-sector columns"
        );
    }
    tracing::info!(path = %path.display(), sectors = n, "loaded transaction table");

    Ok(SectorTable::new(labels, matrix)?)
}

/// Numeric coercion policy: anything unparsable becomes 0.0.
/// Non-finite values (`inf`, `NaN` spellings) are coerced as well so
/// that no NaN/Inf can reach the linear algebra downstream.
fn parse_cell(raw: &str) -> f64 {
    raw.trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .unwrap_or(0.0)
}
