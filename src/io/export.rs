//! CSV export of query results: the ranked impact table and the full
//! total-requirements matrix.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use thiserror::Error;

use crate::analysis::impact::ImpactResult;
use crate::analysis::leontief::LeontiefInverse;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Writes the full ranking as a two-column `Sector,Impact` table.
pub fn write_impact_ranking(
    path: impl AsRef<Path>,
    result: &ImpactResult,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let csv_err = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new().from_path(path).map_err(csv_err)?;
    writer.write_record(["Sector", "Impact"]).map_err(csv_err)?;
    for row in &result.ranked {
        writer
            .write_record([row.sector.as_str(), &row.impact.to_string()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    tracing::info!(path = %path.display(), rows = result.ranked.len(), "wrote impact ranking");
    Ok(())
}

/// Writes the Leontief inverse as a labeled sector x sector table,
/// with an empty corner cell above the label column.
pub fn write_leontief_matrix(
    path: impl AsRef<Path>,
    sectors: &[String],
    inverse: &LeontiefInverse,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let csv_err = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new().from_path(path).map_err(csv_err)?;

    let mut header = Vec::with_capacity(sectors.len() + 1);
    header.push("");
    header.extend(sectors.iter().map(String::as_str));
    writer.write_record(&header).map_err(csv_err)?;

    let l = inverse.matrix();
    for (i, sector) in sectors.iter().enumerate() {
        let mut record = Vec::with_capacity(sectors.len() + 1);
        record.push(sector.clone());
        record.extend(l.row(i).iter().map(|v| v.to_string()));
        writer.write_record(&record).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    tracing::info!(path = %path.display(), sectors = sectors.len(), "wrote Leontief inverse");
    Ok(())
}
