//! Unified error type for callers that drive the whole pipeline.

use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::io::export::ExportError;
use crate::io::loader::LoadError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load transaction table: {0}")]
    Load(#[from] LoadError),

    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("failed to export results: {0}")]
    Export(#[from] ExportError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
