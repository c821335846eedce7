//! The numerical core: coefficients, inversion, shock propagation,
//! impact ranking.

pub mod coefficients;
pub mod impact;
pub mod leontief;
pub mod shock;

use thiserror::Error;

/// Failures of the numerical pipeline.
///
/// All of these are terminal for the current query: they reflect bad
/// input data or bad parameters, never transient state, so there is
/// nothing to retry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// (I - A) is not invertible within tolerance. A singular Leontief
    /// matrix means the economic structure is circular or non-viable;
    /// any impact numbers derived from it would be meaningless.
    #[error(
        "Leontief matrix (I - A) is singular or ill-conditioned \
         (condition estimate {condition:.3e}, limit {limit:.3e})"
    )]
    SingularMatrix { condition: f64, limit: f64 },

    #[error("sector index {index} out of range, table has {sector_count} sectors")]
    SectorIndexOutOfRange { index: usize, sector_count: usize },

    #[error("shock magnitude is zero, multiplier is undefined")]
    ZeroShockMagnitude,
}
