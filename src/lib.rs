//! Leontief input-output impact analysis.
//!
//! The crate is organized as a linear pipeline over a sectoral
//! transaction table:
//!
//! 1. [`io::loader`] reads the table from delimited text, leniently
//!    coercing bad cells to zero and forcing the table square.
//! 2. [`analysis::coefficients`] derives the technical-coefficients
//!    matrix A by column normalization.
//! 3. [`analysis::leontief`] inverts (I - A) into the
//!    total-requirements matrix L, rejecting singular structures.
//! 4. [`analysis::shock`] propagates a single-sector demand shock,
//!    ΔX = L · Δd.
//! 5. [`analysis::impact`] ranks sectors by impact and computes the
//!    aggregate multiplier.
//!
//! Every stage is a pure function over immutable inputs; the table and
//! the derived A/L matrices can be shared read-only across queries.

pub mod analysis;
pub mod display;
pub mod error;
pub mod io;
pub mod table;

pub use analysis::coefficients::technical_coefficients;
pub use analysis::impact::{rank_impacts, ImpactResult, SectorImpact};
pub use analysis::leontief::{InversionOptions, LeontiefInverse};
pub use analysis::shock::{propagate, DemandShock};
pub use analysis::AnalysisError;
pub use error::{Error, Result};
pub use io::export::ExportError;
pub use io::loader::{load_transaction_table, LoadError};
pub use table::SectorTable;
