//! Ranking of sectoral impacts and the aggregate multiplier.

use nalgebra::DVector;
use serde::Serialize;

use crate::analysis::shock::DemandShock;
use crate::analysis::AnalysisError;

/// One row of the ranked impact table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorImpact {
    pub sector: String,
    pub impact: f64,
}

/// The final output of a shock query, and the only data contract that
/// external consumers (console report, CSV export, charts) see.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactResult {
    pub shocked_sector: String,
    pub shock_magnitude: f64,
    /// All sectors, sorted by impact descending. Ties keep the
    /// original sector order (stable sort).
    pub ranked: Vec<SectorImpact>,
    /// Σ ΔX over all sectors.
    pub aggregate_impact: f64,
    /// aggregate_impact / shock_magnitude.
    pub multiplier: f64,
}

/// Builds an [`ImpactResult`] from the impact vector of a shock query.
///
/// Fails with [`AnalysisError::ZeroShockMagnitude`] when the shock
/// magnitude is zero: the multiplier would be ±inf or NaN, and that
/// must be reported rather than returned.
pub fn rank_impacts(
    impact: &DVector<f64>,
    sectors: &[String],
    shock: &DemandShock,
) -> Result<ImpactResult, AnalysisError> {
    debug_assert_eq!(impact.len(), sectors.len());

    if shock.magnitude == 0.0 {
        return Err(AnalysisError::ZeroShockMagnitude);
    }
    let shocked_sector = sectors
        .get(shock.sector)
        .ok_or(AnalysisError::SectorIndexOutOfRange {
            index: shock.sector,
            sector_count: sectors.len(),
        })?
        .clone();

    let mut ranked: Vec<SectorImpact> = sectors
        .iter()
        .zip(impact.iter())
        .map(|(sector, &impact)| SectorImpact { sector: sector.clone(), impact })
        .collect();
    // Stable descending sort; total_cmp keeps this well-defined even
    // if a NaN ever slipped through upstream.
    ranked.sort_by(|a, b| b.impact.total_cmp(&a.impact));

    let aggregate_impact: f64 = impact.iter().sum();
    let multiplier = aggregate_impact / shock.magnitude;

    Ok(ImpactResult {
        shocked_sector,
        shock_magnitude: shock.magnitude,
        ranked,
        aggregate_impact,
        multiplier,
    })
}
