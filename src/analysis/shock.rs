//! Demand-shock propagation: ΔX = L · Δd.

use nalgebra::DVector;

use crate::analysis::leontief::LeontiefInverse;
use crate::analysis::AnalysisError;

/// An exogenous change in final demand for one sector's output.
///
/// The magnitude may be negative to model a demand contraction. Zero
/// is accepted here; it only becomes an error when a multiplier is
/// requested from the resulting impacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandShock {
    pub sector: usize,
    pub magnitude: f64,
}

impl DemandShock {
    pub fn new(sector: usize, magnitude: f64) -> Self {
        Self { sector, magnitude }
    }
}

/// Computes the total production impact vector ΔX = L · Δd, where Δd
/// is zero everywhere except at the shocked sector.
///
/// The result is aligned with the original sector ordering. Fails if
/// the shocked index is outside the table.
pub fn propagate(
    inverse: &LeontiefInverse,
    shock: &DemandShock,
) -> Result<DVector<f64>, AnalysisError> {
    let n = inverse.sector_count();
    if shock.sector >= n {
        return Err(AnalysisError::SectorIndexOutOfRange {
            index: shock.sector,
            sector_count: n,
        });
    }

    let mut delta_demand = DVector::zeros(n);
    delta_demand[shock.sector] = shock.magnitude;

    let impact = inverse.matrix() * delta_demand;
    tracing::debug!(
        sector = shock.sector,
        magnitude = shock.magnitude,
        "propagated demand shock"
    );
    Ok(impact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::leontief::InversionOptions;
    use nalgebra::DMatrix;
    use rstest::rstest;

    fn inverse() -> LeontiefInverse {
        let a = DMatrix::from_row_slice(2, 2, &[0.2, 0.3, 0.4, 0.1]);
        LeontiefInverse::compute(&a, &InversionOptions::default()).unwrap()
    }

    #[test]
    fn impact_is_the_scaled_column_of_l() {
        let l = inverse();
        let impact = propagate(&l, &DemandShock::new(1, 100.0)).unwrap();
        for i in 0..2 {
            assert!((impact[i] - 100.0 * l.matrix()[(i, 1)]).abs() < 1e-12);
        }
    }

    #[rstest]
    #[case(2.0)]
    #[case(-1.0)]
    #[case(0.0)]
    #[case(1e6)]
    fn propagation_is_linear_in_the_magnitude(#[case] k: f64) {
        let l = inverse();
        let base = propagate(&l, &DemandShock::new(0, 10.0)).unwrap();
        let scaled = propagate(&l, &DemandShock::new(0, 10.0 * k)).unwrap();
        for i in 0..2 {
            assert!((scaled[i] - k * base[i]).abs() < 1e-9 * base[i].abs().max(1.0));
        }
    }

    #[test]
    fn out_of_range_sector_is_rejected() {
        let l = inverse();
        let err = propagate(&l, &DemandShock::new(2, 5.0)).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::SectorIndexOutOfRange { index: 2, sector_count: 2 }
        );
    }

    #[test]
    fn negative_magnitude_models_contraction() {
        let l = inverse();
        let impact = propagate(&l, &DemandShock::new(0, -50.0)).unwrap();
        assert!(impact[0] < 0.0);
    }
}
