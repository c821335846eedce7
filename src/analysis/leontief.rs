//! Inversion of (I - A) into the total-requirements matrix L.

use nalgebra::DMatrix;

use crate::analysis::AnalysisError;

/// Tunables for the inversion stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InversionOptions {
    /// Reject (I - A) whose condition estimate σmax/σmin exceeds this.
    /// An exactly rank-deficient matrix is rejected regardless.
    pub condition_limit: f64,
}

impl Default for InversionOptions {
    fn default() -> Self {
        Self { condition_limit: 1e12 }
    }
}

/// The Leontief inverse L = (I - A)⁻¹.
///
/// Entry (i, j) is the total output of sector i, direct plus indirect,
/// required per unit of final demand for sector j. Constructed once
/// per table and shared read-only across shock queries.
#[derive(Debug, Clone, PartialEq)]
pub struct LeontiefInverse {
    matrix: DMatrix<f64>,
    condition: f64,
}

impl LeontiefInverse {
    /// Computes L from the technical-coefficients matrix A.
    ///
    /// Singularity is detected before inverting, via the ratio of the
    /// largest to the smallest singular value of (I - A); the default
    /// limit is 1e12 (see [`InversionOptions`]). On rejection no
    /// matrix is returned, partial results are never surfaced.
    pub fn compute(
        coefficients: &DMatrix<f64>,
        options: &InversionOptions,
    ) -> Result<Self, AnalysisError> {
        let n = coefficients.nrows();
        if n == 0 {
            return Ok(Self { matrix: DMatrix::zeros(0, 0), condition: 1.0 });
        }

        let m = DMatrix::identity(n, n) - coefficients;

        let svd = m.clone().svd(false, false);
        let sigma_max = svd.singular_values.max();
        let sigma_min = svd.singular_values.min();
        let condition = if sigma_min > 0.0 {
            sigma_max / sigma_min
        } else {
            f64::INFINITY
        };

        if !condition.is_finite() || condition > options.condition_limit {
            return Err(AnalysisError::SingularMatrix {
                condition,
                limit: options.condition_limit,
            });
        }

        // The condition check above filters numerically-dubious inputs;
        // LU can still report exact singularity on its own.
        let matrix = m.try_inverse().ok_or(AnalysisError::SingularMatrix {
            condition,
            limit: options.condition_limit,
        })?;

        tracing::debug!(sectors = n, condition, "inverted Leontief matrix");
        Ok(Self { matrix, condition })
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn sector_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// Condition estimate of (I - A) recorded at inversion time.
    pub fn condition(&self) -> f64 {
        self.condition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_conditioned_a() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            3,
            &[
                0.10, 0.20, 0.05, //
                0.30, 0.10, 0.20, //
                0.05, 0.25, 0.15,
            ],
        )
    }

    #[test]
    fn inversion_round_trips_to_identity() {
        let a = well_conditioned_a();
        let l = LeontiefInverse::compute(&a, &InversionOptions::default()).unwrap();

        let n = a.nrows();
        let product = l.matrix() * (DMatrix::identity(n, n) - &a);
        let identity = DMatrix::<f64>::identity(n, n);
        for i in 0..n {
            for j in 0..n {
                assert!(
                    (product[(i, j)] - identity[(i, j)]).abs() < 1e-6,
                    "L(I-A) differs from I at ({i},{j}): {}",
                    product[(i, j)]
                );
            }
        }
    }

    #[test]
    fn identity_coefficients_are_rejected_as_singular() {
        // A = I makes (I - A) the zero matrix, exactly singular.
        let a = DMatrix::<f64>::identity(3, 3);
        let err = LeontiefInverse::compute(&a, &InversionOptions::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::SingularMatrix { .. }));
    }

    #[test]
    fn condition_limit_is_honored() {
        let a = well_conditioned_a();
        let strict = InversionOptions { condition_limit: 1.0 };
        let err = LeontiefInverse::compute(&a, &strict).unwrap_err();
        match err {
            AnalysisError::SingularMatrix { condition, limit } => {
                assert_eq!(limit, 1.0);
                assert!(condition > 1.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_coefficients_invert_to_identity() {
        let a = DMatrix::<f64>::zeros(2, 2);
        let l = LeontiefInverse::compute(&a, &InversionOptions::default()).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((l.matrix()[(i, j)] - expected).abs() < 1e-12);
            }
        }
        assert!((l.condition() - 1.0).abs() < 1e-9);
    }
}
