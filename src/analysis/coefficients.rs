//! Technical-coefficients matrix A, derived by column normalization.

use nalgebra::DMatrix;

use crate::table::SectorTable;

/// Derives the technical-coefficients matrix A from a transaction table.
///
/// `A(i, j) = transaction(i, j) / columnTotal(j)`: the fraction of
/// sector j's total output value purchased as input from sector i.
/// Columns with zero total output are left all-zero by convention so
/// that no NaN/Inf ever reaches the inversion stage.
pub fn technical_coefficients(table: &SectorTable) -> DMatrix<f64> {
    let z = table.transactions();
    let n = table.sector_count();
    let mut a = DMatrix::zeros(n, n);

    for j in 0..n {
        let total: f64 = z.column(j).sum();
        if total == 0.0 {
            continue;
        }
        for i in 0..n {
            a[(i, j)] = z[(i, j)] / total;
        }
    }

    tracing::debug!(sectors = n, "derived technical coefficients");
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize, cells: &[f64]) -> SectorTable {
        let labels = (0..n).map(|i| format!("S{i}")).collect();
        SectorTable::new(labels, DMatrix::from_row_slice(n, n, cells)).unwrap()
    }

    #[test]
    fn shape_is_preserved_and_nonzero_columns_sum_to_one() {
        let t = table(3, &[10.0, 5.0, 0.0, 20.0, 15.0, 0.0, 30.0, 0.0, 0.0]);
        let a = technical_coefficients(&t);

        assert_eq!((a.nrows(), a.ncols()), (3, 3));
        for j in 0..2 {
            let sum: f64 = a.column(j).sum();
            assert!((sum - 1.0).abs() < 1e-9, "column {j} sums to {sum}");
        }
    }

    #[test]
    fn zero_output_column_stays_all_zero() {
        let t = table(2, &[3.0, 0.0, 1.0, 0.0]);
        let a = technical_coefficients(&t);

        for i in 0..2 {
            assert_eq!(a[(i, 1)], 0.0);
            assert!(a[(i, 1)].is_finite());
        }
        assert_eq!(a[(0, 0)], 0.75);
        assert_eq!(a[(1, 0)], 0.25);
    }

    #[test]
    fn negative_cells_pass_through_the_same_normalization() {
        // Non-negativity is a data convention, not an enforced invariant.
        let t = table(2, &[4.0, 1.0, -2.0, 1.0]);
        let a = technical_coefficients(&t);
        assert_eq!(a[(0, 0)], 2.0);
        assert_eq!(a[(1, 0)], -1.0);
    }
}
