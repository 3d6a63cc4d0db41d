//! # Elimination
//!
//! Gaussian elimination on a copy of the matrix, recording the multipliers in `L` and the row
//! swaps in `P`.
use log::{debug, trace};

use crate::algorithm::lower_upper::LUDecomposition;
use crate::algorithm::lower_upper::permutation::FullPermutation;
use crate::data::linear_algebra::error::LinalgError;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::row::Row;
use crate::data::linear_algebra::traits::Element;

/// Compute the factorization `PA = LU` of a square matrix.
///
/// Rows are processed top to bottom. The pivot of row `r` is in column `r + column_shift` and is
/// the value of largest magnitude in that column at or below row `r`. That row is swapped in,
/// together with the multipliers already recorded for it in `L`. When all candidates are within
/// the zero tolerance of the column, they are set to zero, the column is exhausted and the pivot
/// moves one column to the right for the same row.
pub(super) fn decompose<F: Element>(matrix: &Matrix<F>) -> Result<LUDecomposition<F>, LinalgError> {
    debug_assert!(matrix.is_square());
    let n = matrix.nr_rows();
    let tolerances = matrix.zero_tolerances();

    let mut upper = matrix.clone();
    let mut lower = Matrix::identity(n)?;
    let mut row_permutation = FullPermutation::identity(n);

    let mut column_shift = 0;
    let mut r = 0;
    while r < n && r + column_shift < n {
        let column = r + column_shift;

        let (pivot_row, largest) = upper.largest_in_column(r, column);
        if largest <= tolerances[column] {
            debug!("Column {} has no pivot for row {}, shifting to the right", column, r);
            for i in r..n {
                upper[(i, column)] = F::zero();
            }
            column_shift += 1;
            continue;
        }

        if pivot_row != r {
            debug!("Swapping rows {} and {} to pivot in column {}", r, pivot_row, column);
            upper.swap_rows(r, pivot_row);
            swap_multipliers(lower.rows_mut(), r, pivot_row);
            row_permutation.swap(r, pivot_row);
        }

        eliminate_below(&mut upper, &mut lower, r, column);
        r += 1;
    }

    Ok(LUDecomposition { lower, upper, row_permutation, })
}

/// Exchange the multipliers of rows `r` and `i > r` that were recorded in earlier steps.
///
/// Only the columns left of the diagonal of row `r` hold multipliers at this point.
fn swap_multipliers<F>(lower: &mut [Row<F>], r: usize, i: usize) {
    debug_assert!(r < i);

    let (top, bottom) = lower.split_at_mut(i);
    top[r].as_mut_slice()[..r].swap_with_slice(&mut bottom[0].as_mut_slice()[..r]);
}

/// Zero all entries below the pivot at `(r, column)`.
fn eliminate_below<F: Element>(upper: &mut Matrix<F>, lower: &mut Matrix<F>, r: usize, column: usize) {
    let (top, bottom) = upper.rows_mut().split_at_mut(r + 1);
    let pivot_row = &top[r];
    let pivot = pivot_row[column];
    debug_assert!(!pivot.is_zero());

    for (offset, row) in bottom.iter_mut().enumerate() {
        if row[column].is_zero() {
            continue;
        }

        let factor = row[column] / pivot;
        trace!("Row {} minus {} times row {}", r + 1 + offset, factor, r);
        row.sub_multiple_of_row(factor, pivot_row);
        row[column] = F::zero();
        lower[(r + 1 + offset, r)] = factor;
    }
}
