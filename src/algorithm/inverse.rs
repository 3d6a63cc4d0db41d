//! # Inversion
//!
//! Gauss-Jordan elimination on the augmented system `[A | I]`. Every row operation on `A` is
//! repeated on the identity, which turns into `A^-1` once `A` has been reduced to the identity.
use log::debug;

use crate::data::linear_algebra::error::LinalgError;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;

impl<F: Element> Matrix<F> {
    /// Compute the inverse of this matrix.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the number of rows and columns differ, `Singular` if the matrix is singular
    /// to working precision.
    pub fn invert(&self) -> Result<Self, LinalgError> {
        if self.determinant()?.is_zero() {
            debug!("Not inverting a singular {} x {} matrix", self.nr_rows(), self.nr_columns());
            return Err(LinalgError::Singular);
        }

        let n = self.nr_rows();
        let tolerances = self.zero_tolerances();
        let mut left = self.clone();
        let mut right = Matrix::identity(n)?;

        // Forward pass, the left matrix becomes upper triangular with a unit diagonal
        for r in 0..n {
            let (pivot_row, largest) = left.largest_in_column(r, r);
            if largest <= tolerances[r] {
                debug!("No pivot in column {} of the augmented system", r);
                return Err(LinalgError::Singular);
            }
            if pivot_row != r {
                debug!("Swapping rows {} and {} of the augmented system", r, pivot_row);
                left.swap_rows(r, pivot_row);
                right.swap_rows(r, pivot_row);
            }

            let pivot = left[(r, r)];
            left.rows_mut()[r].try_div_assign(pivot)?;
            right.rows_mut()[r].try_div_assign(pivot)?;

            for i in r + 1..n {
                let factor = left[(i, r)];
                if !factor.is_zero() {
                    sub_multiple_of_row(&mut left, i, factor, r);
                    sub_multiple_of_row(&mut right, i, factor, r);
                }
            }
        }

        // Backward pass, clearing the columns above the diagonal from right to left
        for r in (1..n).rev() {
            for i in 0..r {
                let factor = left[(i, r)];
                if !factor.is_zero() {
                    sub_multiple_of_row(&mut left, i, factor, r);
                    sub_multiple_of_row(&mut right, i, factor, r);
                }
            }
        }

        Ok(right)
    }
}

/// Subtract `factor` times row `source` from row `target` of the same matrix.
fn sub_multiple_of_row<F: Element>(matrix: &mut Matrix<F>, target: usize, factor: F, source: usize) {
    debug_assert_ne!(target, source);

    let rows = matrix.rows_mut();
    if target < source {
        let (top, bottom) = rows.split_at_mut(source);
        top[target].sub_multiple_of_row(factor, &bottom[0]);
    } else {
        let (top, bottom) = rows.split_at_mut(target);
        bottom[0].sub_multiple_of_row(factor, &top[source]);
    }
}
