//! # LU decomposition
//!
//! Factorization of a square matrix into a lower and an upper triangular matrix, with the row
//! swaps needed along the way. The determinant follows from the diagonal of the upper factor.
use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::error::LinalgError;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;

pub use permutation::FullPermutation;

mod decomposition;
mod permutation;

/// Decompose a matrix `A` into `PA = LU` where
///
/// * `P` is a row permutation
/// * `L` is lower triangular with `1`'s on the diagonal
/// * `U` is upper triangular, in row echelon form when `A` is singular
#[derive(PartialEq, Clone, Debug)]
pub struct LUDecomposition<F> {
    /// Lower triangular matrix `L`.
    lower: Matrix<F>,
    /// Upper triangular matrix `U`.
    upper: Matrix<F>,
    /// Row permutation `P`.
    ///
    /// The `forward` application of the permutation to rows of `A` corresponds to `PA`.
    row_permutation: FullPermutation,
}

impl<F: Element> LUDecomposition<F> {
    /// Lower triangular factor `L`, with a unit diagonal.
    pub fn lower(&self) -> &Matrix<F> {
        &self.lower
    }

    /// Upper triangular factor `U`.
    pub fn upper(&self) -> &Matrix<F> {
        &self.upper
    }

    /// Row swaps `P` applied during pivoting.
    pub fn row_permutation(&self) -> &FullPermutation {
        &self.row_permutation
    }

    /// The pair `(L, U)`, dropping the permutation.
    pub fn into_parts(self) -> (Matrix<F>, Matrix<F>) {
        (self.lower, self.upper)
    }

    /// Determinant of the decomposed matrix.
    ///
    /// Product of the diagonal of `U`, with the sign flipped for every row swap.
    pub fn determinant(&self) -> F {
        (0..self.upper.nr_rows())
            .map(|i| self.upper[(i, i)])
            .fold(self.row_permutation.sign(), |product, value| product * value)
    }
}

impl<F: Element> Matrix<F> {
    /// Compute the factorization `PA = LU` of this matrix.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the number of rows and columns differ.
    pub fn lu_decomposition(&self) -> Result<LUDecomposition<F>, LinalgError> {
        self.check_square()?;

        decomposition::decompose(self)
    }

    /// Compute the determinant of this matrix.
    ///
    /// A matrix that is singular to working precision has an exact zero on the diagonal of `U`,
    /// so its determinant is zero.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the number of rows and columns differ.
    pub fn determinant(&self) -> Result<F, LinalgError> {
        Ok(self.lu_decomposition()?.determinant())
    }

    pub(crate) fn check_square(&self) -> Result<(), LinalgError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare { rows: self.nr_rows(), columns: self.nr_columns(), })
        }
    }

    /// Per column, the magnitude at or below which a value produced by elimination counts as zero.
    ///
    /// For an `n x n` matrix, this is `n^2 * epsilon` times the largest magnitude in the column.
    /// Row operations leave rounding leftovers of about that size where the exact result is zero.
    pub(crate) fn zero_tolerances(&self) -> Vec<F> {
        let n = self.rows().fold(F::zero(), |count, _| count + F::one());

        (0..self.nr_columns())
            .map(|j| {
                let largest = self.rows().fold(F::zero(), |largest, row| largest.max(row[j].abs()));
                n * n * F::epsilon() * largest
            })
            .collect()
    }

    /// Row at or below `r` with the largest magnitude in `column`, the first one on ties.
    ///
    /// # Return value
    ///
    /// The index of that row and the magnitude of its value in `column`.
    pub(crate) fn largest_in_column(&self, r: usize, column: usize) -> (usize, F) {
        debug_assert!(r < self.nr_rows() && column < self.nr_columns());

        (r + 1..self.nr_rows()).fold((r, self[(r, column)].abs()), |(best, largest), i| {
            let value = self[(i, column)].abs();
            if value > largest {
                (i, value)
            } else {
                (best, largest)
            }
        })
    }
}

impl<F: Element> Display for LUDecomposition<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "L:")?;
        self.lower.fmt(f)?;
        writeln!(f, "U:")?;
        self.upper.fmt(f)?;
        writeln!(f, "P: {}", self.row_permutation)
    }
}
