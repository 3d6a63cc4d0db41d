//! # Matrix
//!
//! A row-major matrix: an ordered collection of `Row`s that all have the same length. Rows and
//! columns can be inserted and removed, and the usual arithmetic is available. The algorithms
//! that only make sense for square matrices live in `crate::algorithm`.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice::Iter;

use approx::AbsDiffEq;
use itertools::Itertools;

use crate::data::linear_algebra::error::{check_nonzero, LinalgError};
use crate::data::linear_algebra::row::Row;
use crate::data::linear_algebra::traits::Element;

/// Uses a `Vec<Row<F>>` as underlying data structure.
///
/// Has at least one row and one column, and all rows have length `nr_columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<F> {
    rows: Vec<Row<F>>,
    nr_columns: usize,
}

impl<F: Element> Matrix<F> {
    /// Create a matrix with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this matrix are equal to.
    /// * `nr_rows`: Number of rows, at least one.
    /// * `nr_columns`: Number of columns, at least one.
    pub fn constant(value: F, nr_rows: usize, nr_columns: usize) -> Result<Self, LinalgError> {
        check_nonzero(nr_rows, "rows")?;
        check_nonzero(nr_columns, "columns")?;

        let row = Row::constant(value, nr_columns)?;
        Ok(Self { rows: vec![row; nr_rows], nr_columns, })
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Result<Self, LinalgError> {
        Self::constant(F::zero(), nr_rows, nr_columns)
    }

    /// Create a square identity matrix with `size` rows.
    pub fn identity(size: usize) -> Result<Self, LinalgError> {
        let mut matrix = Self::zeros(size, size)?;
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            row[i] = F::one();
        }

        Ok(matrix)
    }

    /// Create a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if there are no rows, `DimensionMismatch` if the rows don't all have the
    /// length of the first row.
    pub fn from_rows(rows: Vec<Row<F>>) -> Result<Self, LinalgError> {
        check_nonzero(rows.len(), "rows")?;
        let nr_columns = rows[0].len();

        if let Some((i, row)) = rows.iter().find_position(|row| row.len() != nr_columns) {
            return Err(LinalgError::DimensionMismatch(format!(
                "row {} has length {} while the first row has length {}", i, row.len(), nr_columns,
            )));
        }

        Ok(Self { rows, nr_columns, })
    }

    /// Create a matrix from row-major nested data.
    pub fn from_data(data: Vec<Vec<F>>) -> Result<Self, LinalgError> {
        let rows = data.into_iter()
            .map(Row::new)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> Result<F, LinalgError> {
        self.row(i)?.get(j)
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<(), LinalgError> {
        self.check_row_index(i)?;

        self.rows[i].set(j, value)
    }

    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> Result<&Row<F>, LinalgError> {
        self.check_row_index(i)?;

        Ok(&self.rows[i])
    }

    /// Mutably borrow the values of row `i`.
    ///
    /// Only the values are exposed, the length of the row is fixed by the matrix.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [F], LinalgError> {
        self.check_row_index(i)?;

        Ok(self.rows[i].as_mut_slice())
    }

    /// Copy the values of column `j` into a new row.
    pub fn column(&self, j: usize) -> Result<Row<F>, LinalgError> {
        if j >= self.nr_columns {
            return Err(LinalgError::IndexOutOfRange { index: j, len: self.nr_columns, });
        }

        Ok(Row::new_unchecked(self.rows.iter().map(|row| row[j]).collect()))
    }

    /// Insert a row such that it gets index `position`.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `position` is larger than the number of rows, `DimensionMismatch` if
    /// the length of `row` differs from the number of columns. The matrix is unchanged in both
    /// cases.
    pub fn insert_row(&mut self, row: Row<F>, position: usize) -> Result<(), LinalgError> {
        if position > self.nr_rows() {
            return Err(LinalgError::InvalidPosition { position, len: self.nr_rows(), });
        }
        if row.len() != self.nr_columns {
            return Err(LinalgError::DimensionMismatch(format!(
                "cannot insert a row of length {} into a matrix with {} columns",
                row.len(), self.nr_columns,
            )));
        }

        self.rows.insert(position, row);
        Ok(())
    }

    /// Remove the row at index `position`.
    ///
    /// # Return value
    ///
    /// The removed row.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if there is no such row, `InvalidDimension` if it is the only row.
    pub fn remove_row(&mut self, position: usize) -> Result<Row<F>, LinalgError> {
        if position >= self.nr_rows() {
            return Err(LinalgError::InvalidPosition { position, len: self.nr_rows(), });
        }
        if self.nr_rows() == 1 {
            return Err(LinalgError::InvalidDimension(
                "cannot remove the only row of a matrix".to_string()
            ));
        }

        Ok(self.rows.remove(position))
    }

    /// Insert a column such that it gets index `position`.
    ///
    /// # Arguments
    ///
    /// * `column`: Values of the new column, from the top row to the bottom row.
    /// * `position`: Index of the new column, at most the current number of columns.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` or `DimensionMismatch`, analogous to `insert_row`.
    pub fn insert_column(&mut self, column: &Row<F>, position: usize) -> Result<(), LinalgError> {
        if position > self.nr_columns {
            return Err(LinalgError::InvalidPosition { position, len: self.nr_columns, });
        }
        if column.len() != self.nr_rows() {
            return Err(LinalgError::DimensionMismatch(format!(
                "cannot insert a column of length {} into a matrix with {} rows",
                column.len(), self.nr_rows(),
            )));
        }

        for (row, &value) in self.rows.iter_mut().zip_eq(column) {
            row.insert(value, position)?;
        }
        self.nr_columns += 1;

        Ok(())
    }

    /// Remove the column at index `position`.
    ///
    /// # Return value
    ///
    /// The values of the removed column.
    pub fn remove_column(&mut self, position: usize) -> Result<Row<F>, LinalgError> {
        if position >= self.nr_columns {
            return Err(LinalgError::InvalidPosition { position, len: self.nr_columns, });
        }
        if self.nr_columns == 1 {
            return Err(LinalgError::InvalidDimension(
                "cannot remove the only column of a matrix".to_string()
            ));
        }

        let values = self.rows.iter_mut()
            .map(|row| row.remove(position))
            .collect::<Result<Vec<_>, _>>()?;
        self.nr_columns -= 1;

        Ok(Row::new_unchecked(values))
    }

    /// Add a matrix of the same shape to this one.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.check_same_shape(other, "add")?;

        for (row, other_row) in self.rows.iter_mut().zip_eq(&other.rows) {
            row.try_add_assign(other_row)?;
        }
        Ok(())
    }

    /// Subtract a matrix of the same shape from this one.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.check_same_shape(other, "subtract")?;

        for (row, other_row) in self.rows.iter_mut().zip_eq(&other.rows) {
            row.try_sub_assign(other_row)?;
        }
        Ok(())
    }

    /// Sum of two matrices of the same shape.
    pub fn try_add(&self, other: &Self) -> Result<Self, LinalgError> {
        let mut sum = self.clone();
        sum.try_add_assign(other)?;
        Ok(sum)
    }

    /// Difference of two matrices of the same shape.
    pub fn try_sub(&self, other: &Self) -> Result<Self, LinalgError> {
        let mut difference = self.clone();
        difference.try_sub_assign(other)?;
        Ok(difference)
    }

    /// Divide all values by a scalar.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if `divisor` is zero, in which case nothing is changed.
    pub fn try_div_assign(&mut self, divisor: F) -> Result<(), LinalgError> {
        if divisor.is_zero() {
            return Err(LinalgError::DivideByZero);
        }

        for row in &mut self.rows {
            row.try_div_assign(divisor)?;
        }
        Ok(())
    }

    /// All values divided by a scalar, as a new matrix.
    pub fn try_div(&self, divisor: F) -> Result<Self, LinalgError> {
        let mut quotient = self.clone();
        quotient.try_div_assign(divisor)?;
        Ok(quotient)
    }

    /// Element wise product of two matrices of the same shape.
    pub fn hadamard(left: &Self, right: &Self) -> Result<Self, LinalgError> {
        left.check_same_shape(right, "multiply element wise")?;

        let rows = left.rows.iter()
            .zip_eq(&right.rows)
            .map(|(left_row, right_row)| Row::hadamard(left_row, right_row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows, nr_columns: left.nr_columns, })
    }

    /// Matrix product `self * other`.
    ///
    /// # Return value
    ///
    /// A matrix with as many rows as `self` and as many columns as `other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of columns of `self` differs from the number of rows of
    /// `other`.
    pub fn try_mul(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.nr_columns != other.nr_rows() {
            return Err(LinalgError::DimensionMismatch(format!(
                "cannot multiply a {} x {} matrix with a {} x {} matrix",
                self.nr_rows(), self.nr_columns, other.nr_rows(), other.nr_columns,
            )));
        }

        let rows = self.rows.iter()
            .map(|row| {
                let values = (0..other.nr_columns)
                    .map(|j| {
                        row.iter()
                            .zip_eq(&other.rows)
                            .fold(F::zero(), |total, (&value, other_row)| total + value * other_row[j])
                    })
                    .collect();
                Row::new_unchecked(values)
            })
            .collect();

        Ok(Self { rows, nr_columns: other.nr_columns, })
    }

    /// Replace this matrix by the product `self * other`.
    pub fn try_mul_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        *self = self.try_mul(other)?;
        Ok(())
    }

    /// The transpose, a new matrix with rows and columns switched.
    pub fn transpose(&self) -> Self {
        let rows = (0..self.nr_columns)
            .map(|j| Row::new_unchecked(self.rows.iter().map(|row| row[j]).collect()))
            .collect();

        Self { rows, nr_columns: self.nr_rows(), }
    }

    /// Exchange two rows.
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.nr_rows() && j < self.nr_rows());

        self.rows.swap(i, j);
    }

    /// Mutable access to all rows for the elimination algorithms, which keep the lengths intact.
    pub(crate) fn rows_mut(&mut self) -> &mut [Row<F>] {
        &mut self.rows
    }

    fn check_row_index(&self, i: usize) -> Result<(), LinalgError> {
        if i < self.nr_rows() {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange { index: i, len: self.nr_rows(), })
        }
    }

    fn check_same_shape(&self, other: &Self, operation: &str) -> Result<(), LinalgError> {
        if self.nr_rows() == other.nr_rows() && self.nr_columns == other.nr_columns {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch(format!(
                "cannot {} a {} x {} matrix and a {} x {} matrix",
                operation, self.nr_rows(), self.nr_columns, other.nr_rows(), other.nr_columns,
            )))
        }
    }
}

impl<F> Matrix<F> {
    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Whether the number of rows equals the number of columns.
    pub fn is_square(&self) -> bool {
        self.nr_rows() == self.nr_columns
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> Iter<'_, Row<F>> {
        self.rows.iter()
    }

    /// Get the rows of this matrix.
    pub fn into_rows(self) -> Vec<Row<F>> {
        self.rows
    }
}

impl<F> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        &self.rows[i][j]
    }
}

impl<F> IndexMut<(usize, usize)> for Matrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        &mut self.rows[i][j]
    }
}

impl<F: Element> Neg for Matrix<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let nr_columns = self.nr_columns;
        let rows = self.rows.into_iter().map(Neg::neg).collect();

        Self { rows, nr_columns, }
    }
}

impl<F: Element> Neg for &Matrix<F> {
    type Output = Matrix<F>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_scalar_operation {
    ($assign_trait:ident, $assign_method:ident, $trait:ident, $method:ident) => {
        impl<F: Element> $assign_trait<F> for Matrix<F> {
            fn $assign_method(&mut self, rhs: F) {
                for row in &mut self.rows {
                    $assign_trait::$assign_method(row, rhs);
                }
            }
        }

        impl<F: Element> $trait<F> for Matrix<F> {
            type Output = Self;

            fn $method(mut self, rhs: F) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<F: Element> $trait<F> for &Matrix<F> {
            type Output = Matrix<F>;

            fn $method(self, rhs: F) -> Self::Output {
                $trait::$method(self.clone(), rhs)
            }
        }
    }
}

impl_scalar_operation!(AddAssign, add_assign, Add, add);
impl_scalar_operation!(SubAssign, sub_assign, Sub, sub);
impl_scalar_operation!(MulAssign, mul_assign, Mul, mul);

macro_rules! impl_left_scalar_multiplication {
    ($float:ty) => {
        impl Mul<Matrix<$float>> for $float {
            type Output = Matrix<$float>;

            fn mul(self, rhs: Matrix<$float>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<&Matrix<$float>> for $float {
            type Output = Matrix<$float>;

            fn mul(self, rhs: &Matrix<$float>) -> Self::Output {
                rhs * self
            }
        }
    }
}

impl_left_scalar_multiplication!(f32);
impl_left_scalar_multiplication!(f64);

impl<F: Element + AbsDiffEq<Epsilon=F>> AbsDiffEq for Matrix<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        <F as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.nr_rows() == other.nr_rows() && self.nr_columns == other.nr_columns && self.rows.iter()
            .zip(&other.rows)
            .all(|(row, other_row)| row.abs_diff_eq(other_row, epsilon))
    }
}

/// One line per row, see the `Display` implementation of `Row`.
impl<F: Element> Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
