//! # Vector
//!
//! A `Matrix` that has either a single row or a single column. It has no storage of its own; each
//! operation that could change the shape checks the resulting shape before it touches the
//! matrix, so a `Vector` can never be observed in a different shape.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::AbsDiffEq;

use crate::data::linear_algebra::error::LinalgError;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::row::Row;
use crate::data::linear_algebra::traits::Element;

/// Matrix of dimension `1 x n` (a row vector) or `n x 1` (a column vector).
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<F> {
    matrix: Matrix<F>,
}

impl<F: Element> Vector<F> {
    /// Create a row vector, of dimension `1 x values.len()`.
    pub fn row(values: Vec<F>) -> Result<Self, LinalgError> {
        let row = Row::new(values)?;

        Ok(Self { matrix: Matrix::from_rows(vec![row])?, })
    }

    /// Create a column vector, of dimension `values.len() x 1`.
    pub fn column(values: Vec<F>) -> Result<Self, LinalgError> {
        Ok(Self { matrix: Self::row(values)?.matrix.transpose(), })
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Errors
    ///
    /// `ShapeViolation` if neither `nr_rows` nor `nr_columns` is one.
    pub fn constant(value: F, nr_rows: usize, nr_columns: usize) -> Result<Self, LinalgError> {
        check_shape(nr_rows, nr_columns)?;

        Ok(Self { matrix: Matrix::constant(value, nr_rows, nr_columns)?, })
    }

    /// Create a row vector of zeros.
    pub fn zeros(len: usize) -> Result<Self, LinalgError> {
        Self::constant(F::zero(), 1, len)
    }

    /// Replace the contents of this vector by a general matrix.
    ///
    /// # Errors
    ///
    /// `ShapeViolation` if `matrix` has more than one row and more than one column. This vector is
    /// unchanged in that case.
    pub fn assign(&mut self, matrix: Matrix<F>) -> Result<(), LinalgError> {
        *self = Self::try_from(matrix)?;
        Ok(())
    }

    /// Retrieve the value at an index along the single axis of this vector.
    pub fn get(&self, i: usize) -> Result<F, LinalgError> {
        let (row, column) = self.coordinates(i);
        self.matrix.get(row, column)
    }

    /// Set the value at an index along the single axis of this vector.
    pub fn set(&mut self, i: usize, value: F) -> Result<(), LinalgError> {
        let (row, column) = self.coordinates(i);
        self.matrix.set(row, column, value)
    }

    /// Insert a row, see `Matrix::insert_row`.
    ///
    /// Only possible for column vectors, or row vectors of length one.
    pub fn insert_row(&mut self, row: Row<F>, position: usize) -> Result<(), LinalgError> {
        check_shape(self.nr_rows() + 1, self.nr_columns())?;

        self.matrix.insert_row(row, position)
    }

    /// Remove a row, see `Matrix::remove_row`.
    pub fn remove_row(&mut self, position: usize) -> Result<Row<F>, LinalgError> {
        check_shape(self.nr_rows() - 1, self.nr_columns())?;

        self.matrix.remove_row(position)
    }

    /// Insert a column, see `Matrix::insert_column`.
    ///
    /// Only possible for row vectors, or column vectors of length one.
    pub fn insert_column(&mut self, column: &Row<F>, position: usize) -> Result<(), LinalgError> {
        check_shape(self.nr_rows(), self.nr_columns() + 1)?;

        self.matrix.insert_column(column, position)
    }

    /// Remove a column, see `Matrix::remove_column`.
    pub fn remove_column(&mut self, position: usize) -> Result<Row<F>, LinalgError> {
        check_shape(self.nr_rows(), self.nr_columns() - 1)?;

        self.matrix.remove_column(position)
    }

    /// Add a vector of the same shape to this one.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the shapes differ, also when only the orientation differs.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.matrix.try_add_assign(&other.matrix)
    }

    /// Subtract a vector of the same shape from this one.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.matrix.try_sub_assign(&other.matrix)
    }

    /// Sum of two vectors of the same shape.
    pub fn try_add(&self, other: &Self) -> Result<Self, LinalgError> {
        Ok(Self { matrix: self.matrix.try_add(&other.matrix)?, })
    }

    /// Difference of two vectors of the same shape.
    pub fn try_sub(&self, other: &Self) -> Result<Self, LinalgError> {
        Ok(Self { matrix: self.matrix.try_sub(&other.matrix)?, })
    }

    /// Divide all values by a scalar, see `Matrix::try_div_assign`.
    pub fn try_div_assign(&mut self, divisor: F) -> Result<(), LinalgError> {
        self.matrix.try_div_assign(divisor)
    }

    /// All values divided by a scalar, as a new vector.
    pub fn try_div(&self, divisor: F) -> Result<Self, LinalgError> {
        Ok(Self { matrix: self.matrix.try_div(divisor)?, })
    }

    /// Element wise product of two vectors of the same shape.
    pub fn hadamard(left: &Self, right: &Self) -> Result<Self, LinalgError> {
        Ok(Self { matrix: Matrix::hadamard(&left.matrix, &right.matrix)?, })
    }

    fn coordinates(&self, i: usize) -> (usize, usize) {
        if self.is_row() {
            (0, i)
        } else {
            (i, 0)
        }
    }
}

impl<F> Vector<F> {
    /// Number of values in this vector.
    pub fn len(&self) -> usize {
        self.nr_rows() * self.nr_columns()
    }

    /// Whether this vector is empty, which never happens for a constructed vector.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this vector has a single row.
    pub fn is_row(&self) -> bool {
        self.nr_rows() == 1
    }

    /// Whether this vector has a single column.
    pub fn is_column(&self) -> bool {
        self.nr_columns() == 1
    }

    /// Get the number of rows.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Get the number of columns.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// View this vector as a general matrix, to use it in matrix arithmetic.
    pub fn as_matrix(&self) -> &Matrix<F> {
        &self.matrix
    }

    /// Forget that this matrix is a vector.
    pub fn into_matrix(self) -> Matrix<F> {
        self.matrix
    }
}

/// A vector needs a single row or a single column.
///
/// Sizes of zero are left for the matrix operations to reject.
fn check_shape(nr_rows: usize, nr_columns: usize) -> Result<(), LinalgError> {
    if nr_rows == 0 || nr_columns == 0 || nr_rows == 1 || nr_columns == 1 {
        Ok(())
    } else {
        Err(LinalgError::ShapeViolation { rows: nr_rows, columns: nr_columns, })
    }
}

impl<F> TryFrom<Matrix<F>> for Vector<F> {
    type Error = LinalgError;

    fn try_from(matrix: Matrix<F>) -> Result<Self, Self::Error> {
        check_shape(matrix.nr_rows(), matrix.nr_columns())?;

        Ok(Self { matrix, })
    }
}

impl<F> From<Vector<F>> for Matrix<F> {
    fn from(vector: Vector<F>) -> Self {
        vector.matrix
    }
}

impl<F> AsRef<Matrix<F>> for Vector<F> {
    fn as_ref(&self) -> &Matrix<F> {
        &self.matrix
    }
}

impl<F: Element> Neg for Vector<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { matrix: -self.matrix, }
    }
}

impl<F: Element> Neg for &Vector<F> {
    type Output = Vector<F>;

    fn neg(self) -> Self::Output {
        Vector { matrix: -&self.matrix, }
    }
}

macro_rules! impl_scalar_operation {
    ($assign_trait:ident, $assign_method:ident, $trait:ident, $method:ident) => {
        impl<F: Element> $assign_trait<F> for Vector<F> {
            fn $assign_method(&mut self, rhs: F) {
                $assign_trait::$assign_method(&mut self.matrix, rhs);
            }
        }

        impl<F: Element> $trait<F> for Vector<F> {
            type Output = Self;

            fn $method(self, rhs: F) -> Self::Output {
                Self { matrix: $trait::$method(self.matrix, rhs), }
            }
        }

        impl<F: Element> $trait<F> for &Vector<F> {
            type Output = Vector<F>;

            fn $method(self, rhs: F) -> Self::Output {
                Vector { matrix: $trait::$method(&self.matrix, rhs), }
            }
        }
    }
}

impl_scalar_operation!(AddAssign, add_assign, Add, add);
impl_scalar_operation!(SubAssign, sub_assign, Sub, sub);
impl_scalar_operation!(MulAssign, mul_assign, Mul, mul);

macro_rules! impl_left_scalar_multiplication {
    ($float:ty) => {
        impl Mul<Vector<$float>> for $float {
            type Output = Vector<$float>;

            fn mul(self, rhs: Vector<$float>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<&Vector<$float>> for $float {
            type Output = Vector<$float>;

            fn mul(self, rhs: &Vector<$float>) -> Self::Output {
                rhs * self
            }
        }
    }
}

impl_left_scalar_multiplication!(f32);
impl_left_scalar_multiplication!(f64);

impl<F: Element + AbsDiffEq<Epsilon=F>> AbsDiffEq for Vector<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        <F as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.matrix.abs_diff_eq(&other.matrix, epsilon)
    }
}

impl<F: Element> Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.matrix.fmt(f)
    }
}
