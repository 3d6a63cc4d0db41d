//! # Row
//!
//! Wrapping a `Vec` such that it is never empty and only changes length through explicit
//! insertion and deletion. A `Matrix` is an ordered collection of these.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice::{Iter, IterMut};

use approx::AbsDiffEq;
use itertools::Itertools;

use crate::data::linear_algebra::DISPLAY_PRECISION;
use crate::data::linear_algebra::error::{check_nonzero, LinalgError};
use crate::data::linear_algebra::traits::Element;

/// Uses a `Vec` as underlying data structure. Contains at least one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<F> {
    data: Vec<F>,
}

impl<F: Element> Row<F> {
    /// Create a row with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this row are equal to.
    /// * `len`: Length of the row, number of elements.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `len` is zero.
    pub fn constant(value: F, len: usize) -> Result<Self, LinalgError> {
        check_nonzero(len, "values in a row")?;

        Ok(Self { data: vec![value; len], })
    }

    /// Create a row of zeros.
    pub fn zeros(len: usize) -> Result<Self, LinalgError> {
        Self::constant(F::zero(), len)
    }

    /// Create a row from a list of values.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `data` is empty.
    pub fn new(data: Vec<F>) -> Result<Self, LinalgError> {
        check_nonzero(data.len(), "values in a row")?;

        Ok(Self { data, })
    }

    /// Retrieve the value at an index.
    pub fn get(&self, i: usize) -> Result<F, LinalgError> {
        self.check_index(i)?;

        Ok(self.data[i])
    }

    /// Set the value at an index.
    pub fn set(&mut self, i: usize, value: F) -> Result<(), LinalgError> {
        self.check_index(i)?;

        self.data[i] = value;
        Ok(())
    }

    /// Insert a value, shifting all values at and after `position` one place to the right.
    ///
    /// # Arguments
    ///
    /// * `value`: Value to insert.
    /// * `position`: Index the value will have after insertion, at most the current length.
    pub fn insert(&mut self, value: F, position: usize) -> Result<(), LinalgError> {
        if position > self.len() {
            return Err(LinalgError::InvalidPosition { position, len: self.len(), });
        }

        self.data.insert(position, value);
        Ok(())
    }

    /// Remove the value at `position`, shifting the values after it one place to the left.
    ///
    /// # Return value
    ///
    /// The removed value.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if there is no value at `position`, `InvalidDimension` if it is the last
    /// value of the row.
    pub fn remove(&mut self, position: usize) -> Result<F, LinalgError> {
        if position >= self.len() {
            return Err(LinalgError::InvalidPosition { position, len: self.len(), });
        }
        if self.len() == 1 {
            return Err(LinalgError::InvalidDimension(
                "cannot remove the only value of a row".to_string()
            ));
        }

        Ok(self.data.remove(position))
    }

    /// Add another row of the same length to this one, element by element.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.check_same_len(other, "add")?;

        for (value, &other_value) in self.data.iter_mut().zip_eq(&other.data) {
            *value += other_value;
        }
        Ok(())
    }

    /// Subtract another row of the same length from this one, element by element.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.check_same_len(other, "subtract")?;

        for (value, &other_value) in self.data.iter_mut().zip_eq(&other.data) {
            *value -= other_value;
        }
        Ok(())
    }

    /// Sum of two rows of the same length, as a new row.
    pub fn try_add(&self, other: &Self) -> Result<Self, LinalgError> {
        let mut sum = self.clone();
        sum.try_add_assign(other)?;
        Ok(sum)
    }

    /// Difference of two rows of the same length, as a new row.
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

        for value in &mut self.data {
            *value /= divisor;
        }
        Ok(())
    }

    /// All values divided by a scalar, as a new row.
    pub fn try_div(&self, divisor: F) -> Result<Self, LinalgError> {
        let mut quotient = self.clone();
        quotient.try_div_assign(divisor)?;
        Ok(quotient)
    }

    /// Element wise product of two rows of the same length.
    ///
    /// Also known as the Hadamard product.
    pub fn hadamard(left: &Self, right: &Self) -> Result<Self, LinalgError> {
        left.check_same_len(right, "multiply element wise")?;

        let data = left.data.iter()
            .zip_eq(&right.data)
            .map(|(&l, &r)| l * r)
            .collect();
        Ok(Self { data, })
    }

    /// Subtract a multiple of another row from this row.
    ///
    /// The elementary row operation of the elimination algorithms. Lengths are assumed equal.
    ///
    /// # Arguments
    ///
    /// * `factor`: Multiple of `other` to subtract.
    /// * `other`: Row of the same length.
    pub(crate) fn sub_multiple_of_row(&mut self, factor: F, other: &Self) {
        debug_assert_eq!(self.len(), other.len());

        for (value, &other_value) in self.data.iter_mut().zip_eq(&other.data) {
            *value -= factor * other_value;
        }
    }

    fn check_index(&self, i: usize) -> Result<(), LinalgError> {
        if i < self.len() {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange { index: i, len: self.len(), })
        }
    }

    fn check_same_len(&self, other: &Self, operation: &str) -> Result<(), LinalgError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch(format!(
                "cannot {} rows of lengths {} and {}", operation, self.len(), other.len(),
            )))
        }
    }
}

impl<F> Row<F> {
    /// Wrap values known to be non-empty.
    pub(crate) fn new_unchecked(data: Vec<F>) -> Self {
        debug_assert!(!data.is_empty());

        Self { data, }
    }

    /// The length of this row.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this row is empty, which never happens for a constructed row.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the values of this row.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Iterate mutably over the values of this row. The length can't be changed this way.
    pub fn iter_mut(&mut self) -> IterMut<'_, F> {
        self.data.iter_mut()
    }

    /// View the values as a slice.
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    /// View the values as a mutable slice, of which the length is fixed.
    pub fn as_mut_slice(&mut self) -> &mut [F] {
        &mut self.data
    }

    /// Get the data of this row.
    pub fn into_inner(self) -> Vec<F> {
        self.data
    }
}

impl<F: Element> TryFrom<Vec<F>> for Row<F> {
    type Error = LinalgError;

    fn try_from(data: Vec<F>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl<F> Index<usize> for Row<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl<F> IndexMut<usize> for Row<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len());

        &mut self.data[index]
    }
}

impl<'a, F> IntoIterator for &'a Row<F> {
    type Item = &'a F;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<F: Element> Neg for Row<F> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for value in &mut self.data {
            *value = -*value;
        }
        self
    }
}

impl<F: Element> Neg for &Row<F> {
    type Output = Row<F>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_scalar_operation {
    ($assign_trait:ident, $assign_method:ident, $trait:ident, $method:ident) => {
        impl<F: Element> $assign_trait<F> for Row<F> {
            fn $assign_method(&mut self, rhs: F) {
                for value in &mut self.data {
                    $assign_trait::$assign_method(value, rhs);
                }
            }
        }

        impl<F: Element> $trait<F> for Row<F> {
            type Output = Self;

            fn $method(mut self, rhs: F) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<F: Element> $trait<F> for &Row<F> {
            type Output = Row<F>;

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
        impl Mul<Row<$float>> for $float {
            type Output = Row<$float>;

            fn mul(self, rhs: Row<$float>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<&Row<$float>> for $float {
            type Output = Row<$float>;

            fn mul(self, rhs: &Row<$float>) -> Self::Output {
                rhs * self
            }
        }
    }
}

impl_left_scalar_multiplication!(f32);
impl_left_scalar_multiplication!(f64);

impl<F: Element + AbsDiffEq<Epsilon=F>> AbsDiffEq for Row<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        <F as AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len() && self.data.iter()
            .zip(&other.data)
            .all(|(value, other_value)| value.abs_diff_eq(other_value, epsilon))
    }
}

/// Fixed point with `DISPLAY_PRECISION` decimals, non-negative values are preceded by a space to
/// line up with negative ones, and every value is followed by a space.
impl<F: Element> Display for Row<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.data {
            if !(*value < F::zero()) {
                f.write_str(" ")?;
            }
            write!(f, "{:.*} ", DISPLAY_PRECISION, value)?;
        }
        Ok(())
    }
}
