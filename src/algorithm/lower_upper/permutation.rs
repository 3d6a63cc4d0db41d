//! # Row permutation
//!
//! Record of the row swaps done while pivoting during the decomposition.
use std::fmt;

use crate::data::linear_algebra::error::LinalgError;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::Element;

/// Full permutation.
///
/// Both the entire forward and backward permutation is stored explicitly, together with the
/// parity of the number of swaps it was built from.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct FullPermutation {
    /// Index in the permuted order is mapped to the original index at that position.
    forward: Vec<usize>,
    /// Original index is mapped to its position in the permuted order.
    backward: Vec<usize>,
    /// Whether an odd number of transpositions has been applied.
    odd: bool,
}

impl FullPermutation {
    /// Create a new instance that maps an index onto itself.
    ///
    /// # Arguments
    ///
    /// * `n`: Number of elements in the permutation.
    pub fn identity(n: usize) -> Self {
        Self {
            forward: (0..n).collect(),
            backward: (0..n).collect(),
            odd: false,
        }
    }

    /// Exchange the elements at two positions.
    ///
    /// Swapping a position with itself changes nothing, also not the parity.
    pub fn swap(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.len() && j < self.len());

        if i != j {
            self.forward.swap(i, j);
            self.backward[self.forward[i]] = i;
            self.backward[self.forward[j]] = j;
            self.odd = !self.odd;
        }
    }

    /// Original index of the element that is now at position `i`.
    pub fn forward(&self, i: usize) -> usize {
        debug_assert!(i < self.len());

        self.forward[i]
    }

    /// Position of the element that was at original index `i`.
    pub fn backward(&self, i: usize) -> usize {
        debug_assert!(i < self.len());

        self.backward[i]
    }

    /// Size of the permutation.
    pub fn len(&self) -> usize {
        self.forward.len()
        // == self.backward.len()
    }

    /// Whether the permutation has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Determinant of the permutation matrix: `-1` after an odd number of swaps, `1` otherwise.
    pub fn sign<F: Element>(&self) -> F {
        if self.odd {
            -F::one()
        } else {
            F::one()
        }
    }

    /// Compute `PA`, the rows of `matrix` in the permuted order.
    pub fn apply_to_rows<F: Element>(&self, matrix: &Matrix<F>) -> Result<Matrix<F>, LinalgError> {
        if matrix.nr_rows() != self.len() {
            return Err(LinalgError::DimensionMismatch(format!(
                "a permutation of length {} can't reorder {} rows", self.len(), matrix.nr_rows(),
            )));
        }

        let rows = self.forward.iter()
            .map(|&i| matrix.row(i).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Matrix::from_rows(rows)
    }

    /// The permutation as a square matrix of zeros and ones.
    pub fn to_matrix<F: Element>(&self) -> Result<Matrix<F>, LinalgError> {
        let mut matrix = Matrix::zeros(self.len(), self.len())?;
        for (i, &j) in self.forward.iter().enumerate() {
            matrix[(i, j)] = F::one();
        }

        Ok(matrix)
    }
}

impl fmt::Display for FullPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if let Some((first, rest)) = self.forward.split_first() {
            write!(f, "{}", first)?;
            for i in rest {
                write!(f, ", {}", i)?;
            }
        }
        f.write_str(")")
    }
}
