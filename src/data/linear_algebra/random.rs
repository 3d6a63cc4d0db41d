//! # Random containers
//!
//! Filling matrices and vectors with values drawn from a discrete range. The source of randomness
//! is always passed in by the caller, who decides how and when it gets seeded.
use num_traits::NumCast;
use rand::Rng;

use crate::data::linear_algebra::error::{check_nonzero, LinalgError};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::row::Row;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::Vector;

/// Values `lower, lower + step, lower + 2 step, ...` up to and including `upper`.
///
/// The count of values is rounded up, so the last value can exceed `upper` by less than `step`
/// when the width of the range is not a multiple of the step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RandomRange<F> {
    lower: F,
    upper: F,
    step: F,
    nr_steps: i32,
}

impl<F: Element> RandomRange<F> {
    /// Create a new range.
    ///
    /// # Arguments
    ///
    /// * `lower`: Smallest value that can be drawn.
    /// * `upper`: Largest value that can be drawn, up to rounding to the step.
    /// * `step`: Precision, difference between two consecutive values.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if the step is not positive, the limits are in the wrong order or there
    /// are more than `i32::MAX` values in the range.
    pub fn new(lower: F, upper: F, step: F) -> Result<Self, LinalgError> {
        if !(step > F::zero()) {
            return Err(LinalgError::InvalidDimension(format!("precision step {} must be positive", step)));
        }
        if !(lower <= upper) {
            return Err(LinalgError::InvalidDimension(format!(
                "lower limit {} is larger than upper limit {}", lower, upper,
            )));
        }

        let nr_steps = ((upper - lower) / step + F::one()).ceil().to_i32()
            .ok_or_else(|| LinalgError::InvalidDimension(format!(
                "too many values between {} and {} with precision step {}", lower, upper, step,
            )))?;

        Ok(Self { lower, upper, step, nr_steps, })
    }

    /// Smallest value that can be drawn.
    pub fn lower(&self) -> F {
        self.lower
    }

    /// Largest value that can be drawn, before rounding to the step.
    pub fn upper(&self) -> F {
        self.upper
    }

    /// Difference between two consecutive values.
    pub fn step(&self) -> F {
        self.step
    }

    /// Draw a single value.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<F, LinalgError> {
        let k = rng.gen_range(0..self.nr_steps);
        let k = <F as NumCast>::from(k)
            .ok_or_else(|| LinalgError::InvalidDimension(format!("step count {} can't be represented", k)))?;

        Ok(self.lower + k * self.step)
    }
}

macro_rules! impl_default_range {
    ($float:ty) => {
        impl Default for RandomRange<$float> {
            fn default() -> Self {
                Self { lower: -10.0, upper: 10.0, step: 0.1, nr_steps: 201, }
            }
        }
    }
}

impl_default_range!(f32);
impl_default_range!(f64);

impl<F: Element> Matrix<F> {
    /// Create a matrix filled with values drawn from a range.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows, at least one.
    /// * `nr_columns`: Number of columns, at least one.
    /// * `range`: Values to draw from.
    /// * `rng`: Source of randomness.
    pub fn random<R: Rng>(
        nr_rows: usize,
        nr_columns: usize,
        range: &RandomRange<F>,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        check_nonzero(nr_rows, "rows")?;
        check_nonzero(nr_columns, "columns")?;

        let rows = (0..nr_rows)
            .map(|_| {
                (0..nr_columns)
                    .map(|_| range.sample(rng))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Row::new_unchecked)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

impl<F: Element> Vector<F> {
    /// Create a row vector filled with values drawn from a range.
    pub fn random<R: Rng>(len: usize, range: &RandomRange<F>, rng: &mut R) -> Result<Self, LinalgError> {
        Self::try_from(Matrix::random(1, len, range, rng)?)
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::data::linear_algebra::error::LinalgError;
    use crate::data::linear_algebra::matrix::Matrix;
    use crate::data::linear_algebra::random::RandomRange;
    use crate::data::linear_algebra::vector::Vector;

    #[test]
    fn invalid_ranges() {
        assert!(matches!(RandomRange::new(0f64, 1f64, 0f64), Err(LinalgError::InvalidDimension(_))));
        assert!(matches!(RandomRange::new(0f64, 1f64, -0.5f64), Err(LinalgError::InvalidDimension(_))));
        assert!(matches!(RandomRange::new(1f64, 0f64, 0.5f64), Err(LinalgError::InvalidDimension(_))));
        assert!(matches!(RandomRange::new(0f64, 1e12f64, 1e-3f64), Err(LinalgError::InvalidDimension(_))));
    }

    #[test]
    fn default_range() {
        let range = RandomRange::<f64>::default();
        assert_eq!(range, RandomRange::new(-10f64, 10f64, 0.1f64).unwrap());
    }

    #[test]
    fn values_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let range = RandomRange::new(-2f64, 2f64, 0.5f64).unwrap();
        let m = Matrix::random(4, 5, &range, &mut rng).unwrap();

        assert_eq!((m.nr_rows(), m.nr_columns()), (4, 5));
        for row in m.rows() {
            for &value in row {
                assert!((-2f64..=2f64).contains(&value));
                // Multiples of the step are exact for this range
                assert_eq!((value * 2f64).fract(), 0f64);
            }
        }
    }

    #[test]
    fn single_value() {
        let mut rng = StdRng::seed_from_u64(2);
        let range = RandomRange::new(3f64, 3f64, 1f64).unwrap();
        assert_eq!(Matrix::random(2, 2, &range, &mut rng), Matrix::constant(3f64, 2, 2));
    }

    #[test]
    fn deterministic_given_seed() {
        let range = RandomRange::default();
        let first = Matrix::<f64>::random(3, 3, &range, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = Matrix::<f64>::random(3, 3, &range, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn vector() {
        let mut rng = StdRng::seed_from_u64(3);
        let v = Vector::<f32>::random(6, &RandomRange::default(), &mut rng).unwrap();
        assert!(v.is_row());
        assert_eq!(v.len(), 6);

        let result = Vector::<f32>::random(0, &RandomRange::default(), &mut rng);
        assert!(matches!(result, Err(LinalgError::InvalidDimension(_))));
    }
}
