use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dense_linalg::data::linear_algebra::{LinalgError, Matrix, RandomRange};

use crate::init_logging;

#[test]
fn decomposition_reproduces_permuted_matrix() {
    init_logging();

    let mut rng = StdRng::seed_from_u64(2021);
    let range = RandomRange::default();
    for size in 1..6 {
        let a = Matrix::<f64>::random(size, size, &range, &mut rng).unwrap();
        let lu = a.lu_decomposition().unwrap();

        let permuted = lu.row_permutation().apply_to_rows(&a).unwrap();
        assert_abs_diff_eq!(lu.lower().try_mul(lu.upper()).unwrap(), permuted, epsilon = 1e-9);

        for i in 0..size {
            assert_eq!(lu.lower()[(i, i)], 1f64);
            for j in i + 1..size {
                assert_eq!(lu.lower()[(i, j)], 0f64);
                assert_eq!(lu.upper()[(j, i)], 0f64);
            }
        }
    }
}

#[test]
fn determinant_is_multiplicative() {
    let a = Matrix::from_data(vec![vec![2f64, 1f64, 0f64], vec![0f64, 3f64, 1f64], vec![1f64, 0f64, 1f64]]).unwrap();
    let b = Matrix::from_data(vec![vec![0f64, 1f64, 2f64], vec![1f64, 0f64, 0f64], vec![4f64, 1f64, 1f64]]).unwrap();

    let product = a.try_mul(&b).unwrap();
    let expected = a.determinant().unwrap() * b.determinant().unwrap();
    assert_abs_diff_eq!(product.determinant().unwrap(), expected, epsilon = 1e-9);
    assert_abs_diff_eq!(a.transpose().determinant().unwrap(), a.determinant().unwrap(), epsilon = 1e-12);
}

#[test]
fn inverse_of_random_matrices() {
    init_logging();

    let mut rng = StdRng::seed_from_u64(5);
    let range = RandomRange::new(-5f64, 5f64, 0.5f64).unwrap();
    for size in 1..6 {
        let a = Matrix::random(size, size, &range, &mut rng).unwrap();
        // Close to singular, the result would be dominated by rounding errors
        if a.determinant().unwrap().abs() < 1e-6 {
            continue;
        }

        let inverse = a.invert().unwrap();
        let identity = Matrix::identity(size).unwrap();
        assert_abs_diff_eq!(a.try_mul(&inverse).unwrap(), identity, epsilon = 1e-6);
        assert_abs_diff_eq!(inverse.try_mul(&a).unwrap(), identity, epsilon = 1e-6);
    }
}

/// Determinant by cofactor expansion along the first row, exact for small integer matrices.
fn cofactor_determinant(data: &[Vec<f64>]) -> f64 {
    if data.len() == 1 {
        return data[0][0];
    }

    (0..data.len())
        .map(|j| {
            let minor = data[1..].iter()
                .map(|row| row.iter().enumerate().filter(|&(k, _)| k != j).map(|(_, &value)| value).collect())
                .collect::<Vec<Vec<_>>>();
            let sign = if j % 2 == 0 { 1f64 } else { -1f64 };
            sign * data[0][j] * cofactor_determinant(&minor)
        })
        .sum()
}

#[test]
fn sparse_integer_matrices() {
    init_logging();

    let mut rng = StdRng::seed_from_u64(27);
    for size in 1..=5 {
        for _ in 0..400 {
            let data = (0..size)
                .map(|_| {
                    (0..size)
                        .map(|_| if rng.gen_bool(0.5) { 0f64 } else { rng.gen_range(-3i32..=3) as f64 })
                        .collect()
                })
                .collect::<Vec<Vec<_>>>();
            let expected = cofactor_determinant(&data);
            let a = Matrix::from_data(data).unwrap();

            if expected == 0f64 {
                assert_eq!(a.determinant(), Ok(0f64), "{}", a);
                assert_eq!(a.invert(), Err(LinalgError::Singular), "{}", a);
            } else {
                let determinant = a.determinant().unwrap();
                assert_abs_diff_eq!(determinant, expected, epsilon = 1e-9 * expected.abs().max(1f64));

                let inverse = a.invert().unwrap();
                let identity = Matrix::identity(size).unwrap();
                assert_abs_diff_eq!(a.try_mul(&inverse).unwrap(), identity, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn rounding_leftovers_are_not_pivots() {
    let regular = Matrix::from_data(vec![
        vec![3f64, -1f64, 2f64, 0f64, 0f64],
        vec![-1f64, 1f64, 0f64, -2f64, -1f64],
        vec![0f64, -3f64, -3f64, 2f64, 0f64],
        vec![0f64, 0f64, 3f64, -2f64, 0f64],
        vec![0f64, -1f64, 0f64, -1f64, 0f64],
    ]).unwrap();
    assert_abs_diff_eq!(regular.determinant().unwrap(), 27f64, epsilon = 1e-9);
    let inverse = regular.invert().unwrap();
    assert_abs_diff_eq!(regular.try_mul(&inverse).unwrap(), Matrix::identity(5).unwrap(), epsilon = 1e-9);

    let singular = Matrix::from_data(vec![
        vec![-1f64, 3f64, -1f64, -3f64],
        vec![3f64, 0f64, 0f64, 0f64],
        vec![-2f64, -2f64, 0f64, 0f64],
        vec![0f64, -2f64, 0f64, 0f64],
    ]).unwrap();
    assert_eq!(singular.determinant(), Ok(0f64));
    assert_eq!(singular.invert(), Err(LinalgError::Singular));
}

#[test]
fn examples() {
    let a = Matrix::from_data(vec![vec![4f64, 3f64], vec![6f64, 3f64]]).unwrap();
    assert_abs_diff_eq!(a.determinant().unwrap(), -6f64, epsilon = 1e-12);

    let expected = Matrix::from_data(vec![vec![-0.5f64, 0.5f64], vec![1f64, -0.667f64]]).unwrap();
    assert_abs_diff_eq!(a.invert().unwrap(), expected, epsilon = 1e-3);
    assert_eq!(a.invert().unwrap().to_string(), "-0.500  0.500 \n 1.000 -0.667 \n");

    let zero_row = Matrix::from_data(vec![vec![1f64, 2f64], vec![0f64, 0f64]]).unwrap();
    assert_eq!(zero_row.determinant(), Ok(0f64));
    assert_eq!(zero_row.invert(), Err(LinalgError::Singular));

    let rectangular = Matrix::<f64>::zeros(2, 3).unwrap();
    assert_eq!(rectangular.invert(), Err(LinalgError::NotSquare { rows: 2, columns: 3 }));
}
