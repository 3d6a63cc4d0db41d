use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dense_linalg::data::linear_algebra::{LinalgError, Matrix, RandomRange, Row, Vector};

use crate::init_logging;

fn matrix(data: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_data(data.iter().map(|row| row.to_vec()).collect()).unwrap()
}

#[test]
fn row_insert_then_delete_restores() {
    let original = Row::new(vec![1f64, 2f64, 3f64]).unwrap();
    for position in 0..=original.len() {
        let mut row = original.clone();
        row.insert(9f64, position).unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row[position], 9f64);
        assert_eq!(row.remove(position), Ok(9f64));
        assert_eq!(row, original);
    }
}

#[test]
fn matrix_insert_then_delete_restores() {
    let original = matrix(&[&[1f64, 2f64, 3f64], &[4f64, 5f64, 6f64]]);

    let row = Row::new(vec![7f64, 8f64, 9f64]).unwrap();
    for position in 0..=original.nr_rows() {
        let mut m = original.clone();
        m.insert_row(row.clone(), position).unwrap();
        assert_eq!(m.nr_rows(), 3);
        assert_eq!(m.row(position), Ok(&row));
        assert_eq!(m.remove_row(position), Ok(row.clone()));
        assert_eq!(m, original);
    }

    let column = Row::new(vec![-1f64, -2f64]).unwrap();
    for position in 0..=original.nr_columns() {
        let mut m = original.clone();
        m.insert_column(&column, position).unwrap();
        assert_eq!(m.nr_columns(), 4);
        assert_eq!(m.column(position), Ok(column.clone()));
        assert_eq!(m.remove_column(position), Ok(column.clone()));
        assert_eq!(m, original);
    }
}

#[test]
fn failed_operations_leave_operands_unchanged() {
    let mut m = matrix(&[&[1f64, 2f64], &[3f64, 4f64]]);
    let original = m.clone();

    assert!(m.insert_row(Row::new(vec![1f64]).unwrap(), 0).is_err());
    assert!(m.insert_column(&Row::new(vec![1f64, 2f64, 3f64]).unwrap(), 0).is_err());
    assert!(m.remove_row(2).is_err());
    assert!(m.try_add_assign(&Matrix::zeros(2, 3).unwrap()).is_err());
    assert_eq!(m.try_div_assign(0f64), Err(LinalgError::DivideByZero));
    assert_eq!(m, original);
}

#[test]
fn operator_identities() {
    let a = matrix(&[&[1f64, -2f64, 3f64], &[0.5f64, 4f64, -1f64]]);
    let b = matrix(&[&[2f64, 2f64, 2f64], &[-1f64, 0f64, 1f64]]);

    assert_abs_diff_eq!(a.try_add(&b).unwrap().try_sub(&b).unwrap(), a);
    assert_abs_diff_eq!(-(-&a), a);
    assert_abs_diff_eq!((&a * 3f64).try_div(3f64).unwrap(), a, epsilon = 1e-12);
    assert_eq!(2f64 * &a, &a * 2f64);
    assert_eq!(Matrix::hadamard(&a, &b), Matrix::hadamard(&b, &a));
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn multiplication() {
    init_logging();

    let a = matrix(&[&[1f64, 2f64, 3f64], &[4f64, 5f64, 6f64]]);
    let b = matrix(&[&[7f64, 8f64], &[9f64, 10f64], &[11f64, 12f64]]);

    let product = a.try_mul(&b).unwrap();
    assert_eq!(product, matrix(&[&[58f64, 64f64], &[139f64, 154f64]]));
    assert_eq!(b.try_mul(&a).unwrap().nr_rows(), 3);
    assert_eq!(a.try_mul(&Matrix::identity(3).unwrap()), Ok(a.clone()));
    assert!(matches!(a.try_mul(&a), Err(LinalgError::DimensionMismatch(_))));

    // (AB)^T = B^T A^T
    assert_eq!(product.transpose(), b.transpose().try_mul(&a.transpose()).unwrap());
}

#[test]
fn vector_shape_is_kept() {
    let mut v = Vector::column(vec![1f64, 2f64, 3f64]).unwrap();
    let result = v.insert_column(&Row::new(vec![0f64, 0f64, 0f64]).unwrap(), 1);
    assert_eq!(result, Err(LinalgError::ShapeViolation { rows: 3, columns: 2 }));
    assert_eq!(v.len(), 3);

    let column = v.as_matrix();
    let outer = column.try_mul(&column.transpose()).unwrap();
    assert_eq!((outer.nr_rows(), outer.nr_columns()), (3, 3));
    assert!(Vector::try_from(outer).is_err());
}

#[test]
fn random_matrix_is_reproducible() {
    let range = RandomRange::new(-1f64, 1f64, 0.25f64).unwrap();
    let first = Matrix::random(4, 4, &range, &mut StdRng::seed_from_u64(7)).unwrap();
    let second = Matrix::random(4, 4, &range, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(first, second);
    assert!(first.rows().flatten().all(|&value| (-1f64..=1f64).contains(&value)));
}
