//! # Linear algebra primitives
//!
//! Dense, row-major containers: the `Row`, the `Matrix` built out of rows and the `Vector`, a
//! matrix restricted to a single row or a single column.
pub use error::LinalgError;
pub use matrix::Matrix;
pub use random::RandomRange;
pub use row::Row;
pub use traits::Element;
pub use vector::Vector;

pub mod error;
pub mod matrix;
pub mod random;
pub mod row;
pub mod traits;
pub mod vector;

/// Number of decimals used when rendering values as text.
pub const DISPLAY_PRECISION: usize = 3;
