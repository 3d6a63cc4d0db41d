//! # Algorithms
//!
//! Square matrix algebra on top of the dense containers: the LU decomposition with row pivoting,
//! the determinant derived from it and inversion by Gauss-Jordan elimination.
pub mod inverse;
pub mod lower_upper;
