//! # Dense linear algebra
//!
//! Row-major matrices of floating point values that can be resized one row or column at a time,
//! with element-wise arithmetic and matrix multiplication. Square matrices can be decomposed into
//! `PA = LU`, which gives their determinant, and inverted by Gauss-Jordan elimination.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
