//! # Storing of matrices in memory
//!
//! This module provides the data structures used to represent matrices and vectors in memory.
//! Algorithms working on them are in `algorithm`.

pub mod linear_algebra;
