//! # Traits for elements of the dense data structures
//!
//! The containers in this crate are not tied to a single floating point type. All they need is a
//! handful of numeric operations, a way to compare against zero and a way to print the values.
//!
//! Stable Rust has no trait aliases, so the bound is spelled out once here as a trait with a
//! blanket implementation. Any type satisfying the bounds, most notably `f32` and `f64`, is an
//! `Element` automatically.
use std::fmt::{Debug, Display};

use num_traits::{Float, NumAssign};

/// Element of a `Row`, `Matrix` or `Vector`.
///
/// This is an alias for the traits that are needed to implement the arithmetic, the elimination
/// algorithms and the textual rendering of the aforementioned types.
pub trait Element:
    Float +
    NumAssign +
    Display +
    Debug
{
}

impl<T> Element for T
where
    T: Float + NumAssign + Display + Debug,
{
}
