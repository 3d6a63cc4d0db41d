//! # Error reporting for the dense containers and the algorithms working on them
//!
//! Every operation that can be handed arguments it can't work with returns one of these errors.
//! Failing operations don't change their operands.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `LinalgError` is created when an operation can't be carried out on its operands.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LinalgError {
    /// A requested size is smaller than one, or a configuration value is degenerate.
    ///
    /// The contained `String` is a message for the end user.
    InvalidDimension(String),
    /// The shapes of two operands don't fit together for the requested operation.
    ///
    /// The contained `String` is a message for the end user.
    DimensionMismatch(String),
    /// A positional access outside of the stored values.
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of values along the accessed axis.
        len: usize,
    },
    /// An insertion or deletion position outside of the valid range.
    ///
    /// For an insertion, `position <= len` is valid, for a deletion `position < len`.
    InvalidPosition {
        /// Position that was requested.
        position: usize,
        /// Number of values along the axis at the time of the request.
        len: usize,
    },
    /// Division of a container by a zero scalar.
    DivideByZero,
    /// An operation that is only defined for square matrices got a rectangular one.
    NotSquare {
        #[allow(missing_docs)]
        rows: usize,
        #[allow(missing_docs)]
        columns: usize,
    },
    /// Inversion of a matrix with a zero determinant.
    Singular,
    /// A vector would no longer have either a single row or a single column.
    ShapeViolation {
        #[allow(missing_docs)]
        rows: usize,
        #[allow(missing_docs)]
        columns: usize,
    },
}

impl Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::InvalidDimension(description) => {
                write!(f, "InvalidDimension: {}", description)
            },
            LinalgError::DimensionMismatch(description) => {
                write!(f, "DimensionMismatch: {}", description)
            },
            LinalgError::IndexOutOfRange { index, len } => {
                write!(f, "IndexOutOfRange: index {} is out of range for length {}", index, len)
            },
            LinalgError::InvalidPosition { position, len } => {
                write!(f, "InvalidPosition: position {} is invalid for length {}", position, len)
            },
            LinalgError::DivideByZero => f.write_str("DivideByZero: cannot divide by 0"),
            LinalgError::NotSquare { rows, columns } => {
                write!(f, "NotSquare: a {} x {} matrix is not square", rows, columns)
            },
            LinalgError::Singular => {
                f.write_str("Singular: the inverse does not exist, the determinant is equal to 0")
            },
            LinalgError::ShapeViolation { rows, columns } => write!(
                f,
                "ShapeViolation: a vector needs a single row or a single column, not {} x {}",
                rows, columns,
            ),
        }
    }
}

impl Error for LinalgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

/// Verify that a size can be used to create a container.
///
/// # Arguments
///
/// * `len`: Requested number of values along an axis.
/// * `axis`: Name of the axis, for the error message.
pub(crate) fn check_nonzero(len: usize, axis: &str) -> Result<(), LinalgError> {
    if len == 0 {
        Err(LinalgError::InvalidDimension(format!("the number of {} must be at least 1", axis)))
    } else {
        Ok(())
    }
}
