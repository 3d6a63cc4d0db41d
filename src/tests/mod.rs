//! # Integration tests that require a look inside the crate.
//!
//! Each problem is a small matrix with its hand computed decomposition. Convention for function
//! names:
//!
//! * `fn matrix()`
//! * `fn lower()`
//! * `fn upper()`
//! * `fn inverse()`
