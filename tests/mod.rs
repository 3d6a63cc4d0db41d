//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod containers;
mod square;

/// Show the debug logging of the algorithms when running with `RUST_LOG=debug`.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
