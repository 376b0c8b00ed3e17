//! Library target for the `randkey` package.
//!
//! The primary deliverable of this package is the `randkey` CLI binary
//! (`src/main.rs`). The library target exposes the generator and output
//! modules so integration tests and `cargo test -p randkey --doc` can reach
//! them; it is not a supported public API.

pub mod cli;
pub mod error;
pub mod keygen;
pub mod output;
