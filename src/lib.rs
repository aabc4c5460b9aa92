//! goup - update Go module dependencies for many projects at once
//!
//! The library walks directory trees looking for `go.mod` files and, for
//! every project found, runs `go mod tidy`, lists the direct dependencies,
//! runs `go get` for each of them and tidies again.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;
pub mod toolchain;
pub mod updater;
pub mod walker;
