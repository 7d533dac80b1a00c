//! # sk-core
//!
//! Shared foundations for the speckle statistics workspace: the common error
//! type and `Result` alias used by the probability crates.

pub mod error;

pub use error::{Error, Result};
