#![forbid(unsafe_code)]

//! calc: basic command-line calculator
//!
//! The arithmetic lives in [`operations`] as plain functions over `f64`;
//! everything else is the CLI shell around them.

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod operations;
pub mod util;
