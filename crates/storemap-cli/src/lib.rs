//! Storemap CLI library.
//!
//! This crate provides command-line interface utilities for the storemap
//! route planner: terminal styling, output formatting and logging setup.

pub mod logging;
pub mod output;
pub mod terminal;
