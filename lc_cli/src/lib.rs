//! Command-line front end for `league_core`.
//!
//! The binary is a thin wrapper: argument parsing lives in `main`, the
//! command bodies live here so they can be tested without a process.

pub mod commands;
pub mod config;
pub mod logging;
