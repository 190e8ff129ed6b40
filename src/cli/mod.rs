//! Command-line front end for the `flowg` binary.

pub mod commands;
pub mod config;
