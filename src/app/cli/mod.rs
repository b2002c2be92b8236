//! Command line arguments and the TOML configuration file

pub mod args;
pub mod config;
