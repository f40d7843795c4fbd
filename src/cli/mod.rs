//! CLI module for docker-banner-gen - command-line flags and dispatch input.

pub mod commands;

pub use commands::Cli;
