//! Help text generation and utilities
//!
//! This module provides utilities for generating help text and picking the log level.

use crate::cli::args::Cli;
use clap::CommandFactory;

/// Generate comprehensive help text for the CLI
pub fn generate_help() -> String {
    Cli::command().render_help().to_string()
}

/// Get the log level filter based on verbosity
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Pick the filter directive: `-v` flags win, then the configured level, then `info`
pub fn resolve_log_filter(verbose: u8, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (0, Some(level)) if !level.trim().is_empty() => level.trim().to_string(),
        _ => get_log_level(verbose).to_string(),
    }
}
