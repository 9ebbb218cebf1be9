//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command routing
//! - Report rendering
//! - Help text generation
//! - Input validation

pub mod args;
pub mod help;
pub mod report;
pub mod router;
pub mod validation;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands};
pub use help::{generate_help, get_log_level, resolve_log_filter};
pub use report::{render, Report};
pub use router::execute_command;
pub use validation::{validate_fizzbuzz_range, validate_gearbox};
