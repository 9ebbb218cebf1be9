//! # Drills
//!
//! Checkpoint exercises from a language fundamentals journal, as a library
//! and a small CLI.
//!
//! ## Usage
//!
//! ```bash
//! drills lucky 7 4 38 21
//! drills sqrt 100
//! drills fizzbuzz --end 30 --format json
//! ```
//!
//! ## Modules
//!
//! - `cli` - Argument parsing, command routing and output rendering
//! - `config` - TOML configuration with environment overrides
//! - `error` - Coded application errors
//! - `exercises` - The exercises themselves, as pure functions
pub mod cli;
pub mod config;
pub mod error;
pub mod exercises;

pub use exercises::{integer_square_root, lucky_numbers, RootError};
