//! CLI argument structures
//!
//! This module defines the command-line interface of the `drills` binary:
//! the top-level flags and one subcommand per exercise.

use crate::config::OutputFormat;
use crate::exercises::Shift;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Run the checkpoint exercises from the command line
#[derive(Parser)]
#[command(name = "drills")]
#[command(about = "drills - Checkpoint exercises as a command-line tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format (overrides the configured one)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Keep the odd numbers, sort them and call each one lucky
    #[command(name = "lucky")]
    Lucky {
        /// Numbers to filter (defaults to the checkpoint's sample input)
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Find the exact integer square root of a number
    #[command(name = "sqrt", alias = "square-root")]
    Sqrt {
        /// Number to take the root of
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Print FizzBuzz for a range of numbers
    #[command(name = "fizzbuzz")]
    FizzBuzz {
        /// First number (defaults to the configured start)
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i64>,

        /// Last number, inclusive (defaults to the configured end)
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,
    },

    /// Convert a Celsius temperature to Fahrenheit
    #[command(name = "temperature", alias = "temp")]
    Temperature {
        /// Temperature in degrees Celsius
        #[arg(allow_negative_numbers = true)]
        celsius: f64,
    },

    /// Drive a car through a sequence of gear shifts
    #[command(name = "gearbox")]
    Gearbox {
        /// Car model
        #[arg(long, default_value = "Mazda")]
        model: String,

        /// Number of seats
        #[arg(long, default_value = "3")]
        seats: u32,

        /// Starting gear
        #[arg(long, default_value = "3")]
        gear: u8,

        /// Shifts to apply, in order
        #[arg(value_enum)]
        shifts: Vec<ShiftArg>,
    },

    /// Pick one of the given numbers, or a random one if none are given
    #[command(name = "pick")]
    Pick {
        /// Numbers to pick from
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Seed the random number generator for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the effective configuration
    #[command(name = "config")]
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShiftArg {
    Up,
    Down,
}

impl From<ShiftArg> for Shift {
    fn from(arg: ShiftArg) -> Self {
        match arg {
            ShiftArg::Up => Shift::Up,
            ShiftArg::Down => Shift::Down,
        }
    }
}
