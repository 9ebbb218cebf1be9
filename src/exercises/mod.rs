//! Checkpoint exercises
//!
//! Each submodule holds one small exercise as side-effect-free functions:
//! - `lucky`: filter, sort and format a sequence of integers
//! - `square_root`: bounded search for an exact integer square root
//! - `fizzbuzz`: classify integers as Fizz, Buzz or FizzBuzz
//! - `temperature`: Celsius to Fahrenheit conversion
//! - `gearbox`: a car whose gear can only move within its limits
//! - `pick`: choose from an optional sequence or fall back to a random draw
//!
//! Apart from `pick`, which takes its RNG as a parameter, every function here
//! is deterministic: same inputs always produce same outputs.

pub mod fizzbuzz;
pub mod gearbox;
pub mod lucky;
pub mod pick;
pub mod square_root;
pub mod temperature;

pub use fizzbuzz::{fizzbuzz, FizzBuzz};
pub use gearbox::{Car, GearError, Shift};
pub use lucky::{lucky_numbers, Pipeline, LUCKY_NUMBERS_INPUT};
pub use pick::{pick_or_random, Pick, FALLBACK_RANGE};
pub use square_root::{integer_square_root, Bounds, RootError, SquareRootSolver};
pub use temperature::{celsius_to_fahrenheit, TemperatureReading};
