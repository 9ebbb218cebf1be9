//! Lucky number pipeline
//!
//! A three stage transformation over a sequence of integers:
//! filter, then order, then format.
//!
//! # Examples
//!
//! ```
//! use drills::exercises::lucky::lucky_numbers;
//!
//! let lines = lucky_numbers(&[4, 9, 1]);
//! assert_eq!(lines, vec!["1 is a lucky number", "9 is a lucky number"]);
//! ```

use std::cmp::Ordering;

/// Sample input of the lucky numbers checkpoint
pub const LUCKY_NUMBERS_INPUT: [i64; 10] = [7, 4, 38, 21, 16, 15, 12, 33, 31, 49];

/// Filter, order and format stages applied in that sequence
pub struct Pipeline<P, O, F>
where
    P: Fn(&i64) -> bool,
    O: Fn(&i64, &i64) -> Ordering,
    F: Fn(i64) -> String,
{
    predicate: P,
    ordering: O,
    format: F,
}

impl<P, O, F> Pipeline<P, O, F>
where
    P: Fn(&i64) -> bool,
    O: Fn(&i64, &i64) -> Ordering,
    F: Fn(i64) -> String,
{
    pub fn new(predicate: P, ordering: O, format: F) -> Self {
        Self {
            predicate,
            ordering,
            format,
        }
    }

    /// Pure: run every stage over `input`
    ///
    /// The input is never modified. Sorting is stable, so elements the
    /// ordering considers equal keep their input order.
    pub fn run(&self, input: &[i64]) -> Vec<String> {
        let mut kept: Vec<i64> = input
            .iter()
            .copied()
            .filter(|n| (self.predicate)(n))
            .collect();
        kept.sort_by(|a, b| (self.ordering)(a, b));
        kept.into_iter().map(|n| (self.format)(n)).collect()
    }
}

fn is_odd(n: &i64) -> bool {
    n % 2 != 0
}

fn lucky_line(n: i64) -> String {
    format!("{} is a lucky number", n)
}

/// Pure: keep the odd numbers, sort them ascending, and describe each one
pub fn lucky_numbers(input: &[i64]) -> Vec<String> {
    Pipeline::new(is_odd, i64::cmp, lucky_line).run(input)
}
