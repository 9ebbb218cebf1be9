//! Bounded integer square root
//!
//! Validates the input against a closed bound, then scans a search window in
//! increasing order for an exact root. Failures are returned as values.
//!
//! # Examples
//!
//! ```
//! use drills::exercises::square_root::{integer_square_root, RootError};
//!
//! assert_eq!(integer_square_root(100), Ok(10));
//! assert_eq!(integer_square_root(99), Err(RootError::NoExactRoot { input: 99 }));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// A closed interval `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: i64,
    pub upper: i64,
}

impl Bounds {
    /// Inputs accepted by [`integer_square_root`]
    pub const INPUT: Bounds = Bounds::new(1, 10_000);

    /// Candidate roots scanned by [`integer_square_root`]
    pub const SEARCH_WINDOW: Bounds = Bounds::new(1, 100);

    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }
}

/// Why no root was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind")]
pub enum RootError {
    #[error("{input} is out of bounds")]
    OutOfBounds { input: i64, lower: i64, upper: i64 },

    #[error("{input} is not a perfect square root.")]
    NoExactRoot { input: i64 },
}

impl RootError {
    /// Stable name of the failure kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "OutOfBounds",
            Self::NoExactRoot { .. } => "NoExactRoot",
        }
    }

    pub fn input(&self) -> i64 {
        match self {
            Self::OutOfBounds { input, .. } | Self::NoExactRoot { input } => *input,
        }
    }
}

/// Square root search over configurable bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareRootSolver {
    bounds: Bounds,
    window: Bounds,
}

impl Default for SquareRootSolver {
    fn default() -> Self {
        Self::new(Bounds::INPUT, Bounds::SEARCH_WINDOW)
    }
}

impl SquareRootSolver {
    pub fn new(bounds: Bounds, window: Bounds) -> Self {
        Self { bounds, window }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn window(&self) -> Bounds {
        self.window
    }

    /// Pure: find `i` in the window with `i * i == input`
    ///
    /// The bound check runs first; an out-of-bounds input is never searched.
    /// The first match in increasing order wins.
    pub fn solve(&self, input: i64) -> Result<i64, RootError> {
        if !self.bounds.contains(input) {
            trace!(input, bounds = ?self.bounds, "rejected before search");
            return Err(RootError::OutOfBounds {
                input,
                lower: self.bounds.lower,
                upper: self.bounds.upper,
            });
        }

        let found = (self.window.lower..=self.window.upper)
            .find(|candidate| candidate.checked_mul(*candidate) == Some(input));

        trace!(input, ?found, "search window exhausted or matched");
        found.ok_or(RootError::NoExactRoot { input })
    }
}

/// Pure: integer square root of `input` within `[1, 10000]`, searching `[1, 100]`
pub fn integer_square_root(input: i64) -> Result<i64, RootError> {
    SquareRootSolver::default().solve(input)
}
