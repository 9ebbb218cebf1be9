//! FizzBuzz classification

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

/// What a single number prints as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(i64),
}

impl FizzBuzz {
    /// Pure: classify by divisibility by 3 and 5
    pub fn classify(n: i64) -> Self {
        match (n % 3 == 0, n % 5 == 0) {
            (true, true) => Self::FizzBuzz,
            (true, false) => Self::Fizz,
            (false, true) => Self::Buzz,
            (false, false) => Self::Number(n),
        }
    }
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fizz => write!(f, "Fizz"),
            Self::Buzz => write!(f, "Buzz"),
            Self::FizzBuzz => write!(f, "FizzBuzz"),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

// Serialized as the printed text so JSON output matches the text lines
impl Serialize for FizzBuzz {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pure: classify every number in `range`, in order
pub fn fizzbuzz(range: RangeInclusive<i64>) -> Vec<FizzBuzz> {
    range.map(FizzBuzz::classify).collect()
}
