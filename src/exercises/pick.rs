//! Pick from an optional sequence, or fall back to a random number

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Range drawn from when there is nothing to pick
pub const FALLBACK_RANGE: RangeInclusive<i64> = 1..=100;

/// Where the picked number came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Pick {
    FromInput(i64),
    Fallback(i64),
}

impl Pick {
    pub fn value(&self) -> i64 {
        match self {
            Self::FromInput(n) | Self::Fallback(n) => *n,
        }
    }
}

/// Choose uniformly from `numbers`, or from `fallback` when they are missing or empty
///
/// Returns `None` only when there is nothing to pick and `fallback` is empty.
pub fn pick_or_random<R: Rng>(
    numbers: Option<&[i64]>,
    fallback: RangeInclusive<i64>,
    rng: &mut R,
) -> Option<Pick> {
    if let Some(n) = numbers.and_then(|n| n.choose(&mut *rng)) {
        return Some(Pick::FromInput(*n));
    }

    if fallback.is_empty() {
        return None;
    }
    Some(Pick::Fallback(rng.random_range(fallback)))
}
