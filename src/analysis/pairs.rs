//! Enumeration of unordered atom pairs.
//!
//! Three equivalent strategies are provided. Each yields every pair
//! `(i, j)` with `i < j` exactly once, in lexicographic order, for a total
//! of [`pair_count`] pairs.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of unordered pairs among `n` items.
#[inline]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 { 0 } else { n * (n - 1) / 2 }
}

/// Double loop over the full `n × n` index grid, keeping `i < j`.
pub fn nested_loops(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(pair_count(n));
    for i in 0..n {
        for j in 0..n {
            if i < j {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Lazily generated `n × n` index grid filtered to `i < j`.
pub fn generator(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n)
        .flat_map(move |i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| i < j)
}

/// Combinations of two `(index, item)` entries.
pub fn combinations<T>(items: &[T]) -> Combinations<'_, T> {
    Combinations {
        items,
        i: 0,
        j: 1,
    }
}

/// Iterator returned by [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    i: usize,
    j: usize,
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = ((usize, &'a T), (usize, &'a T));

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.items.len() {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.items.len() {
                return None;
            }
        }

        let item = (
            (self.i, &self.items[self.i]),
            (self.j, &self.items[self.j]),
        );
        self.j += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.items.len();
        let remaining = if self.i + 1 >= n {
            0
        } else {
            let rest_of_row = n.saturating_sub(self.j);
            rest_of_row + pair_count(n - self.i - 1)
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Combinations<'_, T> {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pair strategy '{0}' (use nested, generator, or combinations)")]
pub struct ParseStrategyError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PairStrategy {
    #[default]
    NestedLoops,
    Generator,
    Combinations,
}

impl PairStrategy {
    pub const ALL: [PairStrategy; 3] = [
        PairStrategy::NestedLoops,
        PairStrategy::Generator,
        PairStrategy::Combinations,
    ];

    pub fn pairs(self, n: usize) -> Vec<(usize, usize)> {
        match self {
            Self::NestedLoops => nested_loops(n),
            Self::Generator => generator(n).collect(),
            Self::Combinations => {
                let indices: Vec<usize> = (0..n).collect();
                combinations(&indices).map(|((i, _), (j, _))| (i, j)).collect()
            }
        }
    }

    /// Heading printed above the results of this strategy.
    pub fn label(self) -> &'static str {
        match self {
            Self::NestedLoops => "nested for-loops",
            Self::Generator => "generator expression",
            Self::Combinations => "pair combinations",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NestedLoops => "nested",
            Self::Generator => "generator",
            Self::Combinations => "combinations",
        }
    }
}

impl fmt::Display for PairStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PairStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nested" | "nested-loops" => Ok(Self::NestedLoops),
            "generator" => Ok(Self::Generator),
            "combinations" => Ok(Self::Combinations),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
