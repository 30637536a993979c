use std::fmt;

use crate::error::{Error, Result};

/// Checks that `denominations` is non-empty, positive and strictly increasing.
///
/// Every strategy relies on `denominations[0]` being the smallest coin, and
/// several stop scanning at the first coin that overshoots the target.
pub fn validate_denominations(denominations: &[u64]) -> Result<()> {
    if denominations.is_empty() {
        return Err(Error::InvalidInput(
            "denomination set is empty".to_string(),
        ));
    }
    if let Some(pos) = denominations.iter().position(|&d| d == 0) {
        return Err(Error::InvalidInput(format!(
            "denomination at index {} is zero",
            pos
        )));
    }
    if let Some(pos) = denominations.windows(2).position(|w| w[0] >= w[1]) {
        return Err(Error::InvalidInput(format!(
            "denominations must be strictly increasing, found {} before {}",
            denominations[pos],
            denominations[pos + 1]
        )));
    }
    Ok(())
}

/// Monetary value of a count vector: `sum(counts[i] * denominations[i])`.
///
/// Saturates at `u64::MAX` instead of wrapping.
///
/// # Panics
/// If `counts` and `denominations` differ in length.
pub fn value(counts: &[u64], denominations: &[u64]) -> u64 {
    assert_eq!(
        counts.len(),
        denominations.len(),
        "composition length must match the number of denominations"
    );
    counts
        .iter()
        .zip(denominations)
        .fold(0u64, |acc, (&c, &d)| acc.saturating_add(c.saturating_mul(d)))
}

/// Total number of coins in a count vector.
pub fn coin_count(counts: &[u64]) -> u64 {
    counts.iter().sum()
}

/// Whether the count vector is worth exactly `target`.
pub fn is_feasible(counts: &[u64], denominations: &[u64], target: u64) -> bool {
    value(counts, denominations) == target
}

/// How many coins of each denomination to hand out.
///
/// Entry `i` is the count of `denominations[i]`; equality is count-vector equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Composition(Vec<u64>);

impl Composition {
    pub fn new(counts: Vec<u64>) -> Self {
        Composition(counts)
    }

    pub fn zero(len: usize) -> Self {
        Composition(vec![0; len])
    }

    /// Builds the count vector of a multiset of coin values.
    ///
    /// Returns `InvalidInput` if a coin is not one of the denominations.
    pub fn from_coins(denominations: &[u64], coins: &[u64]) -> Result<Self> {
        let mut counts = vec![0; denominations.len()];
        for &coin in coins {
            match denominations.binary_search(&coin) {
                Ok(i) => counts[i] += 1,
                Err(_) => {
                    return Err(Error::InvalidInput(format!(
                        "coin {} is not a denomination",
                        coin
                    )))
                }
            }
        }
        Ok(Composition(counts))
    }

    /// Expands the counts into individual coin values, smallest first.
    pub fn to_coins(&self, denominations: &[u64]) -> Vec<u64> {
        assert_eq!(self.0.len(), denominations.len());
        self.0
            .iter()
            .zip(denominations)
            .flat_map(|(&c, &d)| std::iter::repeat(d).take(c as usize))
            .collect()
    }

    pub fn counts(&self) -> &[u64] {
        &self.0
    }

    pub fn value(&self, denominations: &[u64]) -> u64 {
        value(&self.0, denominations)
    }

    pub fn coin_count(&self) -> u64 {
        coin_count(&self.0)
    }

    pub fn is_feasible(&self, denominations: &[u64], target: u64) -> bool {
        is_feasible(&self.0, denominations, target)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
