use std::collections::{btree_map, BTreeMap};
use std::fmt;

use super::Coin;

/// A multiset of denominations, stored as denomination → number of coins.
///
/// Denominations are kept in ascending order and every stored count is
/// positive; a denomination that is not used is simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decomposition<T> {
    counts: BTreeMap<T, T>,
}

impl<T: Coin> Decomposition<T> {
    /// Creates an empty decomposition.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Adds `count` coins of `denomination`. A zero count is ignored.
    pub(crate) fn add(&mut self, denomination: T, count: T) {
        if count.is_zero() {
            return;
        }
        let slot = self.counts.entry(denomination).or_insert_with(T::zero);
        *slot = *slot + count;
    }

    /// Number of coins of `denomination`, if it is used at all.
    pub fn get(&self, denomination: T) -> Option<T> {
        self.counts.get(&denomination).copied()
    }

    /// Iterates over `(denomination, count)` pairs in ascending denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// Number of distinct denominations used.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of coins.
    pub fn coin_count(&self) -> T {
        self.counts.values().fold(T::zero(), |acc, &c| acc + c)
    }

    /// The amount this decomposition adds up to.
    pub fn value(&self) -> T {
        self.counts
            .iter()
            .fold(T::zero(), |acc, (&d, &c)| acc + d * c)
    }

    /// Returns `true` if the coins add up to exactly `amount`.
    ///
    /// Greedy decompositions can fall short of their amount; this is how a
    /// caller detects it.
    pub fn is_exact_for(&self, amount: T) -> bool {
        self.value() == amount
    }

    pub fn counts(&self) -> &BTreeMap<T, T> {
        &self.counts
    }

    pub fn into_inner(self) -> BTreeMap<T, T> {
        self.counts
    }
}

impl<T: Coin> Default for Decomposition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coin> From<Decomposition<T>> for BTreeMap<T, T> {
    fn from(decomposition: Decomposition<T>) -> Self {
        decomposition.counts
    }
}

impl<'a, T: Coin> IntoIterator for &'a Decomposition<T> {
    type Item = (&'a T, &'a T);
    type IntoIter = btree_map::Iter<'a, T, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl<T: Coin> fmt::Display for Decomposition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (d, c)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", d, c)?;
        }
        write!(f, "}}")
    }
}
