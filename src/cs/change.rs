//! Making change: decomposing an amount into a set of denominations.
//!
//! Two policies are provided. [`GreedyDecomposer`] repeatedly takes the
//! largest denomination that fits, which is fast but only optimal for
//! canonical coin systems. [`OptimalDecomposer`] solves the unbounded
//! coin-change problem by dynamic programming and always returns a
//! decomposition with the fewest coins, or an empty one when the amount
//! cannot be formed at all.

pub mod canonical;
pub mod counting;
pub mod decomposition;
pub mod greedy;
pub mod optimal;


use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_integer::Integer;
use num_traits::{PrimInt, Unsigned};

use crate::error::{Error, Result};

pub use canonical::find_greedy_counterexample;
pub use counting::count_decompositions;
pub use decomposition::Decomposition;
pub use greedy::{decompose_greedy, GreedyDecomposer};
pub use optimal::{decompose_optimal, min_coin_count, OptimalConfig, OptimalDecomposer};

/// An unsigned integer usable as a denomination, an amount, or a coin count.
///
/// Implemented for every primitive unsigned integer type.
pub trait Coin: PrimInt + Unsigned + Integer + Hash + Debug + Display {}

impl<T> Coin for T where T: PrimInt + Unsigned + Integer + Hash + Debug + Display {}

/// A policy for decomposing an amount into denominations.
pub trait Decomposer<T: Coin> {
    /// Short name of the policy, used in reports.
    fn name(&self) -> &'static str;

    /// Decomposes `amount` using any number of each of `denominations`.
    ///
    /// Fails only when a denomination is zero, or when the policy cannot
    /// afford the working memory the amount requires.
    fn decompose(&self, amount: T, denominations: &[T]) -> Result<Decomposition<T>>;
}

pub(crate) fn validate_denominations<T: Coin>(denominations: &[T]) -> Result<()> {
    match denominations.iter().position(|d| d.is_zero()) {
        Some(index) => Err(Error::InvalidDenomination { index }),
        None => Ok(()),
    }
}

/// Length of a per-amount table covering `0..=amount`.
pub(crate) fn table_len<T: Coin>(amount: T, max_amount: Option<usize>) -> Result<usize> {
    let too_large = |limit| Error::AmountTooLarge {
        amount: amount.to_u128().unwrap_or(u128::MAX),
        limit,
    };

    let top = amount.to_usize().ok_or_else(|| too_large(usize::MAX - 1))?;
    if let Some(limit) = max_amount {
        if top > limit {
            return Err(too_large(limit));
        }
    }
    top.checked_add(1).ok_or_else(|| too_large(usize::MAX - 1))
}
