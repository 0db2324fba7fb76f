use super::{validate_denominations, Coin, Decomposer, Decomposition};
use crate::error::Result;

/// Makes change by always taking the largest denomination that still fits.
///
/// Runs in `O(D log D)` for `D` denominations, independent of the amount.
/// The result is optimal for canonical coin systems such as
/// `[50, 25, 10, 5, 2, 1]`, but can use more coins than necessary otherwise,
/// and falls short of the amount when the residual cannot be represented
/// (for example when there is no coin of value 1). Neither case is an error;
/// check [`Decomposition::is_exact_for`] when it matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyDecomposer;

impl GreedyDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Coin> Decomposer<T> for GreedyDecomposer {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn decompose(&self, amount: T, denominations: &[T]) -> Result<Decomposition<T>> {
        validate_denominations(denominations)?;
        log::debug!(
            "greedy change for {} over {} denominations",
            amount,
            denominations.len()
        );

        let mut sorted = denominations.to_vec();
        sort_descending(&mut sorted);

        let (result, remaining) = take_greedy(amount, &sorted);
        if !remaining.is_zero() {
            log::trace!(
                "greedy change for {} leaves {} unrepresented",
                amount,
                remaining
            );
        }
        Ok(result)
    }
}

/// Greedy change for `amount`.
///
/// # Examples
///
/// ```
/// use coinchange::decompose_greedy;
///
/// let change = decompose_greedy(12u32, &[9, 6, 1]).unwrap();
/// // 9 + 1 + 1 + 1: four coins where two sixes would do.
/// assert_eq!(change.get(9), Some(1));
/// assert_eq!(change.get(1), Some(3));
/// assert_eq!(change.coin_count(), 4);
/// ```
pub fn decompose_greedy<T: Coin>(amount: T, denominations: &[T]) -> Result<Decomposition<T>> {
    GreedyDecomposer.decompose(amount, denominations)
}

pub(crate) fn sort_descending<T: Coin>(denominations: &mut [T]) {
    denominations.sort_unstable_by(|a, b| b.cmp(a));
}

/// Runs the greedy pass over denominations already sorted largest first.
/// Returns the coins taken and the amount left over.
pub(crate) fn take_greedy<T: Coin>(amount: T, sorted_desc: &[T]) -> (Decomposition<T>, T) {
    let mut result = Decomposition::new();
    let mut remaining = amount;

    for &coin in sorted_desc {
        if remaining.is_zero() {
            break;
        }
        let (count, rest) = remaining.div_rem(&coin);
        if !count.is_zero() {
            result.add(coin, count);
            remaining = rest;
        }
    }

    (result, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::BTreeMap;

    #[test]
    fn test_canonical_set() {
        let change = decompose_greedy(113u32, &[50, 25, 10, 5, 2, 1]).unwrap();
        assert_eq!(
            change.into_inner(),
            BTreeMap::from([(50, 2), (10, 1), (2, 1), (1, 1)])
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = decompose_greedy(113u64, &[1, 2, 5, 10, 25, 50]).unwrap();
        let b = decompose_greedy(113u64, &[10, 1, 50, 5, 25, 2]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_canonical_set_is_suboptimal() {
        let change = decompose_greedy(12u32, &[9, 6, 1]).unwrap();
        assert_eq!(change.into_inner(), BTreeMap::from([(9, 1), (1, 3)]));
    }

    #[test]
    fn test_zero_amount() {
        assert!(decompose_greedy(0u32, &[50, 25, 10]).unwrap().is_empty());
        assert!(decompose_greedy(0u32, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_denominations() {
        let change = decompose_greedy(7u8, &[]).unwrap();
        assert!(change.is_empty());
        assert!(!change.is_exact_for(7));
    }

    #[test]
    fn test_incomplete_result() {
        // 9 = 5 + 3 + (1 left over)
        let change = decompose_greedy(9u16, &[5, 3]).unwrap();
        assert_eq!(change.into_inner(), BTreeMap::from([(5, 1), (3, 1)]));

        let change = decompose_greedy(9u16, &[5, 3]).unwrap();
        assert_eq!(change.value(), 8);
        assert!(!change.is_exact_for(9));
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let change = decompose_greedy(30u32, &[10, 10, 5, 5]).unwrap();
        assert_eq!(change.into_inner(), BTreeMap::from([(10, 3)]));
    }

    #[test]
    fn test_large_amount_is_constant_work() {
        let change = decompose_greedy(u64::MAX, &[1u64 << 32, 1]).unwrap();
        assert_eq!(change.get(1 << 32), Some(u64::MAX >> 32));
        assert_eq!(change.get(1), Some((1 << 32) - 1));
        assert!(change.is_exact_for(u64::MAX));
    }

    #[test]
    fn test_zero_denomination_rejected() {
        assert_eq!(
            decompose_greedy(10u32, &[5, 0, 1]),
            Err(Error::InvalidDenomination { index: 1 })
        );
    }

    #[test]
    fn test_take_greedy_remainder() {
        let (change, remaining) = take_greedy(7u32, &[5, 3]);
        assert_eq!(change.value(), 5);
        assert_eq!(remaining, 2);
    }
}
