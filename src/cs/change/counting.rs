use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{table_len, validate_denominations, Coin};
use crate::error::Result;

/// Counts the distinct ways to form `amount` from the given denominations.
///
/// Each denomination can be used any number of times and the order of coins
/// does not matter, so `1 + 2` and `2 + 1` are the same way. Repeated
/// denominations are counted once. The count grows exponentially with the
/// amount, hence the arbitrary-precision result.
///
/// # Examples
///
/// ```
/// use coinchange::count_decompositions;
/// use num_bigint::BigUint;
///
/// // There are 4 ways to make 5 using [1, 2, 5]:
/// //   1) 1+1+1+1+1
/// //   2) 1+1+1+2
/// //   3) 1+2+2
/// //   4) 5
/// assert_eq!(count_decompositions(5u32, &[1, 2, 5]).unwrap(), BigUint::from(4u32));
/// ```
pub fn count_decompositions<T: Coin>(amount: T, denominations: &[T]) -> Result<BigUint> {
    validate_denominations(denominations)?;
    let len = table_len(amount, None)?;
    log::debug!(
        "counting decompositions of {} over {} denominations",
        amount,
        denominations.len()
    );

    let mut distinct = denominations.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    // ways[i] is the number of ways to form i with the coins seen so far.
    // Iterating coins in the outer loop counts each multiset exactly once.
    let mut ways = vec![BigUint::zero(); len];
    ways[0] = BigUint::one();
    let top = len - 1;

    for &coin in &distinct {
        let Some(step) = coin.to_usize().filter(|&step| step <= top) else {
            continue;
        };
        for i in step..=top {
            let (done, rest) = ways.split_at_mut(i);
            rest[0] += &done[i - step];
        }
    }

    Ok(ways.pop().unwrap_or_default())
}
