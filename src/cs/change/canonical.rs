use super::greedy::{sort_descending, take_greedy};
use super::optimal::{cost_table, relax, UNREACHABLE};
use super::{table_len, validate_denominations, Coin};
use crate::error::Result;

/// Finds the smallest amount on which greedy change is not optimal.
///
/// An amount is a counterexample when the greedy policy either leaves part of
/// it unrepresented while some exact decomposition exists, or uses more coins
/// than the optimum. Amounts below the sum of the two largest distinct
/// denominations are searched; for sets containing a coin of value 1 the
/// smallest counterexample, if any, always lies in that range (Kozen and
/// Zaks), so `None` means greedy is optimal for every amount.
///
/// # Examples
///
/// ```
/// use coinchange::find_greedy_counterexample;
///
/// assert_eq!(find_greedy_counterexample(&[9u32, 6, 1]).unwrap(), Some(12));
/// assert_eq!(find_greedy_counterexample(&[25u32, 10, 5, 1]).unwrap(), None);
/// ```
pub fn find_greedy_counterexample<T: Coin>(denominations: &[T]) -> Result<Option<T>> {
    validate_denominations(denominations)?;

    let mut sorted = denominations.to_vec();
    sort_descending(&mut sorted);
    sorted.dedup();

    let (largest, second) = match sorted[..] {
        [largest, second, ..] => (largest, second),
        _ => return Ok(None),
    };
    let bound = largest.checked_add(&second).unwrap_or_else(T::max_value);
    let len = table_len(bound - T::one(), None)?;
    log::debug!(
        "searching amounts below {} for a greedy counterexample",
        bound
    );

    let mut cost = cost_table(len);
    relax(&mut cost, &sorted, |_, _| {});

    for (i, &optimal) in cost.iter().enumerate().skip(1) {
        if optimal == UNREACHABLE {
            continue;
        }
        let Some(amount) = num_traits::cast::<usize, T>(i) else {
            break;
        };
        let (greedy, remaining) = take_greedy(amount, &sorted);
        let greedy_coins = greedy.coin_count().to_usize().unwrap_or(usize::MAX);
        if !remaining.is_zero() || greedy_coins > optimal {
            log::trace!("greedy is not optimal for {}", amount);
            return Ok(Some(amount));
        }
    }

    Ok(None)
}
