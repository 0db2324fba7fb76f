use super::{table_len, validate_denominations, Coin, Decomposer, Decomposition};
use crate::error::Result;

/// Cost-table entry for an amount no combination of coins has reached.
pub(crate) const UNREACHABLE: usize = usize::MAX;

/// Configuration for [`OptimalDecomposer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalConfig {
    /// Largest amount the decomposer will build tables for. `None` means no
    /// limit beyond what fits in `usize`.
    pub max_amount: Option<usize>,
}

/// Makes change with the fewest possible coins.
///
/// This is the unbounded coin-change problem solved bottom-up: a cost table
/// holds the minimum number of coins for every amount up to the target, and
/// a parallel choice table records the last coin used to reach each entry so
/// the decomposition can be walked back from the target. Runs in
/// `O(D * amount)` time and `O(amount)` memory, so very large amounts are
/// expensive; set [`OptimalConfig::max_amount`] to refuse them up front.
///
/// When the amount cannot be formed the result is an empty decomposition,
/// which the caller tells apart from the (also empty) change for zero by the
/// amount it asked for.
///
/// Among decompositions with equally few coins, the first one found wins:
/// denominations are tried in the order given and a table entry is only
/// replaced by a strictly cheaper one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalDecomposer {
    config: OptimalConfig,
}

impl OptimalDecomposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OptimalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimalConfig {
        &self.config
    }
}

impl<T: Coin> Decomposer<T> for OptimalDecomposer {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn decompose(&self, amount: T, denominations: &[T]) -> Result<Decomposition<T>> {
        validate_denominations(denominations)?;
        let len = table_len(amount, self.config.max_amount)?;
        log::debug!(
            "optimal change for {} over {} denominations",
            amount,
            denominations.len()
        );

        let mut cost = cost_table(len);
        let mut choice = vec![T::zero(); len];
        relax(&mut cost, denominations, |i, coin| choice[i] = coin);

        let top = len - 1;
        if cost[top] == UNREACHABLE {
            log::trace!("{} cannot be formed from the given denominations", amount);
            return Ok(Decomposition::new());
        }

        let mut result = Decomposition::new();
        let mut current = top;
        while current > 0 {
            let coin = choice[current];
            result.add(coin, T::one());
            // Every recorded coin fits in usize: it was converted when relaxed.
            current -= coin.to_usize().unwrap_or(current);
        }
        Ok(result)
    }
}

/// Change for `amount` using the fewest coins, or an empty decomposition if
/// the amount cannot be formed.
///
/// # Examples
///
/// ```
/// use coinchange::decompose_optimal;
///
/// let change = decompose_optimal(12u32, &[9, 6, 1]).unwrap();
/// assert_eq!(change.get(6), Some(2));
/// assert_eq!(change.coin_count(), 2);
///
/// // No combination of 9s and 6s makes 1.
/// assert!(decompose_optimal(1u32, &[9, 6]).unwrap().is_empty());
/// ```
pub fn decompose_optimal<T: Coin>(amount: T, denominations: &[T]) -> Result<Decomposition<T>> {
    OptimalDecomposer::new().decompose(amount, denominations)
}

/// Minimum number of coins needed to form `amount`, or `None` if it cannot be
/// formed.
///
/// # Examples
///
/// ```
/// use coinchange::min_coin_count;
///
/// // 6 + 6 + 6 = 18
/// assert_eq!(min_coin_count(18u32, &[1, 6, 10]).unwrap(), Some(3));
/// assert_eq!(min_coin_count(7u32, &[2, 4]).unwrap(), None);
/// ```
pub fn min_coin_count<T: Coin>(amount: T, denominations: &[T]) -> Result<Option<usize>> {
    validate_denominations(denominations)?;
    let len = table_len(amount, None)?;

    let mut cost = cost_table(len);
    relax(&mut cost, denominations, |_, _| {});

    Ok(match cost[len - 1] {
        UNREACHABLE => None,
        coins => Some(coins),
    })
}

/// A cost table of `len` entries where only amount 0 is reachable.
pub(crate) fn cost_table(len: usize) -> Vec<usize> {
    let mut cost = vec![UNREACHABLE; len];
    if let Some(first) = cost.first_mut() {
        *first = 0;
    }
    cost
}

/// Fills `cost` with minimum coin counts, one denomination at a time.
///
/// `record(i, coin)` is called whenever `coin` gives amount `i` a strictly
/// cheaper decomposition, so the last call for `i` names the coin to take
/// back out when reconstructing.
pub(crate) fn relax<T: Coin>(
    cost: &mut [usize],
    denominations: &[T],
    mut record: impl FnMut(usize, T),
) {
    let Some(top) = cost.len().checked_sub(1) else {
        return;
    };

    for &coin in denominations {
        // Coins larger than the table never fit.
        let Some(step) = coin.to_usize().filter(|&step| step <= top) else {
            continue;
        };
        for i in step..=top {
            let prev = cost[i - step];
            if prev != UNREACHABLE && prev + 1 < cost[i] {
                cost[i] = prev + 1;
                record(i, coin);
            }
        }
    }
}
