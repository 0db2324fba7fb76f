//! Making change with a greedy and a dynamic-programming policy.
//!
//! ```
//! use coinchange::{decompose_greedy, decompose_optimal};
//!
//! let coins = [9u32, 6, 1];
//! assert_eq!(decompose_greedy(12, &coins).unwrap().coin_count(), 4);
//! assert_eq!(decompose_optimal(12, &coins).unwrap().coin_count(), 2);
//! ```

pub mod cs;
pub mod error;

pub use cs::change;
pub use cs::change::{
    count_decompositions, decompose_greedy, decompose_optimal, find_greedy_counterexample,
    min_coin_count, Coin, Decomposer, Decomposition, GreedyDecomposer, OptimalConfig,
    OptimalDecomposer,
};
pub use error::{Error, Result};
