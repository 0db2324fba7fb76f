//! Compares greedy and optimal change on a few sample amounts.
//!
//! Usage: `compare_change [AMOUNT...]`. Without arguments the amounts
//! 113, 1000, 2000 and 5000 are timed.

use std::env;
use std::error::Error;
use std::time::Instant;

use coinchange::{Decomposer, GreedyDecomposer, OptimalDecomposer};

const COINS: [u64; 6] = [50, 25, 10, 5, 2, 1];
const DEFAULT_AMOUNTS: [u64; 4] = [113, 1000, 2000, 5000];

fn elapsed_secs(
    decomposer: &dyn Decomposer<u64>,
    amount: u64,
    coins: &[u64],
) -> Result<f64, Box<dyn Error>> {
    let start = Instant::now();
    decomposer.decompose(amount, coins)?;
    Ok(start.elapsed().as_secs_f64())
}

fn show_both(amount: u64, coins: &[u64]) -> Result<(), Box<dyn Error>> {
    println!("Testing amount {}:", amount);
    println!("Greedy: {}", GreedyDecomposer.decompose(amount, coins)?);
    println!("DP:     {}", OptimalDecomposer::new().decompose(amount, coins)?);
    println!("{}", "-".repeat(20));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let amounts = env::args()
        .skip(1)
        .map(|arg| arg.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()?;
    let amounts = if amounts.is_empty() {
        DEFAULT_AMOUNTS.to_vec()
    } else {
        amounts
    };

    println!("{}", "-".repeat(20));
    show_both(113, &COINS)?;

    println!("{:<10} | {:<20} | {:<20}", "Amount", "Greedy Time (s)", "DP Time (s)");
    println!("{}", "-".repeat(55));
    let greedy = GreedyDecomposer::new();
    let optimal = OptimalDecomposer::new();
    for amount in amounts {
        let greedy_time = elapsed_secs(&greedy, amount, &COINS)?;
        let dp_time = elapsed_secs(&optimal, amount, &COINS)?;
        println!("{:<10} | {:<20.6} | {:<20.6}", amount, greedy_time, dp_time);
    }

    let coins = [9, 6, 1];
    println!();
    println!("{}", "-".repeat(20));
    println!("Testing coins {:?}", coins);
    show_both(12, &coins)?;

    Ok(())
}
