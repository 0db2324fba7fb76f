use thiserror::Error;

/// Things that may go wrong when making change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A denomination of zero was supplied.
    #[error("denomination at index {index} is zero; denominations must be positive")]
    InvalidDenomination { index: usize },

    /// The amount needs a working table larger than the platform (or the
    /// configured limit) allows.
    #[error("amount {amount} exceeds the largest supported amount of {limit}")]
    AmountTooLarge { amount: u128, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
