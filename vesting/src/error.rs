//! Vesting-specific errors.

use ore_store::StoreError;
use ore_types::{AssetError, Symbol};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VestingError {
    #[error("vesting quantity must be positive")]
    InvalidQuantity,

    #[error("wrong vesting symbol: expected {expected}, found {found}")]
    WrongSymbol { expected: Symbol, found: Symbol },

    #[error("vesting end ({end}s) must be later than start ({start}s)")]
    InvalidTimeRange { start: u64, end: u64 },

    #[error("vesting index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no vesting record for {0}")]
    NotFound(String),

    #[error("insufficient unlocked balance: need {needed}, have {available}")]
    InsufficientBalance { needed: i64, available: i64 },

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
