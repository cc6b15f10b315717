//! Staking-specific errors.

use ore_store::StoreError;
use ore_types::{AssetError, Symbol};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StakeError {
    #[error("stake quantity must be positive")]
    InvalidQuantity,

    #[error("wrong staking symbol: expected {expected}, found {found}")]
    WrongSymbol { expected: Symbol, found: Symbol },

    #[error("insufficient stake reserve: need {needed}, have {available}")]
    InsufficientReserve { needed: i64, available: i64 },

    #[error("stake for {account} is attributed to {actual}, not {claimed}")]
    AttributionMismatch {
        account: String,
        claimed: String,
        actual: String,
    },

    #[error("no staking record for {0}")]
    NotFound(String),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
