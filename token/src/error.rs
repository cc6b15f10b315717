//! Unified action-level error type.

use ore_ledger::LedgerError;
use ore_staking::StakeError;
use ore_store::StoreError;
use ore_types::Symbol;
use ore_vesting::VestingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("unauthorized: action requires {required}, acting as {actual}")]
    Unauthorized { required: String, actual: String },

    #[error("invalid symbol: expected {expected}, found {found}")]
    InvalidSymbol { expected: Symbol, found: Symbol },

    #[error("quantity must be positive")]
    InvalidQuantity,

    #[error("cannot transfer to self")]
    SelfTransfer,

    #[error("memo too long: {len} bytes (max {max})")]
    MemoTooLong { len: usize, max: usize },

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("snapshot serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Stake(#[from] StakeError),

    #[error(transparent)]
    Vesting(#[from] VestingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
