//! Asset arithmetic and parsing errors.

use crate::symbol::Symbol;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("symbol mismatch: expected {expected}, found {found}")]
    SymbolMismatch { expected: Symbol, found: Symbol },

    #[error("asset amount overflow")]
    Overflow,

    #[error("asset amount {0} outside the representable range")]
    AmountOutOfRange(i64),

    #[error("malformed asset string: {0}")]
    Parse(String),
}
