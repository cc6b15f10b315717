//! Stake reserve storage trait.

use crate::StoreError;
use ore_types::{AccountName, Asset, Symbol, Timestamp};
use serde::{Deserialize, Serialize};

/// Tokens currently staked to a receiver, one record per (receiver, symbol).
///
/// Invariant: `staked` is never negative; the record is deleted when it
/// returns to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeReserve {
    pub receiver: AccountName,
    pub staked: Asset,
    /// Last accrual-relevant action on this reserve. Written on every stake
    /// and unstake, read by nothing yet — a hook for a future rewards
    /// feature.
    pub last_touched: Timestamp,
}

pub trait ReserveStore {
    fn get_reserve(
        &self,
        receiver: &AccountName,
        symbol: &Symbol,
    ) -> Result<Option<StakeReserve>, StoreError>;

    fn put_reserve(&self, record: &StakeReserve) -> Result<(), StoreError>;

    fn delete_reserve(&self, receiver: &AccountName, symbol: &Symbol) -> Result<(), StoreError>;

    /// All reserve records, across every symbol.
    fn iter_reserves(&self) -> Result<Vec<StakeReserve>, StoreError>;
}
