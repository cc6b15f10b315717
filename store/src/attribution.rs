//! Stake attribution storage trait.

use crate::StoreError;
use ore_types::{AccountName, Asset, Symbol};
use serde::{Deserialize, Serialize};

/// Which receiver currently owns an account's staked tokens, one record per
/// (account, symbol).
///
/// `staker` is the staker-of-record — the only identity permitted to unstake
/// the account's funds. `amount` is the account's outstanding staked total;
/// the record is deleted when it returns to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeAttribution {
    pub account: AccountName,
    pub staker: AccountName,
    pub amount: Asset,
}

pub trait AttributionStore {
    fn get_attribution(
        &self,
        account: &AccountName,
        symbol: &Symbol,
    ) -> Result<Option<StakeAttribution>, StoreError>;

    fn put_attribution(&self, record: &StakeAttribution) -> Result<(), StoreError>;

    fn delete_attribution(&self, account: &AccountName, symbol: &Symbol)
        -> Result<(), StoreError>;

    /// All attribution records, across every symbol.
    fn iter_attributions(&self) -> Result<Vec<StakeAttribution>, StoreError>;
}
