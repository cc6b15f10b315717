//! Global staking statistics storage trait.

use crate::StoreError;
use ore_types::{Asset, Symbol};
use serde::{Deserialize, Serialize};

/// The global staked total for one symbol.
///
/// Invariant: equals the sum of all [`crate::StakeReserve`] records for the
/// symbol after every action other than the administrative `setstaked`
/// correction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingStats {
    pub total_staked: Asset,
}

pub trait StakeStatsStore {
    fn get_stats(&self, symbol: &Symbol) -> Result<Option<StakingStats>, StoreError>;

    fn put_stats(&self, stats: &StakingStats) -> Result<(), StoreError>;

    /// Stats records for every symbol.
    fn iter_stats(&self) -> Result<Vec<StakingStats>, StoreError>;
}
