//! Full-state snapshot — export and restore of every engine table.
//!
//! Snapshots serialize to bytes with bincode for backup or migration. The
//! encoding covers all five tables, so restoring into an empty store yields
//! a byte-for-byte equivalent engine state.

use crate::engine::TokenEngine;
use crate::error::TokenError;
use ore_ledger::StoreLedger;
use ore_store::attribution::{AttributionStore, StakeAttribution};
use ore_store::balance::BalanceStore;
use ore_store::reserve::{ReserveStore, StakeReserve};
use ore_store::stats::{StakeStatsStore, StakingStats};
use ore_store::vesting::{VestingAccount, VestingStore};
use ore_types::{AccountName, Asset};
use serde::{Deserialize, Serialize};

/// A point-in-time copy of all engine state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub balances: Vec<(AccountName, Asset)>,
    pub reserves: Vec<StakeReserve>,
    pub stats: Vec<StakingStats>,
    pub attributions: Vec<StakeAttribution>,
    pub vesting_accounts: Vec<VestingAccount>,
}

impl TokenSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, TokenError> {
        bincode::serialize(self).map_err(|e| TokenError::Serialization(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TokenError> {
        bincode::deserialize(bytes).map_err(|e| TokenError::Serialization(e.to_string()))
    }
}

impl<B, S> TokenEngine<StoreLedger<B>, S>
where
    B: BalanceStore,
    S: ReserveStore + StakeStatsStore + AttributionStore + VestingStore,
{
    /// Export every table into a snapshot.
    pub fn snapshot(&self) -> Result<TokenSnapshot, TokenError> {
        Ok(TokenSnapshot {
            balances: self.ledger().balances().iter_balances()?,
            reserves: self.store().iter_reserves()?,
            stats: self.store().iter_stats()?,
            attributions: self.store().iter_attributions()?,
            vesting_accounts: self.store().iter_vesting_accounts()?,
        })
    }

    /// Load a snapshot's records. Intended for an empty store: existing
    /// records with colliding keys are overwritten, others are kept.
    pub fn restore(&self, snapshot: &TokenSnapshot) -> Result<(), TokenError> {
        for (owner, balance) in &snapshot.balances {
            self.ledger().balances().put_balance(owner, balance)?;
        }
        for reserve in &snapshot.reserves {
            self.store().put_reserve(reserve)?;
        }
        for stats in &snapshot.stats {
            self.store().put_stats(stats)?;
        }
        for attribution in &snapshot.attributions {
            self.store().put_attribution(attribution)?;
        }
        for record in &snapshot.vesting_accounts {
            self.store().put_vesting(record)?;
        }
        tracing::debug!(
            balances = snapshot.balances.len(),
            reserves = snapshot.reserves.len(),
            vesting_accounts = snapshot.vesting_accounts.len(),
            "snapshot restored"
        );
        Ok(())
    }
}
