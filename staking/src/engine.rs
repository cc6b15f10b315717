//! Core staking bookkeeping engine.

use crate::error::StakeError;
use ore_store::attribution::{AttributionStore, StakeAttribution};
use ore_store::reserve::{ReserveStore, StakeReserve};
use ore_store::stats::{StakeStatsStore, StakingStats};
use ore_types::{AccountName, Asset, Symbol, Timestamp};

/// Maintains reserves, attributions, and the global staked total.
///
/// State is reached through explicit store handles passed into each
/// operation. Every operation reads and computes with checked arithmetic
/// before its first write, so a failure leaves no partial state.
pub struct StakingEngine {
    symbol: Symbol,
}

impl StakingEngine {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn check_value(&self, value: &Asset) -> Result<(), StakeError> {
        if value.symbol() != &self.symbol {
            return Err(StakeError::WrongSymbol {
                expected: self.symbol.clone(),
                found: value.symbol().clone(),
            });
        }
        if !value.is_positive() {
            return Err(StakeError::InvalidQuantity);
        }
        Ok(())
    }

    /// Record `value` staked by `account` to `receiver`.
    ///
    /// Credits the receiver's reserve, increments the global total, and
    /// records (or overwrites) the attribution so `receiver` becomes the
    /// staker-of-record for `account`.
    pub fn add_stake<S>(
        &self,
        store: &S,
        account: &AccountName,
        receiver: &AccountName,
        value: &Asset,
        now: Timestamp,
    ) -> Result<(), StakeError>
    where
        S: ReserveStore + StakeStatsStore + AttributionStore,
    {
        self.check_value(value)?;

        let staked = match store.get_reserve(receiver, &self.symbol)? {
            Some(reserve) => reserve.staked.checked_add(value)?,
            None => value.clone(),
        };
        let total_staked = match store.get_stats(&self.symbol)? {
            Some(stats) => stats.total_staked.checked_add(value)?,
            None => value.clone(),
        };
        let amount = match store.get_attribution(account, &self.symbol)? {
            Some(attribution) => attribution.amount.checked_add(value)?,
            None => value.clone(),
        };

        store.put_reserve(&StakeReserve {
            receiver: receiver.clone(),
            staked,
            last_touched: now,
        })?;
        store.put_stats(&StakingStats { total_staked })?;
        store.put_attribution(&StakeAttribution {
            account: account.clone(),
            staker: receiver.clone(),
            amount,
        })?;
        Ok(())
    }

    /// Withdraw `value` of `account`'s stake from `receiver`'s reserve.
    ///
    /// Only the current staker-of-record may withdraw: the attribution must
    /// name `receiver`. Records that return to zero are deleted.
    pub fn sub_stake<S>(
        &self,
        store: &S,
        account: &AccountName,
        receiver: &AccountName,
        value: &Asset,
        now: Timestamp,
    ) -> Result<(), StakeError>
    where
        S: ReserveStore + StakeStatsStore + AttributionStore,
    {
        self.check_value(value)?;

        let attribution = store
            .get_attribution(account, &self.symbol)?
            .ok_or_else(|| StakeError::NotFound(account.to_string()))?;
        if attribution.staker != *receiver {
            return Err(StakeError::AttributionMismatch {
                account: account.to_string(),
                claimed: receiver.to_string(),
                actual: attribution.staker.to_string(),
            });
        }
        if attribution.amount.amount() < value.amount() {
            return Err(StakeError::InsufficientReserve {
                needed: value.amount(),
                available: attribution.amount.amount(),
            });
        }

        let reserve = store
            .get_reserve(receiver, &self.symbol)?
            .ok_or_else(|| StakeError::NotFound(receiver.to_string()))?;
        if reserve.staked.amount() < value.amount() {
            return Err(StakeError::InsufficientReserve {
                needed: value.amount(),
                available: reserve.staked.amount(),
            });
        }
        let stats = store
            .get_stats(&self.symbol)?
            .ok_or_else(|| StakeError::NotFound(self.symbol.to_string()))?;

        let staked = reserve.staked.checked_sub(value)?;
        let total_staked = stats.total_staked.checked_sub(value)?;
        let remaining = attribution.amount.checked_sub(value)?;

        if staked.is_zero() {
            store.delete_reserve(receiver, &self.symbol)?;
        } else {
            store.put_reserve(&StakeReserve {
                receiver: receiver.clone(),
                staked,
                last_touched: now,
            })?;
        }
        store.put_stats(&StakingStats { total_staked })?;
        if remaining.is_zero() {
            store.delete_attribution(account, &self.symbol)?;
        } else {
            store.put_attribution(&StakeAttribution {
                account: account.clone(),
                staker: attribution.staker,
                amount: remaining,
            })?;
        }
        Ok(())
    }

    /// Reassign the staker-of-record for `account` from `old_staker` to
    /// `new_staker`. No amounts move; reserves and stats are untouched —
    /// only who is permitted to later unstake changes.
    pub fn reassign<S: AttributionStore>(
        &self,
        store: &S,
        old_staker: &AccountName,
        new_staker: &AccountName,
        account: &AccountName,
    ) -> Result<(), StakeError> {
        let mut attribution = store
            .get_attribution(account, &self.symbol)?
            .ok_or_else(|| StakeError::NotFound(account.to_string()))?;
        if attribution.staker != *old_staker {
            return Err(StakeError::AttributionMismatch {
                account: account.to_string(),
                claimed: old_staker.to_string(),
                actual: attribution.staker.to_string(),
            });
        }
        attribution.staker = new_staker.clone();
        store.put_attribution(&attribution)?;
        Ok(())
    }

    /// Overwrite the global staked total, ignoring individual reserves.
    ///
    /// Administrative escape hatch for bootstrap or out-of-band migration;
    /// the caller is responsible for restoring the sum invariant afterwards.
    pub fn set_total_staked<S: StakeStatsStore>(
        &self,
        store: &S,
        value: &Asset,
    ) -> Result<(), StakeError> {
        if value.symbol() != &self.symbol {
            return Err(StakeError::WrongSymbol {
                expected: self.symbol.clone(),
                found: value.symbol().clone(),
            });
        }
        store.put_stats(&StakingStats {
            total_staked: value.clone(),
        })?;
        Ok(())
    }

    /// The global staked total for the staking symbol (zero if no record).
    pub fn total_staked<S: StakeStatsStore>(&self, store: &S) -> Result<Asset, StakeError> {
        Ok(store
            .get_stats(&self.symbol)?
            .map(|stats| stats.total_staked)
            .unwrap_or_else(|| Asset::zero(self.symbol.clone())))
    }

    /// Tokens currently staked to `receiver` (zero if no record).
    pub fn staked_of<S: ReserveStore>(
        &self,
        store: &S,
        receiver: &AccountName,
    ) -> Result<Asset, StakeError> {
        Ok(store
            .get_reserve(receiver, &self.symbol)?
            .map(|reserve| reserve.staked)
            .unwrap_or_else(|| Asset::zero(self.symbol.clone())))
    }

    /// The attribution record for `account`, if any.
    pub fn attribution_of<S: AttributionStore>(
        &self,
        store: &S,
        account: &AccountName,
    ) -> Result<Option<StakeAttribution>, StakeError> {
        Ok(store.get_attribution(account, &self.symbol)?)
    }

    /// Recompute the staked total from individual reserves, for audits.
    pub fn audit_total<S: ReserveStore>(&self, store: &S) -> Result<Asset, StakeError> {
        let mut total = Asset::zero(self.symbol.clone());
        for reserve in store.iter_reserves()? {
            if reserve.staked.symbol() == &self.symbol {
                total = total.checked_add(&reserve.staked)?;
            }
        }
        Ok(total)
    }
}
