//! Nullable store — thread-safe in-memory storage for testing.

use ore_store::attribution::{AttributionStore, StakeAttribution};
use ore_store::balance::BalanceStore;
use ore_store::reserve::{ReserveStore, StakeReserve};
use ore_store::stats::{StakeStatsStore, StakingStats};
use ore_store::vesting::{VestingAccount, VestingStore};
use ore_store::StoreError;
use ore_types::{AccountName, Asset, Symbol};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// An in-memory backend implementing every table trait of the engine.
///
/// Keys are (scope, symbol) string pairs, mirroring the scoped-table layout
/// of the original contract. BTreeMaps keep iteration order deterministic.
pub struct NullStore {
    balances: Mutex<BTreeMap<(String, String), Asset>>,
    reserves: Mutex<BTreeMap<(String, String), StakeReserve>>,
    stats: Mutex<BTreeMap<String, StakingStats>>,
    attributions: Mutex<BTreeMap<(String, String), StakeAttribution>>,
    vesting: Mutex<BTreeMap<String, VestingAccount>>,
}

fn key(scope: &AccountName, symbol: &Symbol) -> (String, String) {
    (scope.to_string(), symbol.to_string())
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(BTreeMap::new()),
            reserves: Mutex::new(BTreeMap::new()),
            stats: Mutex::new(BTreeMap::new()),
            attributions: Mutex::new(BTreeMap::new()),
            vesting: Mutex::new(BTreeMap::new()),
        }
    }

    /// Drop every record, returning the store to its pristine state.
    pub fn clear(&self) {
        self.balances.lock().unwrap().clear();
        self.reserves.lock().unwrap().clear();
        self.stats.lock().unwrap().clear();
        self.attributions.lock().unwrap().clear();
        self.vesting.lock().unwrap().clear();
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceStore for NullStore {
    fn get_balance(
        &self,
        owner: &AccountName,
        symbol: &Symbol,
    ) -> Result<Option<Asset>, StoreError> {
        Ok(self.balances.lock().unwrap().get(&key(owner, symbol)).cloned())
    }

    fn put_balance(&self, owner: &AccountName, balance: &Asset) -> Result<(), StoreError> {
        self.balances
            .lock()
            .unwrap()
            .insert(key(owner, balance.symbol()), balance.clone());
        Ok(())
    }

    fn delete_balance(&self, owner: &AccountName, symbol: &Symbol) -> Result<(), StoreError> {
        self.balances.lock().unwrap().remove(&key(owner, symbol));
        Ok(())
    }

    fn iter_balances(&self) -> Result<Vec<(AccountName, Asset)>, StoreError> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .iter()
            .map(|((owner, _), balance)| (AccountName::new(owner.clone()), balance.clone()))
            .collect())
    }
}

impl ReserveStore for NullStore {
    fn get_reserve(
        &self,
        receiver: &AccountName,
        symbol: &Symbol,
    ) -> Result<Option<StakeReserve>, StoreError> {
        Ok(self.reserves.lock().unwrap().get(&key(receiver, symbol)).cloned())
    }

    fn put_reserve(&self, record: &StakeReserve) -> Result<(), StoreError> {
        self.reserves
            .lock()
            .unwrap()
            .insert(key(&record.receiver, record.staked.symbol()), record.clone());
        Ok(())
    }

    fn delete_reserve(&self, receiver: &AccountName, symbol: &Symbol) -> Result<(), StoreError> {
        self.reserves.lock().unwrap().remove(&key(receiver, symbol));
        Ok(())
    }

    fn iter_reserves(&self) -> Result<Vec<StakeReserve>, StoreError> {
        Ok(self.reserves.lock().unwrap().values().cloned().collect())
    }
}

impl StakeStatsStore for NullStore {
    fn get_stats(&self, symbol: &Symbol) -> Result<Option<StakingStats>, StoreError> {
        Ok(self.stats.lock().unwrap().get(&symbol.to_string()).cloned())
    }

    fn put_stats(&self, stats: &StakingStats) -> Result<(), StoreError> {
        self.stats
            .lock()
            .unwrap()
            .insert(stats.total_staked.symbol().to_string(), stats.clone());
        Ok(())
    }

    fn iter_stats(&self) -> Result<Vec<StakingStats>, StoreError> {
        Ok(self.stats.lock().unwrap().values().cloned().collect())
    }
}

impl AttributionStore for NullStore {
    fn get_attribution(
        &self,
        account: &AccountName,
        symbol: &Symbol,
    ) -> Result<Option<StakeAttribution>, StoreError> {
        Ok(self
            .attributions
            .lock()
            .unwrap()
            .get(&key(account, symbol))
            .cloned())
    }

    fn put_attribution(&self, record: &StakeAttribution) -> Result<(), StoreError> {
        self.attributions
            .lock()
            .unwrap()
            .insert(key(&record.account, record.amount.symbol()), record.clone());
        Ok(())
    }

    fn delete_attribution(
        &self,
        account: &AccountName,
        symbol: &Symbol,
    ) -> Result<(), StoreError> {
        self.attributions.lock().unwrap().remove(&key(account, symbol));
        Ok(())
    }

    fn iter_attributions(&self) -> Result<Vec<StakeAttribution>, StoreError> {
        Ok(self.attributions.lock().unwrap().values().cloned().collect())
    }
}

impl VestingStore for NullStore {
    fn get_vesting(&self, account: &AccountName) -> Result<Option<VestingAccount>, StoreError> {
        Ok(self.vesting.lock().unwrap().get(account.as_str()).cloned())
    }

    fn put_vesting(&self, record: &VestingAccount) -> Result<(), StoreError> {
        self.vesting
            .lock()
            .unwrap()
            .insert(record.account.to_string(), record.clone());
        Ok(())
    }

    fn delete_vesting(&self, account: &AccountName) -> Result<(), StoreError> {
        self.vesting.lock().unwrap().remove(account.as_str());
        Ok(())
    }

    fn iter_vesting_accounts(&self) -> Result<Vec<VestingAccount>, StoreError> {
        Ok(self.vesting.lock().unwrap().values().cloned().collect())
    }
}
