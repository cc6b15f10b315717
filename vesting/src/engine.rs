//! Core vesting computation engine.

use crate::error::VestingError;
use ore_store::vesting::{VestingAccount, VestingSchedule, VestingStore};
use ore_types::{AccountName, Asset, Symbol, Timestamp};

/// Maintains per-account vesting schedules and answers the Guard check.
///
/// The locked total is carried as a rollup on the account record and updated
/// incrementally; the Guard never rescans the entry list. All unlock
/// arithmetic is integer-only so every participant recomputes identical
/// results from identical inputs.
pub struct VestingEngine {
    symbol: Symbol,
}

impl VestingEngine {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Append a new schedule of `quantity`, unlocking linearly from `start`
    /// to `end`. The caller is responsible for the Guard-visible balance
    /// precondition; this only maintains the vesting tables.
    pub fn add_schedule<V: VestingStore>(
        &self,
        store: &V,
        account: &AccountName,
        quantity: &Asset,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<(), VestingError> {
        if quantity.symbol() != &self.symbol {
            return Err(VestingError::WrongSymbol {
                expected: self.symbol.clone(),
                found: quantity.symbol().clone(),
            });
        }
        if !quantity.is_positive() {
            return Err(VestingError::InvalidQuantity);
        }
        if end <= start {
            return Err(VestingError::InvalidTimeRange {
                start: start.as_secs(),
                end: end.as_secs(),
            });
        }

        let mut record = store.get_vesting(account)?.unwrap_or_else(|| VestingAccount {
            account: account.clone(),
            schedules: Vec::new(),
            total_claimed: Asset::zero(self.symbol.clone()),
            total_locked: Asset::zero(self.symbol.clone()),
        });
        record.total_locked = record.total_locked.checked_add(quantity)?;
        record.schedules.push(VestingSchedule {
            claimed: Asset::zero(self.symbol.clone()),
            locked: quantity.clone(),
            start,
            end,
        });
        store.put_vesting(&record)?;
        Ok(())
    }

    /// Remove the schedule at `index`, subtracting its claimed/locked parts
    /// from the rollups. Removing a still-locked entry forfeits the
    /// remaining lock, reclassifying it as spendable. The account record is
    /// deleted once its last entry goes.
    pub fn remove_schedule<V: VestingStore>(
        &self,
        store: &V,
        account: &AccountName,
        index: usize,
    ) -> Result<VestingSchedule, VestingError> {
        let mut record = store
            .get_vesting(account)?
            .ok_or_else(|| VestingError::NotFound(account.to_string()))?;
        let len = record.schedules.len();
        if index >= len {
            return Err(VestingError::IndexOutOfRange { index, len });
        }
        let removed = record.schedules.remove(index);
        record.total_claimed = record.total_claimed.checked_sub(&removed.claimed)?;
        record.total_locked = record.total_locked.checked_sub(&removed.locked)?;
        if record.schedules.is_empty() {
            store.delete_vesting(account)?;
        } else {
            store.put_vesting(&record)?;
        }
        Ok(removed)
    }

    /// The unlock tick. Moves newly vested amounts from `locked` to
    /// `claimed` on every entry, per the linear schedule. Callable by
    /// anyone, any number of times; idempotent at a fixed `now`. Returns
    /// the total newly unlocked amount (zero when there is no record or
    /// nothing to unlock).
    pub fn update_claim<V: VestingStore>(
        &self,
        store: &V,
        owner: &AccountName,
        now: Timestamp,
    ) -> Result<Asset, VestingError> {
        let Some(mut record) = store.get_vesting(owner)? else {
            return Ok(Asset::zero(self.symbol.clone()));
        };

        let mut newly_unlocked: i64 = 0;
        for entry in &mut record.schedules {
            let delta = unlocked_delta(entry, now);
            if delta > 0 {
                entry.claimed = entry.claimed.with_amount(entry.claimed.amount() + delta);
                entry.locked = entry.locked.with_amount(entry.locked.amount() - delta);
                newly_unlocked += delta;
            }
        }

        if newly_unlocked > 0 {
            let moved = Asset::new(newly_unlocked, self.symbol.clone());
            record.total_claimed = record.total_claimed.checked_add(&moved)?;
            record.total_locked = record.total_locked.checked_sub(&moved)?;
            store.put_vesting(&record)?;
        }
        Ok(Asset::new(newly_unlocked, self.symbol.clone()))
    }

    /// The account's still-locked vesting total, from the rollup (zero if
    /// no record). Call [`Self::update_claim`] first for a current figure.
    pub fn locked_of<V: VestingStore>(
        &self,
        store: &V,
        account: &AccountName,
    ) -> Result<Asset, VestingError> {
        Ok(store
            .get_vesting(account)?
            .map(|record| record.total_locked)
            .unwrap_or_else(|| Asset::zero(self.symbol.clone())))
    }

    /// The Guard: reject any debit of `value` that would dip into
    /// still-locked vesting funds.
    ///
    /// Runs the unlock tick first so the locked total is current at `now`,
    /// then requires `balance - locked >= value`.
    pub fn check_unlocked<V: VestingStore>(
        &self,
        store: &V,
        account: &AccountName,
        balance: &Asset,
        value: &Asset,
        now: Timestamp,
    ) -> Result<(), VestingError> {
        self.update_claim(store, account, now)?;
        let locked = self.locked_of(store, account)?;
        let available = balance.amount() - locked.amount();
        if available < value.amount() {
            return Err(VestingError::InsufficientBalance {
                needed: value.amount(),
                available,
            });
        }
        Ok(())
    }
}

/// Amount to move from `locked` to `claimed` at time `now`.
///
/// Inside the window the target is `floor(original * elapsed / duration)`;
/// at or past `end` the whole remaining lock moves, which guarantees full
/// unlock regardless of rounding drift from the linear formula.
fn unlocked_delta(entry: &VestingSchedule, now: Timestamp) -> i64 {
    if now >= entry.end {
        return entry.locked.amount();
    }
    if now <= entry.start {
        return 0;
    }
    let original = entry.original_quantity() as i128;
    let elapsed = entry.start.elapsed_since(now) as i128;
    let duration = (entry.end.as_secs() - entry.start.as_secs()) as i128;
    let target = (original * elapsed / duration) as i64;
    (target - entry.claimed.amount()).max(0)
}
