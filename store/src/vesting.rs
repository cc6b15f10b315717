//! Vesting schedule storage trait.

use crate::StoreError;
use ore_types::{AccountName, Asset, Timestamp};
use serde::{Deserialize, Serialize};

/// A single locked grant unlocking linearly between `start` and `end`.
///
/// Invariants: `claimed + locked` is constant (the grant's original
/// quantity), `claimed` never decreases, and `start < end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingSchedule {
    pub claimed: Asset,
    pub locked: Asset,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl VestingSchedule {
    /// The grant's quantity at creation: `claimed + locked` at any time.
    pub fn original_quantity(&self) -> i64 {
        self.claimed.amount() + self.locked.amount()
    }
}

/// All vesting schedules for one account, with rollups kept equal to the
/// sums over the entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingAccount {
    pub account: AccountName,
    /// Append-only-indexed entry list; `rmvestacct` removes by position.
    pub schedules: Vec<VestingSchedule>,
    pub total_claimed: Asset,
    pub total_locked: Asset,
}

pub trait VestingStore {
    fn get_vesting(&self, account: &AccountName) -> Result<Option<VestingAccount>, StoreError>;

    fn put_vesting(&self, record: &VestingAccount) -> Result<(), StoreError>;

    fn delete_vesting(&self, account: &AccountName) -> Result<(), StoreError>;

    /// All vesting account records.
    fn iter_vesting_accounts(&self) -> Result<Vec<VestingAccount>, StoreError>;
}
