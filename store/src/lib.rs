//! Abstract storage traits for the ORE custody engine.
//!
//! Each logical table from the data model gets one trait: balances (owned by
//! the Ledger), stake reserves, staking stats, stake attributions, and
//! vesting accounts. Backends (in-memory for testing, or a persistent store)
//! implement these traits; the engines depend only on the traits and reach
//! all state through explicit store handles — no global singletons.

pub mod attribution;
pub mod balance;
pub mod error;
pub mod reserve;
pub mod stats;
pub mod vesting;

pub use attribution::{AttributionStore, StakeAttribution};
pub use balance::BalanceStore;
pub use error::StoreError;
pub use reserve::{ReserveStore, StakeReserve};
pub use stats::{StakeStatsStore, StakingStats};
pub use vesting::{VestingAccount, VestingSchedule, VestingStore};
