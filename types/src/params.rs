//! Engine parameters.

use crate::account::AccountName;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// Configuration for the custody engine.
///
/// These were compile-time constants in the original deployment (`4,ORE`,
/// `lock.ore`, `system.ore`); carrying them as an explicit struct keeps the
/// operations free of global state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenParams {
    /// The only symbol accepted by staking and vesting operations.
    pub staking_symbol: Symbol,

    /// Account authorized to add and remove vesting schedules.
    pub vesting_authority: AccountName,

    /// Account authorized to apply administrative corrections (`setstaked`).
    pub system_authority: AccountName,

    /// Maximum memo size in bytes.
    pub max_memo_bytes: usize,
}

impl Default for TokenParams {
    fn default() -> Self {
        Self {
            staking_symbol: Symbol::ore(),
            vesting_authority: AccountName::new("lock.ore"),
            system_authority: AccountName::new("system.ore"),
            max_memo_bytes: 256,
        }
    }
}
