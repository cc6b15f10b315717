//! Staking reserve bookkeeping for the ORE custody engine.
//!
//! Three tables move in lock-step here: per-receiver stake reserves, the
//! per-account attribution records naming the staker-of-record, and the
//! single global staked total per symbol. Every operation keeps
//! `total_staked == Σ reserves` except the administrative `set_total_staked`
//! escape hatch, which overwrites the total without touching reserves.
//!
//! Balance movement (the debit on stake, the credit on unstake) is the
//! action surface's job; this crate only maintains the custody tables.

pub mod engine;
pub mod error;

pub use engine::StakingEngine;
pub use error::StakeError;
