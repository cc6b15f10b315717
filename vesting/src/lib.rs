//! Vesting engine for the ORE custody engine.
//!
//! A vesting schedule reclassifies part of an account's balance as locked:
//! the tokens never leave the balance row, but the Guard refuses any debit
//! that would dip into them. Each schedule unlocks linearly between its
//! start and end instants, computed with integer arithmetic only — floor
//! rounding during the window, a hard clamp to full unlock at the end.

pub mod engine;
pub mod error;

pub use engine::VestingEngine;
pub use error::VestingError;
