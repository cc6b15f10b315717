//! The ORE token action surface.
//!
//! Ties the Ledger collaborator, the staking engine, and the vesting engine
//! into the externally visible actions: `stake`, `unstake`, `chngstaker`,
//! `setstaked`, `addvestacct`, `rmvestacct`, `updateclaim`, and the
//! guard-gated `transfer`. Each action validates authority and preconditions,
//! then applies its table mutations and balance movements; any failure aborts
//! with no partial effect. Execution is strictly sequential, and time arrives
//! as an explicit input on every time-dependent action.

pub mod engine;
pub mod error;
pub mod snapshot;

pub use engine::TokenEngine;
pub use error::TokenError;
pub use snapshot::TokenSnapshot;
