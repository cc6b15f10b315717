//! The Ledger collaborator — plain balance bookkeeping consumed by the
//! custody engine.
//!
//! The core staking/vesting logic only ever calls the narrow [`Ledger`]
//! trait: debit, credit, and two read-only queries. Supply is derived as the
//! sum of balances, which keeps issuance bookkeeping out of scope while
//! preserving the "sum of balances equals supply" invariant by construction.

pub mod error;
pub mod ledger;

pub use error::LedgerError;
pub use ledger::{Ledger, StoreLedger};
