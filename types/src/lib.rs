//! Fundamental types for the ORE token custody engine.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: account names, currency symbols, fixed-point asset amounts,
//! timestamps, and engine parameters.

pub mod account;
pub mod asset;
pub mod error;
pub mod params;
pub mod symbol;
pub mod time;

pub use account::AccountName;
pub use asset::Asset;
pub use error::AssetError;
pub use params::TokenParams;
pub use symbol::Symbol;
pub use time::Timestamp;
