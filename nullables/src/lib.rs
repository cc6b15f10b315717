//! Nullable infrastructure for deterministic testing.
//!
//! The engine's external dependencies (time, storage) are abstracted behind
//! explicit inputs and store traits. This crate provides test-friendly
//! implementations that return deterministic values, can be controlled
//! programmatically, and never touch the filesystem.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod store;

pub use clock::NullClock;
pub use store::NullStore;
