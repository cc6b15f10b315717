//! Balance storage trait — the table owned by the Ledger collaborator.

use crate::StoreError;
use ore_types::{AccountName, Asset, Symbol};

/// Per-(account, symbol) spendable balance storage.
///
/// The balance row is a single number; the vesting engine reclassifies part
/// of it as locked without ever moving it out of this table.
pub trait BalanceStore {
    /// Get the balance row for (owner, symbol), if one exists.
    fn get_balance(&self, owner: &AccountName, symbol: &Symbol)
        -> Result<Option<Asset>, StoreError>;

    /// Create or overwrite the balance row for (owner, `balance.symbol()`).
    fn put_balance(&self, owner: &AccountName, balance: &Asset) -> Result<(), StoreError>;

    /// Delete the balance row for (owner, symbol).
    fn delete_balance(&self, owner: &AccountName, symbol: &Symbol) -> Result<(), StoreError>;

    /// All balance rows, across every symbol.
    fn iter_balances(&self) -> Result<Vec<(AccountName, Asset)>, StoreError>;
}
