//! The `Ledger` trait and its store-backed implementation.

use crate::LedgerError;
use ore_store::BalanceStore;
use ore_types::{AccountName, Asset, Symbol};

/// Narrow balance interface the custody engine calls into.
///
/// Debits on behalf of transfer/stake are additionally gated through the
/// vesting Guard by the action surface before they reach this trait.
pub trait Ledger {
    /// Remove `value` from `account`'s balance.
    ///
    /// Fails with `InsufficientBalance` if the row holds less than `value`.
    /// The row is kept (at zero) after a full debit; closing rows is the
    /// host's `close` action, out of scope here.
    fn debit(&self, account: &AccountName, value: &Asset) -> Result<(), LedgerError>;

    /// Add `value` to `account`'s balance, creating the row at
    /// `ram_payer`'s storage expense if it does not exist.
    fn credit(
        &self,
        account: &AccountName,
        value: &Asset,
        ram_payer: &AccountName,
    ) -> Result<(), LedgerError>;

    /// The balance row for (account, symbol), if one exists.
    fn balance_of(
        &self,
        account: &AccountName,
        symbol: &Symbol,
    ) -> Result<Option<Asset>, LedgerError>;

    /// Total supply for a symbol: the sum over all balance rows.
    fn supply_of(&self, symbol: &Symbol) -> Result<Asset, LedgerError>;

    /// Whether (account, symbol) has a balance row.
    fn account_exists(&self, account: &AccountName, symbol: &Symbol) -> Result<bool, LedgerError> {
        Ok(self.balance_of(account, symbol)?.is_some())
    }
}

/// A [`Ledger`] backed by a [`BalanceStore`].
pub struct StoreLedger<B> {
    balances: B,
}

impl<B: BalanceStore> StoreLedger<B> {
    pub fn new(balances: B) -> Self {
        Self { balances }
    }

    pub fn balances(&self) -> &B {
        &self.balances
    }
}

impl<B: BalanceStore> Ledger for StoreLedger<B> {
    fn debit(&self, account: &AccountName, value: &Asset) -> Result<(), LedgerError> {
        let balance = self
            .balances
            .get_balance(account, value.symbol())?
            .ok_or_else(|| LedgerError::UnknownAccount(account.to_string()))?;
        let remaining = balance.checked_sub(value)?;
        if remaining.amount() < 0 {
            return Err(LedgerError::InsufficientBalance {
                needed: value.amount(),
                available: balance.amount(),
            });
        }
        self.balances.put_balance(account, &remaining)?;
        Ok(())
    }

    fn credit(
        &self,
        account: &AccountName,
        value: &Asset,
        _ram_payer: &AccountName,
    ) -> Result<(), LedgerError> {
        let balance = match self.balances.get_balance(account, value.symbol())? {
            Some(existing) => existing.checked_add(value)?,
            // New row created at the RAM payer's expense; the in-memory
            // backend has no storage cost to meter.
            None => value.clone(),
        };
        self.balances.put_balance(account, &balance)?;
        Ok(())
    }

    fn balance_of(
        &self,
        account: &AccountName,
        symbol: &Symbol,
    ) -> Result<Option<Asset>, LedgerError> {
        Ok(self.balances.get_balance(account, symbol)?)
    }

    fn supply_of(&self, symbol: &Symbol) -> Result<Asset, LedgerError> {
        let mut supply = Asset::zero(symbol.clone());
        for (_, balance) in self.balances.iter_balances()? {
            if balance.symbol() == symbol {
                supply = supply.checked_add(&balance)?;
            }
        }
        Ok(supply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ore_nullables::NullStore;
    use ore_types::Symbol;

    fn ore(amount: i64) -> Asset {
        Asset::new(amount, Symbol::ore())
    }

    fn ledger_with(rows: &[(&str, i64)]) -> StoreLedger<NullStore> {
        let ledger = StoreLedger::new(NullStore::new());
        for (name, amount) in rows {
            ledger
                .balances()
                .put_balance(&AccountName::new(*name), &ore(*amount))
                .unwrap();
        }
        ledger
    }

    #[test]
    fn debit_and_credit_move_balance() {
        let ledger = ledger_with(&[("alice", 1_000)]);
        let alice = AccountName::new("alice");
        let bob = AccountName::new("bob");

        ledger.debit(&alice, &ore(400)).unwrap();
        ledger.credit(&bob, &ore(400), &alice).unwrap();

        assert_eq!(ledger.balance_of(&alice, &Symbol::ore()).unwrap(), Some(ore(600)));
        assert_eq!(ledger.balance_of(&bob, &Symbol::ore()).unwrap(), Some(ore(400)));
    }

    #[test]
    fn debit_rejects_overdraft() {
        let ledger = ledger_with(&[("alice", 100)]);
        let err = ledger.debit(&AccountName::new("alice"), &ore(101)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientBalance { needed: 101, available: 100 }
        ));
    }

    #[test]
    fn debit_unknown_account_fails() {
        let ledger = ledger_with(&[]);
        let err = ledger.debit(&AccountName::new("ghost"), &ore(1)).unwrap_err();
        assert!(matches!(err, LedgerError::UnknownAccount(_)));
    }

    #[test]
    fn full_debit_keeps_zero_row() {
        let ledger = ledger_with(&[("alice", 100)]);
        let alice = AccountName::new("alice");
        ledger.debit(&alice, &ore(100)).unwrap();
        assert_eq!(ledger.balance_of(&alice, &Symbol::ore()).unwrap(), Some(ore(0)));
    }

    #[test]
    fn supply_is_sum_of_balances() {
        let ledger = ledger_with(&[("alice", 600), ("bob", 400)]);
        assert_eq!(ledger.supply_of(&Symbol::ore()).unwrap(), ore(1_000));

        // Moving funds does not change the supply.
        ledger.debit(&AccountName::new("alice"), &ore(250)).unwrap();
        ledger
            .credit(&AccountName::new("bob"), &ore(250), &AccountName::new("alice"))
            .unwrap();
        assert_eq!(ledger.supply_of(&Symbol::ore()).unwrap(), ore(1_000));
    }
}
