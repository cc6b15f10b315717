//! The token engine — action handlers and read-only queries.

use crate::error::TokenError;
use ore_ledger::Ledger;
use ore_staking::StakingEngine;
use ore_store::attribution::{AttributionStore, StakeAttribution};
use ore_store::reserve::ReserveStore;
use ore_store::stats::StakeStatsStore;
use ore_store::vesting::VestingStore;
use ore_types::{AccountName, Asset, Symbol, Timestamp, TokenParams};
use ore_vesting::VestingEngine;

/// The custody engine behind the action surface.
///
/// `L` is the Ledger collaborator owning the balance table; `S` is the store
/// backend holding the four custody tables (reserves, stats, attributions,
/// vesting accounts). The Ledger exclusively owns balances — the engine only
/// reaches them through the trait's debit/credit/query methods.
pub struct TokenEngine<L, S> {
    ledger: L,
    store: S,
    staking: StakingEngine,
    vesting: VestingEngine,
    params: TokenParams,
}

impl<L, S> TokenEngine<L, S>
where
    L: Ledger,
    S: ReserveStore + StakeStatsStore + AttributionStore + VestingStore,
{
    pub fn new(ledger: L, store: S, params: TokenParams) -> Self {
        let staking = StakingEngine::new(params.staking_symbol.clone());
        let vesting = VestingEngine::new(params.staking_symbol.clone());
        Self {
            ledger,
            store,
            staking,
            vesting,
            params,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn params(&self) -> &TokenParams {
        &self.params
    }

    fn require_auth(&self, auth: &AccountName, required: &AccountName) -> Result<(), TokenError> {
        if auth != required {
            return Err(TokenError::Unauthorized {
                required: required.to_string(),
                actual: auth.to_string(),
            });
        }
        Ok(())
    }

    fn check_quantity(&self, quantity: &Asset) -> Result<(), TokenError> {
        if quantity.symbol() != &self.params.staking_symbol {
            return Err(TokenError::InvalidSymbol {
                expected: self.params.staking_symbol.clone(),
                found: quantity.symbol().clone(),
            });
        }
        if !quantity.is_positive() || !quantity.is_valid() {
            return Err(TokenError::InvalidQuantity);
        }
        Ok(())
    }

    fn check_memo(&self, memo: &str) -> Result<(), TokenError> {
        if memo.len() > self.params.max_memo_bytes {
            return Err(TokenError::MemoTooLong {
                len: memo.len(),
                max: self.params.max_memo_bytes,
            });
        }
        Ok(())
    }

    /// The pre-debit Guard: fetch the balance row and refuse any debit that
    /// would dip into still-locked vesting funds.
    fn guard(
        &self,
        account: &AccountName,
        value: &Asset,
        now: Timestamp,
    ) -> Result<(), TokenError> {
        let balance = self
            .ledger
            .balance_of(account, value.symbol())?
            .ok_or_else(|| ore_ledger::LedgerError::UnknownAccount(account.to_string()))?;
        self.vesting
            .check_unlocked(&self.store, account, &balance, value, now)?;
        Ok(())
    }

    /// Verify `account` can absorb a credit of `value` without overflowing.
    /// Run before the first table write of any action that ends in a credit,
    /// so the credit itself cannot fail mid-commit.
    fn check_credit_headroom(
        &self,
        account: &AccountName,
        value: &Asset,
    ) -> Result<(), TokenError> {
        if let Some(balance) = self.ledger.balance_of(account, value.symbol())? {
            balance
                .checked_add(value)
                .map_err(ore_ledger::LedgerError::from)?;
        }
        Ok(())
    }

    /// Lock `quantity` of `account`'s spendable balance into `receiver`'s
    /// stake reserve, making `receiver` the staker-of-record.
    pub fn stake(
        &self,
        auth: &AccountName,
        account: &AccountName,
        receiver: &AccountName,
        quantity: &Asset,
        memo: &str,
        now: Timestamp,
    ) -> Result<(), TokenError> {
        self.require_auth(auth, account)?;
        self.check_quantity(quantity)?;
        self.check_memo(memo)?;
        self.guard(account, quantity, now)?;

        // add_stake runs all of its fallible arithmetic before its first
        // write, and the guard has already proven the balance row covers
        // `quantity`, so the debit cannot fail once the staking tables
        // commit.
        self.staking
            .add_stake(&self.store, account, receiver, quantity, now)?;
        self.ledger.debit(account, quantity)?;
        tracing::debug!(
            account = %account,
            receiver = %receiver,
            quantity = %quantity,
            "stake applied"
        );
        Ok(())
    }

    /// Withdraw `quantity` from `receiver`'s reserve back to `account`'s
    /// spendable balance. Only the staker-of-record may withdraw.
    pub fn unstake(
        &self,
        auth: &AccountName,
        account: &AccountName,
        receiver: &AccountName,
        quantity: &Asset,
        memo: &str,
        now: Timestamp,
    ) -> Result<(), TokenError> {
        self.require_auth(auth, account)?;
        self.check_quantity(quantity)?;
        self.check_memo(memo)?;
        self.check_credit_headroom(account, quantity)?;

        self.staking
            .sub_stake(&self.store, account, receiver, quantity, now)?;
        self.ledger.credit(account, quantity, account)?;
        tracing::debug!(
            account = %account,
            receiver = %receiver,
            quantity = %quantity,
            "unstake applied"
        );
        Ok(())
    }

    /// Reassign the staker-of-record for `account` from `old_staker` to
    /// `new_staker` without moving any tokens.
    pub fn chngstaker(
        &self,
        auth: &AccountName,
        old_staker: &AccountName,
        new_staker: &AccountName,
        account: &AccountName,
    ) -> Result<(), TokenError> {
        if auth != old_staker && auth != &self.params.system_authority {
            return Err(TokenError::Unauthorized {
                required: old_staker.to_string(),
                actual: auth.to_string(),
            });
        }
        self.staking
            .reassign(&self.store, old_staker, new_staker, account)?;
        tracing::debug!(
            account = %account,
            old_staker = %old_staker,
            new_staker = %new_staker,
            "staker-of-record reassigned"
        );
        Ok(())
    }

    /// Administrative override of the global staked total. Does not touch
    /// individual reserves and may break the sum invariant; the caller must
    /// restore consistency out-of-band.
    pub fn setstaked(&self, auth: &AccountName, value: &Asset) -> Result<(), TokenError> {
        self.require_auth(auth, &self.params.system_authority)?;
        self.staking.set_total_staked(&self.store, value)?;
        tracing::warn!(value = %value, "global staked total overridden");
        Ok(())
    }

    /// Add a vesting schedule for `account`: `quantity` unlocks linearly
    /// from `start` to `end`. The tokens stay in the balance row and are
    /// reclassified as locked via the Guard.
    pub fn addvestacct(
        &self,
        auth: &AccountName,
        account: &AccountName,
        quantity: &Asset,
        start: Timestamp,
        end: Timestamp,
        now: Timestamp,
    ) -> Result<(), TokenError> {
        self.require_auth(auth, &self.params.vesting_authority)?;
        self.check_quantity(quantity)?;
        if end <= start {
            return Err(TokenError::Vesting(
                ore_vesting::VestingError::InvalidTimeRange {
                    start: start.as_secs(),
                    end: end.as_secs(),
                },
            ));
        }
        // The account must be able to cover the new lock out of its
        // currently-unlocked balance.
        self.guard(account, quantity, now)?;

        self.vesting
            .add_schedule(&self.store, account, quantity, start, end)?;
        tracing::debug!(
            account = %account,
            quantity = %quantity,
            start = %start,
            end = %end,
            "vesting schedule added"
        );
        Ok(())
    }

    /// Remove the vesting schedule at `index` for `account`. Permitted while
    /// the entry is still partly locked; the remainder becomes spendable.
    pub fn rmvestacct(
        &self,
        auth: &AccountName,
        account: &AccountName,
        index: usize,
    ) -> Result<(), TokenError> {
        self.require_auth(auth, &self.params.vesting_authority)?;
        let removed = self.vesting.remove_schedule(&self.store, account, index)?;
        tracing::debug!(
            account = %account,
            index,
            forfeited = %removed.locked,
            "vesting schedule removed"
        );
        Ok(())
    }

    /// The unlock tick: move newly vested amounts from locked to claimed for
    /// every schedule of `owner`. Callable by anyone; idempotent at a fixed
    /// timestamp; no-op when there is nothing to unlock. Returns the newly
    /// unlocked total.
    pub fn updateclaim(&self, owner: &AccountName, now: Timestamp) -> Result<Asset, TokenError> {
        let unlocked = self.vesting.update_claim(&self.store, owner, now)?;
        if unlocked.is_positive() {
            tracing::debug!(owner = %owner, unlocked = %unlocked, "vesting claim updated");
        }
        Ok(unlocked)
    }

    /// Guard-gated balance transfer — the Ledger-call glue for ordinary
    /// sends. `from` pays the storage for `to`'s row if it must be created.
    pub fn transfer(
        &self,
        auth: &AccountName,
        from: &AccountName,
        to: &AccountName,
        quantity: &Asset,
        memo: &str,
        now: Timestamp,
    ) -> Result<(), TokenError> {
        self.require_auth(auth, from)?;
        if from == to {
            return Err(TokenError::SelfTransfer);
        }
        self.check_quantity(quantity)?;
        self.check_memo(memo)?;
        self.guard(from, quantity, now)?;
        self.check_credit_headroom(to, quantity)?;

        self.ledger.debit(from, quantity)?;
        self.ledger.credit(to, quantity, from)?;
        tracing::debug!(from = %from, to = %to, quantity = %quantity, "transfer applied");
        Ok(())
    }

    // ── Read-only queries ────────────────────────────────────────────────

    pub fn balance_of(&self, account: &AccountName) -> Result<Option<Asset>, TokenError> {
        Ok(self
            .ledger
            .balance_of(account, &self.params.staking_symbol)?)
    }

    pub fn supply_of(&self, symbol: &Symbol) -> Result<Asset, TokenError> {
        Ok(self.ledger.supply_of(symbol)?)
    }

    /// The global staked total for the staking symbol.
    pub fn total_staked(&self) -> Result<Asset, TokenError> {
        Ok(self.staking.total_staked(&self.store)?)
    }

    /// Tokens currently staked to `receiver`.
    pub fn staked_of(&self, receiver: &AccountName) -> Result<Asset, TokenError> {
        Ok(self.staking.staked_of(&self.store, receiver)?)
    }

    /// The staker-of-record attribution for `account`, if any.
    pub fn attribution_of(
        &self,
        account: &AccountName,
    ) -> Result<Option<StakeAttribution>, TokenError> {
        Ok(self.staking.attribution_of(&self.store, account)?)
    }

    /// The still-locked vesting total for `account` as of the last unlock
    /// tick.
    pub fn locked_of(&self, account: &AccountName) -> Result<Asset, TokenError> {
        Ok(self.vesting.locked_of(&self.store, account)?)
    }

    /// Recompute every cross-table invariant from scratch and compare with
    /// the maintained records. Used by tests and audits; `setstaked`
    /// legitimately breaks the reserve-sum check until consistency is
    /// restored.
    pub fn check_invariants(&self) -> Result<(), TokenError> {
        let total = self.staking.total_staked(&self.store)?;
        let audited = self.staking.audit_total(&self.store)?;
        if total != audited {
            return Err(TokenError::InvariantViolation(format!(
                "staked total {total} != sum of reserves {audited}"
            )));
        }

        let mut attributed = Asset::zero(self.params.staking_symbol.clone());
        for attribution in self.store.iter_attributions()? {
            if attribution.amount.amount() <= 0 {
                return Err(TokenError::InvariantViolation(format!(
                    "attribution for {} is not positive",
                    attribution.account
                )));
            }
            attributed = attributed.checked_add(&attribution.amount).map_err(|e| {
                TokenError::InvariantViolation(format!("attribution sum overflow: {e}"))
            })?;
        }
        if attributed != audited {
            return Err(TokenError::InvariantViolation(format!(
                "attributed total {attributed} != sum of reserves {audited}"
            )));
        }

        for record in self.store.iter_vesting_accounts()? {
            let mut claimed: i64 = 0;
            let mut locked: i64 = 0;
            for entry in &record.schedules {
                if entry.claimed.amount() < 0 || entry.locked.amount() < 0 {
                    return Err(TokenError::InvariantViolation(format!(
                        "negative vesting amounts for {}",
                        record.account
                    )));
                }
                claimed += entry.claimed.amount();
                locked += entry.locked.amount();
            }
            if claimed != record.total_claimed.amount() || locked != record.total_locked.amount()
            {
                return Err(TokenError::InvariantViolation(format!(
                    "vesting rollups stale for {}",
                    record.account
                )));
            }
        }

        Ok(())
    }
}
