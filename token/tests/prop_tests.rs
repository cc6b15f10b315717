use proptest::prelude::*;

use ore_ledger::StoreLedger;
use ore_nullables::NullStore;
use ore_store::{BalanceStore, VestingStore};
use ore_token::TokenEngine;
use ore_types::{AccountName, Asset, Symbol, Timestamp, TokenParams};

type Engine = TokenEngine<StoreLedger<NullStore>, NullStore>;

fn ore(amount: i64) -> Asset {
    Asset::new(amount, Symbol::ore())
}

fn engine_with(rows: &[(&str, i64)]) -> Engine {
    let balances = NullStore::new();
    for (owner, amount) in rows {
        balances
            .put_balance(&AccountName::new(*owner), &ore(*amount))
            .unwrap();
    }
    TokenEngine::new(StoreLedger::new(balances), NullStore::new(), TokenParams::default())
}

proptest! {
    /// Staking then unstaking the same amount restores balance, reserve,
    /// and the global total exactly.
    #[test]
    fn stake_unstake_round_trip(
        balance in 1i64..1_000_000_000,
        stake_frac_pct in 1i64..=100,
    ) {
        let engine = engine_with(&[("alice", balance)]);
        let alice = AccountName::new("alice");
        let recv = AccountName::new("recv");
        let amount = balance * stake_frac_pct / 100;
        if amount > 0 {
            engine.stake(&alice, &alice, &recv, &ore(amount), "", Timestamp::new(1)).unwrap();
            prop_assert_eq!(engine.balance_of(&alice).unwrap(), Some(ore(balance - amount)));
            prop_assert_eq!(engine.staked_of(&recv).unwrap(), ore(amount));

            engine.unstake(&alice, &alice, &recv, &ore(amount), "", Timestamp::new(2)).unwrap();
            prop_assert_eq!(engine.balance_of(&alice).unwrap(), Some(ore(balance)));
            prop_assert_eq!(engine.staked_of(&recv).unwrap(), ore(0));
            prop_assert_eq!(engine.total_staked().unwrap(), ore(0));
            engine.check_invariants().unwrap();
        }
    }

    /// Balances plus reserves stay constant across any interleaving of
    /// transfers, stakes, and unstakes, whether the calls succeed or not.
    #[test]
    fn custody_total_is_conserved(
        ops in prop::collection::vec((0u8..3, 0usize..3, 0usize..3, 1i64..500), 1..40),
    ) {
        let engine = engine_with(&[("alice", 1_000), ("bob", 1_000), ("carol", 1_000)]);
        let names: Vec<AccountName> =
            ["alice", "bob", "carol"].iter().map(|n| AccountName::new(*n)).collect();
        let now = Timestamp::new(1);

        for (kind, a, b, amount) in ops {
            let from = &names[a];
            let to = &names[b];
            let quantity = ore(amount);
            // Errors (overdrafts, self-transfers, missing attributions)
            // must leave state untouched; conservation checks that.
            let _ = match kind {
                0 => engine.transfer(from, from, to, &quantity, "", now),
                1 => engine.stake(from, from, to, &quantity, "", now),
                _ => engine.unstake(from, from, to, &quantity, "", now),
            };
        }

        let supply = engine.supply_of(&Symbol::ore()).unwrap();
        let staked = engine.total_staked().unwrap();
        prop_assert_eq!(supply.checked_add(&staked).unwrap(), ore(3_000));
        engine.check_invariants().unwrap();
    }

    /// Mid-schedule, the claimed amount equals the floor of the linear
    /// interpolation.
    #[test]
    fn vesting_unlock_is_linear(
        grant in 1i64..1_000_000_000,
        start in 0u64..1_000_000,
        duration in 1u64..1_000_000,
        elapsed_pct in 0u64..=200,
    ) {
        let engine = engine_with(&[("alice", grant)]);
        let alice = AccountName::new("alice");
        let lock = AccountName::new("lock.ore");
        let end = start + duration;
        engine
            .addvestacct(&lock, &alice, &ore(grant), Timestamp::new(start), Timestamp::new(end), Timestamp::new(start))
            .unwrap();

        let now = start + duration * elapsed_pct / 100;
        engine.updateclaim(&alice, Timestamp::new(now)).unwrap();
        let record = engine.store().get_vesting(&alice).unwrap().unwrap();
        let entry = &record.schedules[0];

        let expected = if now >= end {
            grant
        } else {
            (grant as i128 * (now - start) as i128 / duration as i128) as i64
        };
        prop_assert_eq!(entry.claimed.amount(), expected);
        prop_assert_eq!(entry.claimed.amount() + entry.locked.amount(), grant);
    }

    /// Claimed never decreases, and claimed + locked never changes, no
    /// matter the order the unlock tick observes timestamps in.
    #[test]
    fn vesting_claim_monotone_under_time_shuffle(
        grant in 1i64..1_000_000,
        times in prop::collection::vec(0u64..2_000, 1..20),
    ) {
        let engine = engine_with(&[("alice", grant)]);
        let alice = AccountName::new("alice");
        let lock = AccountName::new("lock.ore");
        engine
            .addvestacct(&lock, &alice, &ore(grant), Timestamp::new(0), Timestamp::new(1_000), Timestamp::new(0))
            .unwrap();

        let mut last_claimed = 0i64;
        for now in times {
            engine.updateclaim(&alice, Timestamp::new(now)).unwrap();
            let record = engine.store().get_vesting(&alice).unwrap().unwrap();
            let entry = &record.schedules[0];
            prop_assert!(entry.claimed.amount() >= last_claimed);
            prop_assert_eq!(entry.claimed.amount() + entry.locked.amount(), grant);
            last_claimed = entry.claimed.amount();
        }
    }

    /// The guard admits a debit of exactly the spendable amount and rejects
    /// one unit more.
    #[test]
    fn guard_boundary_is_exact(
        balance in 2i64..1_000_000,
        locked_frac_pct in 1i64..100,
    ) {
        let engine = engine_with(&[("alice", balance)]);
        let alice = AccountName::new("alice");
        let lock = AccountName::new("lock.ore");
        let locked = (balance * locked_frac_pct / 100).max(1);
        engine
            .addvestacct(&lock, &alice, &ore(locked), Timestamp::new(0), Timestamp::new(100), Timestamp::new(0))
            .unwrap();

        let spendable = balance - locked;
        if spendable > 0 {
            engine
                .transfer(&alice, &alice, &AccountName::new("bob"), &ore(spendable), "", Timestamp::new(0))
                .unwrap();
        }
        prop_assert!(engine
            .transfer(&alice, &alice, &AccountName::new("bob"), &ore(1), "", Timestamp::new(0))
            .is_err());
    }

    /// Restoring a snapshot reproduces every queryable total.
    #[test]
    fn snapshot_round_trip(
        balance in 10i64..1_000_000,
        staked in 1i64..5,
        vested in 1i64..5,
    ) {
        let engine = engine_with(&[("alice", balance)]);
        let alice = AccountName::new("alice");
        let lock = AccountName::new("lock.ore");
        engine.stake(&alice, &alice, &AccountName::new("recv"), &ore(staked), "", Timestamp::new(1)).unwrap();
        engine
            .addvestacct(&lock, &alice, &ore(vested), Timestamp::new(0), Timestamp::new(100), Timestamp::new(1))
            .unwrap();

        let bytes = engine.snapshot().unwrap().to_bytes().unwrap();
        let restored = engine_with(&[]);
        restored.restore(&ore_token::TokenSnapshot::from_bytes(&bytes).unwrap()).unwrap();

        prop_assert_eq!(restored.balance_of(&alice).unwrap(), engine.balance_of(&alice).unwrap());
        prop_assert_eq!(restored.total_staked().unwrap(), engine.total_staked().unwrap());
        prop_assert_eq!(restored.locked_of(&alice).unwrap(), engine.locked_of(&alice).unwrap());
        restored.check_invariants().unwrap();
    }
}
