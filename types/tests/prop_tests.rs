use proptest::prelude::*;

use ore_types::{AccountName, Asset, AssetError, Symbol, Timestamp};

const MAX: i64 = Asset::MAX_AMOUNT;

proptest! {
    /// Display then parse reproduces the exact asset.
    #[test]
    fn asset_display_parse_roundtrip(amount in -MAX..=MAX) {
        let a = Asset::new(amount, Symbol::ore());
        let parsed: Asset = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed, a);
    }

    /// Asset bincode serialization roundtrip.
    #[test]
    fn asset_bincode_roundtrip(amount in -MAX..=MAX, precision in 0u8..10) {
        let a = Asset::new(amount, Symbol::new("ORE", precision));
        let encoded = bincode::serialize(&a).unwrap();
        let decoded: Asset = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, a);
    }

    /// checked_add agrees with plain integer addition when in range.
    #[test]
    fn asset_checked_add_agrees(
        a in -1_000_000_000i64..1_000_000_000,
        b in -1_000_000_000i64..1_000_000_000,
    ) {
        let sum = Asset::new(a, Symbol::ore())
            .checked_add(&Asset::new(b, Symbol::ore()))
            .unwrap();
        prop_assert_eq!(sum.amount(), a + b);
    }

    /// checked_sub is the inverse of checked_add.
    #[test]
    fn asset_sub_inverts_add(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let x = Asset::new(a, Symbol::ore());
        let y = Asset::new(b, Symbol::ore());
        let back = x.checked_add(&y).unwrap().checked_sub(&y).unwrap();
        prop_assert_eq!(back, x);
    }

    /// Arithmetic across different symbols is always rejected.
    #[test]
    fn asset_rejects_symbol_mismatch(a in 0i64..1_000, b in 0i64..1_000) {
        let x = Asset::new(a, Symbol::ore());
        let y = Asset::new(b, Symbol::new("SYS", 4));
        prop_assert!(
            matches!(x.checked_add(&y), Err(AssetError::SymbolMismatch { .. })),
            "checked_add should fail with SymbolMismatch"
        );
        prop_assert!(
            matches!(x.checked_sub(&y), Err(AssetError::SymbolMismatch { .. })),
            "checked_sub should fail with SymbolMismatch"
        );
    }

    /// Amounts past the representable bound fail checked arithmetic.
    #[test]
    fn asset_out_of_range_rejected(excess in 1i64..1_000) {
        let a = Asset::new(MAX, Symbol::ore());
        prop_assert!(a.is_valid());
        prop_assert!(a.checked_add(&Asset::new(excess, Symbol::ore())).is_err());
    }

    /// Timestamp ordering matches the underlying seconds.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// elapsed_since returns the forward difference and saturates backwards.
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        prop_assert_eq!(t.elapsed_since(Timestamp::new(base + offset)), offset);
        prop_assert_eq!(Timestamp::new(base + offset + 1).elapsed_since(t), 0);
    }

    /// Well-formed names are accepted and round-trip through Display.
    #[test]
    fn account_name_roundtrip(name in "[a-z1-5.]{1,12}") {
        prop_assert!(AccountName::is_valid_name(&name));
        prop_assert_eq!(AccountName::new(name.clone()).to_string(), name);
    }

    /// Symbol unit is 10^precision.
    #[test]
    fn symbol_unit_is_power_of_ten(precision in 0u8..=18) {
        let symbol = Symbol::new("ORE", precision);
        prop_assert_eq!(symbol.unit(), 10i64.pow(precision as u32));
    }
}
