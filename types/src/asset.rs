//! Fixed-point token quantity.
//!
//! Amounts are integers scaled by the symbol's precision — `1.0000 ORE` is
//! stored as `10_000` raw. There is no floating point anywhere in the engine;
//! every participant must recompute identical results from identical inputs.

use crate::error::AssetError;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A quantity of a specific token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    amount: i64,
    symbol: Symbol,
}

impl Asset {
    /// Largest representable magnitude (2^62 - 1).
    pub const MAX_AMOUNT: i64 = (1 << 62) - 1;

    pub fn new(amount: i64, symbol: Symbol) -> Self {
        Self { amount, symbol }
    }

    pub fn zero(symbol: Symbol) -> Self {
        Self { amount: 0, symbol }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Whether the amount is within the representable range.
    pub fn is_valid(&self) -> bool {
        self.amount >= -Self::MAX_AMOUNT && self.amount <= Self::MAX_AMOUNT
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// A new asset with the same symbol and a different amount.
    pub fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            symbol: self.symbol.clone(),
        }
    }

    fn require_same_symbol(&self, other: &Asset) -> Result<(), AssetError> {
        if self.symbol != other.symbol {
            return Err(AssetError::SymbolMismatch {
                expected: self.symbol.clone(),
                found: other.symbol.clone(),
            });
        }
        Ok(())
    }

    pub fn checked_add(&self, other: &Asset) -> Result<Asset, AssetError> {
        self.require_same_symbol(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(AssetError::Overflow)?;
        let result = self.with_amount(amount);
        if !result.is_valid() {
            return Err(AssetError::AmountOutOfRange(amount));
        }
        Ok(result)
    }

    pub fn checked_sub(&self, other: &Asset) -> Result<Asset, AssetError> {
        self.require_same_symbol(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(AssetError::Overflow)?;
        let result = self.with_amount(amount);
        if !result.is_valid() {
            return Err(AssetError::AmountOutOfRange(amount));
        }
        Ok(result)
    }
}

impl Add for Asset {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        assert_eq!(self.symbol, rhs.symbol, "asset symbol mismatch");
        self.with_amount(self.amount + rhs.amount)
    }
}

impl Sub for Asset {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        assert_eq!(self.symbol, rhs.symbol, "asset symbol mismatch");
        self.with_amount(self.amount - rhs.amount)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.symbol.unit();
        let whole = self.amount / unit;
        let frac = (self.amount % unit).abs();
        let sign = if self.amount < 0 && whole == 0 { "-" } else { "" };
        if self.symbol.precision() == 0 {
            write!(f, "{}{} {}", sign, whole, self.symbol.code())
        } else {
            write!(
                f,
                "{}{}.{:0width$} {}",
                sign,
                whole,
                frac,
                self.symbol.code(),
                width = self.symbol.precision() as usize
            )
        }
    }
}

impl FromStr for Asset {
    type Err = AssetError;

    /// Parse an asset from its display form, e.g. `"400.0000 ORE"`.
    ///
    /// The precision is inferred from the number of fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let value = parts
            .next()
            .ok_or_else(|| AssetError::Parse(s.to_owned()))?;
        let code = parts
            .next()
            .ok_or_else(|| AssetError::Parse(s.to_owned()))?;
        if parts.next().is_some() || !Symbol::is_valid_code(code) {
            return Err(AssetError::Parse(s.to_owned()));
        }

        let (negative, value) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (whole, frac) = match value.split_once('.') {
            Some((w, f)) => (w, f),
            None => (value, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AssetError::Parse(s.to_owned()));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) || frac.len() > 18 {
            return Err(AssetError::Parse(s.to_owned()));
        }

        let precision = frac.len() as u8;
        let symbol = Symbol::new(code, precision);
        let whole: i64 = whole.parse().map_err(|_| AssetError::Parse(s.to_owned()))?;
        let frac: i64 = if frac.is_empty() {
            0
        } else {
            frac.parse().map_err(|_| AssetError::Parse(s.to_owned()))?
        };
        let mut amount = whole
            .checked_mul(symbol.unit())
            .and_then(|w| w.checked_add(frac))
            .ok_or(AssetError::Overflow)?;
        if negative {
            amount = -amount;
        }
        let asset = Asset::new(amount, symbol);
        if !asset.is_valid() {
            return Err(AssetError::AmountOutOfRange(amount));
        }
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ore(amount: i64) -> Asset {
        Asset::new(amount, Symbol::ore())
    }

    #[test]
    fn display_fixed_point() {
        assert_eq!(ore(10_000).to_string(), "1.0000 ORE");
        assert_eq!(ore(4_000_000).to_string(), "400.0000 ORE");
        assert_eq!(ore(42).to_string(), "0.0042 ORE");
        assert_eq!(ore(0).to_string(), "0.0000 ORE");
        assert_eq!(ore(-5_000).to_string(), "-0.5000 ORE");
        assert_eq!(ore(-15_000).to_string(), "-1.5000 ORE");
    }

    #[test]
    fn parse_round_trips_display() {
        for raw in [0, 1, 42, 10_000, 4_000_000, 123_456_789] {
            let a = ore(raw);
            let parsed: Asset = a.to_string().parse().unwrap();
            assert_eq!(parsed, a);
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "ORE", "1.0", "1.0 ore", "1,0 ORE", "1.0 ORE extra", "x.y ORE"] {
            assert!(s.parse::<Asset>().is_err(), "{s:?}");
        }
    }

    #[test]
    fn checked_arithmetic_same_symbol() {
        let a = ore(100);
        let b = ore(30);
        assert_eq!(a.checked_add(&b).unwrap(), ore(130));
        assert_eq!(a.checked_sub(&b).unwrap(), ore(70));
        assert_eq!(b.checked_sub(&a).unwrap(), ore(-70));
    }

    #[test]
    fn checked_arithmetic_rejects_symbol_mismatch() {
        let a = ore(100);
        let b = Asset::new(100, Symbol::new("SYS", 4));
        assert!(matches!(
            a.checked_add(&b),
            Err(AssetError::SymbolMismatch { .. })
        ));
    }

    #[test]
    fn checked_add_rejects_out_of_range() {
        let a = ore(Asset::MAX_AMOUNT);
        assert!(a.checked_add(&ore(1)).is_err());
    }
}
