//! Currency symbol type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A token symbol: an uppercase code plus a fixed decimal precision.
///
/// The precision fixes the scale of every [`Asset`](crate::Asset) amount
/// carrying this symbol; two symbols are interchangeable only when both the
/// code and the precision match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol {
    code: String,
    precision: u8,
}

impl Symbol {
    /// Maximum code length.
    pub const MAX_CODE_LEN: usize = 7;

    /// Maximum decimal precision.
    pub const MAX_PRECISION: u8 = 18;

    /// Create a new symbol from a code and precision.
    ///
    /// # Panics
    /// Panics if the code is not 1-7 uppercase ASCII letters or the
    /// precision exceeds 18.
    pub fn new(code: impl Into<String>, precision: u8) -> Self {
        let code = code.into();
        assert!(Self::is_valid_code(&code), "invalid symbol code: {code:?}");
        assert!(
            precision <= Self::MAX_PRECISION,
            "symbol precision {precision} exceeds {}",
            Self::MAX_PRECISION
        );
        Self { code, precision }
    }

    /// The ORE token symbol: 4 decimals.
    pub fn ore() -> Self {
        Self::new("ORE", 4)
    }

    /// Whether `code` is a well-formed symbol code.
    pub fn is_valid_code(code: &str) -> bool {
        !code.is_empty()
            && code.len() <= Self::MAX_CODE_LEN
            && code.bytes().all(|b| b.is_ascii_uppercase())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Raw units per whole token: `10^precision`.
    pub fn unit(&self) -> i64 {
        10i64.pow(self.precision as u32)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ore_symbol_shape() {
        let ore = Symbol::ore();
        assert_eq!(ore.code(), "ORE");
        assert_eq!(ore.precision(), 4);
        assert_eq!(ore.unit(), 10_000);
        assert_eq!(ore.to_string(), "4,ORE");
    }

    #[test]
    fn valid_codes() {
        for code in ["A", "ORE", "SYS", "ABCDEFG"] {
            assert!(Symbol::is_valid_code(code), "{code}");
        }
    }

    #[test]
    fn invalid_codes() {
        for code in ["", "ore", "Or3", "TOOLONGXX", "A B"] {
            assert!(!Symbol::is_valid_code(code), "{code}");
        }
    }

    #[test]
    fn zero_precision_unit() {
        assert_eq!(Symbol::new("SYS", 0).unit(), 1);
    }

    #[test]
    #[should_panic(expected = "invalid symbol code")]
    fn lowercase_code_panics() {
        Symbol::new("ore", 4);
    }
}
