//! Account name type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account identity on the ledger.
///
/// Names are 1-12 characters drawn from lowercase a-z, the digits 1-5, and
/// `.` — the naming rules of the host chain the original contract ran on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountName(String);

impl AccountName {
    /// Maximum name length.
    pub const MAX_LEN: usize = 12;

    /// Create a new account name from a raw string.
    ///
    /// # Panics
    /// Panics if the string is not a well-formed account name.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(Self::is_valid_name(&s), "invalid account name: {s:?}");
        Self(s)
    }

    /// Whether `name` is a well-formed account name.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= Self::MAX_LEN
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || (b'1'..=b'5').contains(&b) || b == b'.')
    }

    /// Return the raw name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AccountName {
    fn from(s: &str) -> Self {
        Self::new(s.to_owned())
    }
}
