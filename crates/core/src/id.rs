//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Identifier of an item.
///
/// Positive integers handed out by the store in creation order. Serialized
/// as a bare integer (and as a string key inside JSON maps).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The first identifier a fresh store assigns.
    pub const FIRST: ItemId = ItemId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The identifier allocated right after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Parse failure for [`ItemId`]: the text is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid item id: {0}")]
pub struct ParseItemIdError(pub String);

impl FromStr for ItemId {
    type Err = ParseItemIdError;

    /// Anything shaped like an integer (optional sign, ASCII digits) parses.
    /// Zero, negatives and values past `u64::MAX` can never have been
    /// allocated, so they map to an id that simply won't be found.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseItemIdError(s.to_string()));
        }

        if s.starts_with('-') {
            return Ok(Self(0));
        }
        Ok(Self(digits.parse::<u64>().unwrap_or(0)))
    }
}
