//! Fiscal year representation
//!
//! A fiscal year is a 4-digit calendar year label. The ledger only ever creates
//! years through `current()` (first entry) and `succ()` (every later entry), so
//! labels are unique and strictly increasing by construction.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A 4-digit fiscal year label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiscalYear(u16);

impl FiscalYear {
    /// Create a fiscal year from a calendar year number
    pub const fn new(year: u16) -> Self {
        Self(year)
    }

    /// The current calendar year, as observed at call time
    pub fn current() -> Self {
        Self(chrono::Local::now().year() as u16)
    }

    /// The numeric successor of this year
    pub const fn succ(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the year number
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for FiscalYear {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
