//! Amount type for monetary display values
//!
//! Amounts are opaque formatted strings carried verbatim from input to display.
//! There is no parsing, validation, or arithmetic: whatever text was entered is
//! what gets shown. Numeric currency handling (along the lines of a cents-based
//! integer type) is a deliberate future extension point, not current behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical display value for a committed-but-empty budget amount
const ZERO_PLACEHOLDER: &str = "$0.00";

/// An opaque, display-only monetary amount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    /// Create an amount from the text the user entered, verbatim
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The canonical zero placeholder, used when an empty draft is committed
    pub fn zero_placeholder() -> Self {
        Self(ZERO_PLACEHOLDER.to_string())
    }

    /// Get the display text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Amount {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_is_opaque() {
        // Garbage in, garbage displayed
        let amount = Amount::new("not a number");
        assert_eq!(amount.to_string(), "not a number");
    }

    #[test]
    fn test_zero_placeholder() {
        assert_eq!(Amount::zero_placeholder().as_str(), "$0.00");
    }

    #[test]
    fn test_formatted_value_preserved() {
        let amount = Amount::from("$15,000.00");
        assert_eq!(amount.as_str(), "$15,000.00");
    }

    #[test]
    fn test_serde_transparent() {
        let amount = Amount::from("$500");
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"$500\"");
    }
}
