//! Allocation row model
//!
//! One row of the fund-allocation table: an organizational fund center and
//! commitment item, with a sparse per-year amount mapping. Year columns come
//! from the budget ledger; a row may lack an amount for a ledger year (rendered
//! as a placeholder) but never holds a year the ledger has removed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::amount::Amount;
use super::ids::AllocationId;
use super::year::FiscalYear;

/// A single row in the fund-allocation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Stable unique identifier, assigned at creation and never reused
    pub id: AllocationId,

    /// Organizational unit requesting/holding the budget
    pub fund_center: String,

    /// Budget line-item category within the fund center
    pub commitment_item: String,

    /// Sparse mapping from fiscal year to allocated amount
    pub amounts: BTreeMap<FiscalYear, Amount>,
}

impl AllocationRow {
    /// Create a new row with no per-year amounts
    pub fn new(fund_center: impl Into<String>, commitment_item: impl Into<String>) -> Self {
        Self {
            id: AllocationId::new(),
            fund_center: fund_center.into(),
            commitment_item: commitment_item.into(),
            amounts: BTreeMap::new(),
        }
    }

    /// Set the amount allocated for a year (builder style, used by seeding)
    pub fn with_amount(mut self, year: FiscalYear, amount: impl Into<Amount>) -> Self {
        self.amounts.insert(year, amount.into());
        self
    }

    /// The amount allocated for `year`, if any
    pub fn amount_for(&self, year: FiscalYear) -> Option<&Amount> {
        self.amounts.get(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_has_no_amounts() {
        let row = AllocationRow::new("Operations Center", "Equipment Purchase");
        assert_eq!(row.fund_center, "Operations Center");
        assert!(row.amounts.is_empty());
        assert_eq!(row.amount_for(FiscalYear::new(2024)), None);
    }

    #[test]
    fn test_with_amount() {
        let row = AllocationRow::new("Marketing Department", "Campaign Budget")
            .with_amount(FiscalYear::new(2024), "$10,000.00")
            .with_amount(FiscalYear::new(2025), "$15,000.00");

        assert_eq!(
            row.amount_for(FiscalYear::new(2024)),
            Some(&Amount::from("$10,000.00"))
        );
        assert_eq!(row.amount_for(FiscalYear::new(2026)), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = AllocationRow::new("A", "a");
        let b = AllocationRow::new("B", "b");
        assert_ne!(a.id, b.id);
    }
}
