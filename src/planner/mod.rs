//! Budget planner
//!
//! The planner coordinates the two state owners of the create-fund view: the
//! budget year ledger and the allocation matrix. The one cross-component
//! mutation (a ledger tail removal cascading into every allocation row) runs
//! synchronously inside [`FundPlanner::remove_latest_year`], so the ledger and
//! matrix are never observable out of sync.

pub mod ledger;
pub mod matrix;

pub use ledger::BudgetYearLedger;
pub use matrix::{AllocationMatrix, SelectionSummary};

use crate::models::{AllocationId, FiscalYear};

/// Coordinator owning the budget ledger and the allocation matrix
#[derive(Debug, Clone, Default)]
pub struct FundPlanner {
    pub ledger: BudgetYearLedger,
    pub matrix: AllocationMatrix,
}

impl FundPlanner {
    /// Create a planner with an empty ledger and matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner with an empty ledger and the given matrix
    pub fn with_matrix(matrix: AllocationMatrix) -> Self {
        Self {
            ledger: BudgetYearLedger::new(),
            matrix,
        }
    }

    /// Append the next budget year in edit mode
    pub fn append_year(&mut self) {
        self.ledger.append_year();
    }

    /// Update the draft text of the budget entry at `index`
    pub fn update_draft(&mut self, index: usize, text: impl Into<String>) {
        self.ledger.update_draft(index, text);
    }

    /// Commit the budget entry at `index`
    pub fn commit_draft(&mut self, index: usize) {
        self.ledger.commit_draft(index);
    }

    /// Remove the most recent budget year and cascade into the matrix
    ///
    /// The cascade runs before this returns; no caller observes an allocation
    /// row still holding the removed year.
    pub fn remove_latest_year(&mut self) -> Option<FiscalYear> {
        let removed = self.ledger.remove_latest_year()?;
        self.matrix.on_year_removed(removed);
        Some(removed)
    }

    /// Flip selection of an allocation row
    pub fn toggle_row(&mut self, id: AllocationId) {
        self.matrix.toggle_row(id);
    }

    /// Select all allocation rows, or clear the selection if all are selected
    pub fn toggle_all(&mut self) {
        self.matrix.toggle_all();
    }

    /// The allocation table's year columns, in ledger order
    pub fn columns(&self) -> Vec<FiscalYear> {
        self.ledger.years().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllocationRow, Amount};

    #[test]
    fn test_remove_latest_cascades_into_matrix() {
        // Scenario C, built through the public operations
        let mut planner = FundPlanner::with_matrix(AllocationMatrix::new());
        planner.append_year();
        let first = planner.ledger.get(0).unwrap().year;
        planner.commit_draft(0);
        planner.append_year();
        let second = planner.ledger.get(1).unwrap().year;
        planner.commit_draft(1);

        planner.matrix.push_row(
            AllocationRow::new("Operations Center", "Equipment Purchase")
                .with_amount(first, "$10")
                .with_amount(second, "$20"),
        );

        let removed = planner.remove_latest_year();

        assert_eq!(removed, Some(second));
        assert_eq!(planner.columns(), vec![first]);
        let row = &planner.matrix.rows()[0];
        assert_eq!(row.amount_for(second), None);
        assert_eq!(row.amount_for(first), Some(&Amount::from("$10")));
    }

    #[test]
    fn test_remove_latest_on_empty_ledger() {
        let mut planner = FundPlanner::new();
        planner.matrix.push_row(
            AllocationRow::new("Marketing Department", "Campaign Budget")
                .with_amount(FiscalYear::new(2024), "$5"),
        );

        assert_eq!(planner.remove_latest_year(), None);
        // Matrix untouched when there was nothing to remove
        assert_eq!(
            planner.matrix.rows()[0].amount_for(FiscalYear::new(2024)),
            Some(&Amount::from("$5"))
        );
    }

    #[test]
    fn test_appended_year_is_placeholder_column() {
        // No populate-on-add: a new year shows up as a column with no amounts
        let mut planner = FundPlanner::with_matrix(AllocationMatrix::with_rows(vec![
            AllocationRow::new("Research & Development", "Lab Equipment"),
        ]));
        planner.append_year();

        let year = planner.columns()[0];
        assert_eq!(planner.matrix.rows()[0].amount_for(year), None);
    }

    #[test]
    fn test_columns_follow_ledger_order() {
        let mut planner = FundPlanner::new();
        planner.append_year();
        planner.append_year();
        planner.append_year();

        let columns = planner.columns();
        assert_eq!(columns.len(), 3);
        assert!(columns.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
