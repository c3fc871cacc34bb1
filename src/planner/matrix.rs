//! Allocation matrix
//!
//! Holds the fund-allocation rows and their selection state. Year columns are
//! not stored here; they are derived from the budget ledger at render time.
//! The matrix never mutates the ledger; the only ledger-driven mutation is the
//! cascade in [`AllocationMatrix::on_year_removed`], which keeps every row's
//! year mapping consistent with the ledger after a tail removal.

use std::collections::HashSet;

use crate::models::{AllocationId, AllocationRow, FiscalYear};

/// How much of the row set is currently selected, for the header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSummary {
    None,
    Partial,
    All,
}

/// The fund-allocation table: rows plus selection state
#[derive(Debug, Clone, Default)]
pub struct AllocationMatrix {
    rows: Vec<AllocationRow>,
    selected: HashSet<AllocationId>,
}

impl AllocationMatrix {
    /// Create an empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matrix pre-populated with `rows`, nothing selected
    pub fn with_rows(rows: Vec<AllocationRow>) -> Self {
        Self {
            rows,
            selected: HashSet::new(),
        }
    }

    /// Append a row. There is no UI action for this; seeding uses it.
    pub fn push_row(&mut self, row: AllocationRow) {
        self.rows.push(row);
    }

    /// Flip selection membership for `id`
    ///
    /// Ids not present in the current row list are ignored, so the selection
    /// set never holds stray entries.
    pub fn toggle_row(&mut self, id: AllocationId) {
        if !self.rows.iter().any(|row| row.id == id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select every row, or clear the selection if every row is selected
    ///
    /// Always evaluated against the current row list, so rows added or removed
    /// between toggles are accounted for.
    pub fn toggle_all(&mut self) {
        if self.rows.iter().all(|row| self.selected.contains(&row.id)) {
            self.selected.clear();
        } else {
            self.selected = self.rows.iter().map(|row| row.id).collect();
        }
    }

    /// Cascade handler for a ledger year removal
    ///
    /// Deletes `year` from every row's mapping; rows without that key are left
    /// untouched, and no other key is removed. The whole sweep happens inside
    /// this one call, so no caller can observe a row still holding the year.
    pub fn on_year_removed(&mut self, year: FiscalYear) {
        for row in &mut self.rows {
            row.amounts.remove(&year);
        }
    }

    /// Whether the row with `id` is selected
    pub fn is_selected(&self, id: AllocationId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected rows
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selection state relative to the full row set
    pub fn selection_summary(&self) -> SelectionSummary {
        if self.selected.is_empty() {
            SelectionSummary::None
        } else if self.rows.iter().all(|row| self.selected.contains(&row.id)) {
            SelectionSummary::All
        } else {
            SelectionSummary::Partial
        }
    }

    /// The rows in table order
    pub fn rows(&self) -> &[AllocationRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn three_rows() -> AllocationMatrix {
        AllocationMatrix::with_rows(vec![
            AllocationRow::new("Operations Center", "Equipment Purchase"),
            AllocationRow::new("Marketing Department", "Campaign Budget"),
            AllocationRow::new("Research & Development", "Lab Equipment"),
        ])
    }

    #[test]
    fn test_toggle_row_flips_membership() {
        let mut matrix = three_rows();
        let id = matrix.rows()[0].id;

        matrix.toggle_row(id);
        assert!(matrix.is_selected(id));

        matrix.toggle_row(id);
        assert!(!matrix.is_selected(id));
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let mut matrix = three_rows();
        matrix.toggle_row(AllocationId::new());

        assert_eq!(matrix.selected_count(), 0);
    }

    #[test]
    fn test_toggle_all_selects_then_clears() {
        // Scenario E and P6: toggle-all is involutive over a stable row set
        let mut matrix = three_rows();

        matrix.toggle_all();
        assert_eq!(matrix.selected_count(), 3);
        assert_eq!(matrix.selection_summary(), SelectionSummary::All);

        matrix.toggle_all();
        assert_eq!(matrix.selected_count(), 0);
        assert_eq!(matrix.selection_summary(), SelectionSummary::None);
    }

    #[test]
    fn test_toggle_all_with_partial_selection_selects_all() {
        let mut matrix = three_rows();
        let id = matrix.rows()[1].id;
        matrix.toggle_row(id);
        assert_eq!(matrix.selection_summary(), SelectionSummary::Partial);

        matrix.toggle_all();
        assert_eq!(matrix.selected_count(), 3);
    }

    #[test]
    fn test_toggle_all_recomputes_after_row_added() {
        // The full-set check runs against the live row list, not a cached count
        let mut matrix = three_rows();
        matrix.toggle_all();
        assert_eq!(matrix.selected_count(), 3);

        matrix.push_row(AllocationRow::new("Human Resources", "Training"));

        // Three of four selected now, so toggle-all selects the fourth too
        matrix.toggle_all();
        assert_eq!(matrix.selected_count(), 4);
    }

    #[test]
    fn test_cascade_removes_only_named_year() {
        // P3 and P4 together: the year is gone everywhere, nothing else is
        let mut matrix = AllocationMatrix::with_rows(vec![
            AllocationRow::new("Operations Center", "Equipment Purchase")
                .with_amount(FiscalYear::new(2024), "$10")
                .with_amount(FiscalYear::new(2025), "$20"),
            AllocationRow::new("Marketing Department", "Campaign Budget")
                .with_amount(FiscalYear::new(2024), "$5"),
        ]);

        matrix.on_year_removed(FiscalYear::new(2025));

        for row in matrix.rows() {
            assert_eq!(row.amount_for(FiscalYear::new(2025)), None);
        }
        assert_eq!(
            matrix.rows()[0].amount_for(FiscalYear::new(2024)),
            Some(&Amount::from("$10"))
        );
        assert_eq!(
            matrix.rows()[1].amount_for(FiscalYear::new(2024)),
            Some(&Amount::from("$5"))
        );
    }

    #[test]
    fn test_cascade_on_absent_year_is_noop() {
        let mut matrix = AllocationMatrix::with_rows(vec![AllocationRow::new(
            "Operations Center",
            "Equipment Purchase",
        )
        .with_amount(FiscalYear::new(2024), "$10")]);

        matrix.on_year_removed(FiscalYear::new(2030));

        assert_eq!(
            matrix.rows()[0].amount_for(FiscalYear::new(2024)),
            Some(&Amount::from("$10"))
        );
    }

    #[test]
    fn test_selection_survives_cascade() {
        let mut matrix = three_rows();
        let id = matrix.rows()[0].id;
        matrix.toggle_row(id);

        matrix.on_year_removed(FiscalYear::new(2024));

        assert!(matrix.is_selected(id));
    }
}
