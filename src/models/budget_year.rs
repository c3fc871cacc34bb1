//! Budget year entry model
//!
//! One row of the budget table: a fiscal year plus its amount, with an explicit
//! edit/commit lifecycle. An entry is created in edit mode holding draft text and
//! transitions exactly once to committed; there is no way back to edit mode.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::year::FiscalYear;

/// Lifecycle state of a budget year entry
///
/// Encodes the invariant that an entry either has in-progress draft text or a
/// committed amount, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum EntryState {
    /// In edit mode; `draft` holds the text typed so far
    Editing { draft: String },
    /// Committed with a final display amount
    Committed { amount: Amount },
}

/// A single fiscal year row in the budget table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetYear {
    /// The fiscal year this entry covers
    pub year: FiscalYear,

    /// Edit/commit lifecycle state
    state: EntryState,
}

impl BudgetYear {
    /// Create a new entry in edit mode with an empty draft
    pub fn new(year: FiscalYear) -> Self {
        Self {
            year,
            state: EntryState::Editing {
                draft: String::new(),
            },
        }
    }

    /// Whether this entry is still in edit mode
    pub fn is_editing(&self) -> bool {
        matches!(self.state, EntryState::Editing { .. })
    }

    /// The in-progress draft text, if editing
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EntryState::Editing { draft } => Some(draft),
            EntryState::Committed { .. } => None,
        }
    }

    /// The committed amount, once out of edit mode
    pub fn committed_amount(&self) -> Option<&Amount> {
        match &self.state {
            EntryState::Editing { .. } => None,
            EntryState::Committed { amount } => Some(amount),
        }
    }

    /// Replace the draft text verbatim; ignored once committed
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EntryState::Editing { draft } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Leave edit mode. A non-empty draft becomes the committed amount; an empty
    /// draft commits as the canonical zero placeholder. Ignored once committed.
    pub fn commit(&mut self) {
        if let EntryState::Editing { draft } = &self.state {
            let amount = if draft.is_empty() {
                Amount::zero_placeholder()
            } else {
                Amount::new(draft.clone())
            };
            self.state = EntryState::Committed { amount };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_editing_with_empty_draft() {
        let entry = BudgetYear::new(FiscalYear::new(2024));
        assert!(entry.is_editing());
        assert_eq!(entry.draft(), Some(""));
        assert_eq!(entry.committed_amount(), None);
    }

    #[test]
    fn test_draft_then_commit() {
        let mut entry = BudgetYear::new(FiscalYear::new(2024));
        entry.set_draft("$500");
        entry.commit();

        assert!(!entry.is_editing());
        assert_eq!(entry.draft(), None);
        assert_eq!(entry.committed_amount(), Some(&Amount::from("$500")));
    }

    #[test]
    fn test_commit_empty_draft_yields_zero_placeholder() {
        let mut entry = BudgetYear::new(FiscalYear::new(2024));
        entry.commit();

        assert_eq!(
            entry.committed_amount(),
            Some(&Amount::zero_placeholder())
        );
    }

    #[test]
    fn test_set_draft_ignored_after_commit() {
        let mut entry = BudgetYear::new(FiscalYear::new(2024));
        entry.set_draft("$100");
        entry.commit();
        entry.set_draft("$999");

        assert_eq!(entry.committed_amount(), Some(&Amount::from("$100")));
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut entry = BudgetYear::new(FiscalYear::new(2024));
        entry.set_draft("$250");
        entry.commit();
        entry.commit();

        assert_eq!(entry.committed_amount(), Some(&Amount::from("$250")));
    }
}
