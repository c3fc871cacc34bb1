//! Budget year ledger
//!
//! The ordered list of fiscal years in the budget table. Years are only ever
//! appended at the tail (first entry: current calendar year; later entries: the
//! successor of the tail) and only ever removed from the tail, so labels stay
//! unique and strictly increasing. Each entry carries the edit/commit lifecycle
//! from [`BudgetYear`].

use crate::models::{BudgetYear, FiscalYear};

/// Ordered, append/remove-at-tail list of budget years
#[derive(Debug, Clone, Default)]
pub struct BudgetYearLedger {
    entries: Vec<BudgetYear>,
}

impl BudgetYearLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next fiscal year in edit mode with an empty draft
    ///
    /// The first entry is the current calendar year; every later entry is the
    /// numeric successor of the tail. Always succeeds.
    pub fn append_year(&mut self) {
        let year = match self.entries.last() {
            Some(entry) => entry.year.succ(),
            None => FiscalYear::current(),
        };
        self.entries.push(BudgetYear::new(year));
    }

    /// Store `text` verbatim as the draft of the entry at `index`
    ///
    /// Silent no-op when `index` is out of range or the entry is committed.
    pub fn update_draft(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.set_draft(text);
        }
    }

    /// Commit the entry at `index` out of edit mode
    ///
    /// A non-empty draft becomes the committed amount; an empty draft commits as
    /// the canonical zero placeholder. Silent no-op when `index` is out of range
    /// or the entry is already committed. Both the explicit commit action and
    /// the confirm keypress route here, so the resulting state is identical.
    pub fn commit_draft(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.commit();
        }
    }

    /// Remove the most recently added year and return its label
    ///
    /// Returns `None` on an empty ledger. The caller is responsible for
    /// cascading the returned year into dependent state. This is the only
    /// removal operation; there is no remove-by-index.
    pub fn remove_latest_year(&mut self) -> Option<FiscalYear> {
        self.entries.pop().map(|entry| entry.year)
    }

    /// The entry at `index`, if present
    pub fn get(&self, index: usize) -> Option<&BudgetYear> {
        self.entries.get(index)
    }

    /// Iterate over the entries in ledger order
    pub fn entries(&self) -> impl Iterator<Item = &BudgetYear> {
        self.entries.iter()
    }

    /// The year labels in ledger order
    pub fn years(&self) -> impl Iterator<Item = FiscalYear> + '_ {
        self.entries.iter().map(|entry| entry.year)
    }

    /// Number of years in the ledger
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no years
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
