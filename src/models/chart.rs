//! Chart series model
//!
//! Monthly request-volume figures backing the dashboard bar chart.

use serde::{Deserialize, Serialize};

/// Approved/pending/rejected dollar volume for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    /// Month label, e.g. "Jan"
    pub month: String,

    /// Approved volume in whole dollars
    pub approved: u64,

    /// Pending volume in whole dollars
    pub pending: u64,

    /// Rejected volume in whole dollars
    pub rejected: u64,
}

impl MonthlyVolume {
    pub fn new(month: impl Into<String>, approved: u64, pending: u64, rejected: u64) -> Self {
        Self {
            month: month.into(),
            approved,
            pending,
            rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let volume = MonthlyVolume::new("Jan", 45000, 12000, 3000);
        assert_eq!(volume.month, "Jan");
        assert_eq!(volume.approved, 45000);
    }
}
