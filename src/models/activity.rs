//! Activity feed model
//!
//! Entries in the dashboard's recent-activity feed.

use serde::{Deserialize, Serialize};

/// What kind of event an activity entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Approved,
    Rejected,
    Submitted,
    Pending,
}

impl ActivityKind {
    /// Single-character marker shown next to the feed entry
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Approved => "✓",
            Self::Rejected => "✗",
            Self::Submitted => "•",
            Self::Pending => "…",
        }
    }
}

/// One entry in the recent-activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Event kind, drives the marker and color
    pub kind: ActivityKind,

    /// Fund request number, e.g. "ABCD1200"
    pub fund_number: String,

    /// Human-readable message, e.g. "has been Approved by John Doe"
    pub message: String,

    /// Relative time label, e.g. "2 min ago"
    pub time: String,
}

impl ActivityEvent {
    pub fn new(
        kind: ActivityKind,
        fund_number: impl Into<String>,
        message: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            fund_number: fund_number.into(),
            message: message.into(),
            time: time.into(),
        }
    }
}
