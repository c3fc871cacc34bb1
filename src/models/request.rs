//! Fund request model
//!
//! Represents submitted fund requests as shown on the dashboard: the
//! recent-requests table rows and the aggregate statistic cards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::RequestId;

/// Review status of a fund request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Approved and funded
    Approved,
    /// Awaiting review
    Pending,
    /// Under active review
    Reviewing,
    /// Rejected
    Rejected,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Pending => write!(f, "pending"),
            Self::Reviewing => write!(f, "reviewing"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Priority of a fund request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A submitted fund request as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRequest {
    /// Stable unique identifier
    pub id: RequestId,

    /// Short request title
    pub title: String,

    /// Requesting department
    pub department: String,

    /// Requested amount (display-only)
    pub amount: Amount,

    /// Current review status
    pub status: RequestStatus,

    /// Submission date
    pub date: NaiveDate,

    /// Request priority
    pub priority: Priority,
}

/// An aggregate statistic card shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    /// Card title, e.g. "Total Budget"
    pub title: String,
    /// Headline value, e.g. "$180,000"
    pub value: String,
    /// Period-over-period change, e.g. "+12%"
    pub change: String,
}

impl StatCard {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
        }
    }
}
