//! In-memory sample data
//!
//! fundboard ships with static sample records: allocation rows for the
//! create-fund view, and the requests, activity feed, chart series, and stat
//! cards shown on the dashboard. All of it lives for the process lifetime only.

use chrono::NaiveDate;

use crate::models::{
    ActivityEvent, ActivityKind, AllocationRow, Amount, FiscalYear, FundRequest, MonthlyVolume,
    Priority, RequestId, RequestStatus, StatCard,
};
use crate::planner::AllocationMatrix;

/// The pre-populated fund-allocation rows
pub fn allocation_matrix() -> AllocationMatrix {
    AllocationMatrix::with_rows(vec![
        AllocationRow::new("Operations Center", "Equipment Purchase")
            .with_amount(FiscalYear::new(2024), "$15,000.00")
            .with_amount(FiscalYear::new(2025), "$25,000.00")
            .with_amount(FiscalYear::new(2026), "$20,000.00"),
        AllocationRow::new("Marketing Department", "Campaign Budget")
            .with_amount(FiscalYear::new(2024), "$10,000.00")
            .with_amount(FiscalYear::new(2025), "$15,000.00")
            .with_amount(FiscalYear::new(2026), "$12,000.00"),
        AllocationRow::new("Research & Development", "Lab Equipment")
            .with_amount(FiscalYear::new(2024), "$20,000.00")
            .with_amount(FiscalYear::new(2025), "$35,000.00")
            .with_amount(FiscalYear::new(2026), "$28,000.00"),
    ])
}

/// Aggregate statistic cards for the dashboard header row
pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard::new("Total Budget", "$180,000", "+12%"),
        StatCard::new("Pending Requests", "8", "-3%"),
        StatCard::new("Approved This Month", "24", "+8%"),
        StatCard::new("Active Users", "156", "+5%"),
    ]
}

/// Monthly approved/pending/rejected volumes for the bar chart
pub fn monthly_volumes() -> Vec<MonthlyVolume> {
    vec![
        MonthlyVolume::new("Jan", 45000, 12000, 3000),
        MonthlyVolume::new("Feb", 52000, 15000, 2500),
        MonthlyVolume::new("Mar", 48000, 18000, 4000),
        MonthlyVolume::new("Apr", 61000, 22000, 3500),
        MonthlyVolume::new("May", 55000, 16000, 2800),
        MonthlyVolume::new("Jun", 67000, 14000, 3200),
        MonthlyVolume::new("Jul", 67000, 14000, 4500),
        MonthlyVolume::new("Aug", 67000, 14000, 3200),
        MonthlyVolume::new("Sep", 67000, 14000, 5000),
    ]
}

/// Recent fund requests for the dashboard table
pub fn recent_requests() -> Vec<FundRequest> {
    vec![
        request(
            "Equipment Purchase",
            "Operations",
            "$25,000",
            RequestStatus::Approved,
            2026,
            2,
            1,
            Priority::High,
        ),
        request(
            "Marketing Campaign",
            "Marketing",
            "$15,000",
            RequestStatus::Pending,
            2026,
            1,
            28,
            Priority::Medium,
        ),
        request(
            "Lab Equipment",
            "R&D",
            "$35,000",
            RequestStatus::Reviewing,
            2026,
            1,
            25,
            Priority::High,
        ),
        request(
            "Office Supplies",
            "Admin",
            "$2,500",
            RequestStatus::Approved,
            2026,
            1,
            22,
            Priority::Low,
        ),
        request(
            "Software Licenses",
            "IT",
            "$12,000",
            RequestStatus::Rejected,
            2026,
            1,
            20,
            Priority::Medium,
        ),
    ]
}

/// Recent activity feed entries
pub fn recent_activity() -> Vec<ActivityEvent> {
    vec![
        ActivityEvent::new(
            ActivityKind::Approved,
            "ABCD1200",
            "has been Approved by John Doe",
            "2 min ago",
        ),
        ActivityEvent::new(ActivityKind::Rejected, "ABCD123", "has been Rejected", "5 min ago"),
        ActivityEvent::new(
            ActivityKind::Submitted,
            "ABCD1205",
            "submitted for review by Sarah Smith",
            "15 min ago",
        ),
        ActivityEvent::new(
            ActivityKind::Approved,
            "ABCD1198",
            "has been Approved by Mike Johnson",
            "1 hour ago",
        ),
        ActivityEvent::new(
            ActivityKind::Pending,
            "ABCD1203",
            "is under review",
            "2 hours ago",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn request(
    title: &str,
    department: &str,
    amount: &str,
    status: RequestStatus,
    year: i32,
    month: u32,
    day: u32,
    priority: Priority,
) -> FundRequest {
    FundRequest {
        id: RequestId::new(),
        title: title.to_string(),
        department: department.to_string(),
        amount: Amount::from(amount),
        status,
        // Sample dates are always valid calendar dates
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_allocation_rows_cover_sample_years() {
        let matrix = allocation_matrix();
        assert_eq!(matrix.len(), 3);
        for row in matrix.rows() {
            for year in [2024, 2025, 2026] {
                assert!(row.amount_for(FiscalYear::new(year)).is_some());
            }
        }
    }

    #[test]
    fn test_allocation_ids_unique() {
        let matrix = allocation_matrix();
        let ids: HashSet<_> = matrix.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids.len(), matrix.len());
    }

    #[test]
    fn test_dashboard_sample_sizes() {
        assert_eq!(stat_cards().len(), 4);
        assert_eq!(monthly_volumes().len(), 9);
        assert_eq!(recent_requests().len(), 5);
        assert_eq!(recent_activity().len(), 5);
    }

    #[test]
    fn test_request_dates_valid() {
        for req in recent_requests() {
            assert!(req.date > NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        }
    }
}
