//! Fund request display formatting
//!
//! Renders fund requests as a terminal table for the `requests` subcommand.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::FundRequest;

#[derive(Tabled)]
struct RequestRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Priority")]
    priority: String,
}

impl RequestRow {
    fn from_request(request: &FundRequest, date_format: &str) -> Self {
        Self {
            title: request.title.clone(),
            department: request.department.clone(),
            amount: request.amount.to_string(),
            status: request.status.to_string(),
            date: request.date.format(date_format).to_string(),
            priority: request.priority.to_string(),
        }
    }
}

/// Format a list of fund requests as a table
pub fn format_request_table(requests: &[FundRequest], date_format: &str) -> String {
    if requests.is_empty() {
        return "No fund requests found.\n".to_string();
    }

    let rows: Vec<RequestRow> = requests
        .iter()
        .map(|request| RequestRow::from_request(request, date_format))
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}
