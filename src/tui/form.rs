//! Fund request form state
//!
//! Field values and focus for the create-fund form. All values are opaque
//! strings; nothing is validated or submitted anywhere (there is no backend).

use super::widgets::{SelectField, TextInput};

pub const TRANSFER_TYPES: &[&str] = &[
    "Internal Transfer",
    "External Transfer",
    "Interdepartmental",
    "Emergency Transfer",
];

pub const FUND_CENTERS: &[&str] = &[
    "Operations Center",
    "Marketing Department",
    "Research & Development",
    "Human Resources",
    "Finance Department",
];

pub const FUND_TYPES: &[&str] = &[
    "Operational Funds",
    "Capital Expenditure",
    "Project Funds",
    "Contingency Fund",
    "Maintenance Budget",
];

pub const REQUESTERS: &[&str] = &[
    "John Doe - Finance Manager",
    "Sarah Smith - Operations Director",
    "Mike Johnson - Project Lead",
    "Lisa Brown - Department Head",
    "David Wilson - Budget Analyst",
];

pub const CURRENCIES: &[&str] = &[
    "USD - US Dollar",
    "EUR - Euro",
    "GBP - British Pound",
    "JPY - Japanese Yen",
    "CAD - Canadian Dollar",
];

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FundField {
    #[default]
    TransferType,
    Description,
    FundCenter,
    FundType,
    RequestedBy,
    Currency,
    Explanation,
}

impl FundField {
    /// Fields in display order
    pub const ALL: [FundField; 7] = [
        Self::TransferType,
        Self::Description,
        Self::FundCenter,
        Self::FundType,
        Self::RequestedBy,
        Self::Currency,
        Self::Explanation,
    ];

    /// Display label for the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::TransferType => "Transfer Type",
            Self::Description => "Description",
            Self::FundCenter => "Fund Center",
            Self::FundType => "Fund Type",
            Self::RequestedBy => "Requested By",
            Self::Currency => "Currency",
            Self::Explanation => "Explanation",
        }
    }

    /// Whether this field takes free text (vs. cycling fixed options)
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Description | Self::Explanation)
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// The next field in display order, wrapping
    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The previous field in display order, wrapping
    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State of the create-fund form
#[derive(Debug, Clone)]
pub struct FundForm {
    pub transfer_type: SelectField,
    pub description: TextInput,
    pub fund_center: SelectField,
    pub fund_type: SelectField,
    pub requested_by: SelectField,
    pub currency: SelectField,
    pub explanation: TextInput,
    pub focus: FundField,
}

impl FundForm {
    pub fn new() -> Self {
        Self {
            transfer_type: SelectField::new(TRANSFER_TYPES, "Choose transfer type..."),
            description: TextInput::new().placeholder("Enter request description..."),
            fund_center: SelectField::new(FUND_CENTERS, "Select fund center..."),
            fund_type: SelectField::new(FUND_TYPES, "Choose fund type..."),
            requested_by: SelectField::new(REQUESTERS, "Select requesting user..."),
            currency: SelectField::new(CURRENCIES, "Select currency..."),
            explanation: TextInput::new()
                .placeholder("Provide additional explanation or justification..."),
            focus: FundField::default(),
        }
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The focused select field, if focus is on one
    pub fn focused_select(&mut self) -> Option<&mut SelectField> {
        match self.focus {
            FundField::TransferType => Some(&mut self.transfer_type),
            FundField::FundCenter => Some(&mut self.fund_center),
            FundField::FundType => Some(&mut self.fund_type),
            FundField::RequestedBy => Some(&mut self.requested_by),
            FundField::Currency => Some(&mut self.currency),
            FundField::Description | FundField::Explanation => None,
        }
    }

    /// The focused text input, if focus is on one
    pub fn focused_text(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FundField::Description => Some(&mut self.description),
            FundField::Explanation => Some(&mut self.explanation),
            _ => None,
        }
    }
}

impl Default for FundForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = FundForm::new();
        for _ in 0..FundField::ALL.len() {
            form.focus_next();
        }
        assert_eq!(form.focus, FundField::TransferType);
    }

    #[test]
    fn test_focus_prev_wraps() {
        let mut form = FundForm::new();
        form.focus_prev();
        assert_eq!(form.focus, FundField::Explanation);
    }

    #[test]
    fn test_focused_select_matches_focus() {
        let mut form = FundForm::new();
        assert!(form.focused_select().is_some());
        assert!(form.focused_text().is_none());

        form.focus = FundField::Description;
        assert!(form.focused_select().is_none());
        assert!(form.focused_text().is_some());
    }

    #[test]
    fn test_select_field_cycling() {
        let mut form = FundForm::new();
        form.transfer_type.next();
        assert_eq!(form.transfer_type.value(), Some("Internal Transfer"));
    }
}
