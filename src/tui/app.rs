//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the budget planner, the dashboard sample records, the form, and the
//! per-view focus/selection bookkeeping. There is exactly one writer (the
//! event loop), and every mutation runs to completion inside its handler.

use crate::config::settings::{Settings, StartView};
use crate::models::{ActivityEvent, FundRequest, MonthlyVolume, StatCard};
use crate::planner::FundPlanner;
use crate::sample;

use super::form::FundForm;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    CreateFund,
}

/// Which section of the create-fund view has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateFundSection {
    #[default]
    Form,
    BudgetTable,
    Allocation,
}

impl CreateFundSection {
    /// The next section in Tab order
    pub fn next(&self) -> Self {
        match self {
            Self::Form => Self::BudgetTable,
            Self::BudgetTable => Self::Allocation,
            Self::Allocation => Self::Form,
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Main application state
pub struct App {
    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Budget planner: year ledger + allocation matrix
    pub planner: FundPlanner,

    /// Dashboard statistic cards
    pub stats: Vec<StatCard>,

    /// Dashboard chart series
    pub volumes: Vec<MonthlyVolume>,

    /// Dashboard recent requests
    pub requests: Vec<FundRequest>,

    /// Dashboard activity feed
    pub activity: Vec<ActivityEvent>,

    /// Selected row in the recent-requests table
    pub selected_request_index: usize,

    /// Focused section of the create-fund view
    pub section: CreateFundSection,

    /// Fund request form state
    pub form: FundForm,

    /// Current input mode (form text editing)
    pub input_mode: InputMode,

    /// Selected row in the budget year table
    pub selected_year_index: usize,

    /// Selected row in the allocation table
    pub selected_alloc_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance seeded with the sample data
    pub fn new(settings: Settings) -> Self {
        let active_view = match settings.start_view {
            StartView::Dashboard => ActiveView::Dashboard,
            StartView::CreateFund => ActiveView::CreateFund,
        };

        Self {
            settings,
            should_quit: false,
            active_view,
            planner: FundPlanner::with_matrix(sample::allocation_matrix()),
            stats: sample::stat_cards(),
            volumes: sample::monthly_volumes(),
            requests: sample::recent_requests(),
            activity: sample::recent_activity(),
            selected_request_index: 0,
            section: CreateFundSection::default(),
            form: FundForm::new(),
            input_mode: InputMode::default(),
            selected_year_index: 0,
            selected_alloc_index: 0,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.input_mode = InputMode::Normal;
        self.clear_status();
    }

    /// Cycle focus through the create-fund sections
    pub fn next_section(&mut self) {
        self.section = self.section.next();
        self.input_mode = InputMode::Normal;
    }

    /// Whether the selected budget entry is in edit mode
    pub fn selected_year_editing(&self) -> bool {
        self.planner
            .ledger
            .get(self.selected_year_index)
            .map(|entry| entry.is_editing())
            .unwrap_or(false)
    }

    /// Clamp the budget selection to the current ledger length
    pub fn clamp_year_selection(&mut self) {
        let len = self.planner.ledger.len();
        if len == 0 {
            self.selected_year_index = 0;
        } else if self.selected_year_index >= len {
            self.selected_year_index = len - 1;
        }
    }

    /// Move a selection index up
    pub fn move_up(index: &mut usize) {
        if *index > 0 {
            *index -= 1;
        }
    }

    /// Move a selection index down, bounded by `max`
    pub fn move_down(index: &mut usize, max: usize) {
        if *index + 1 < max {
            *index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Settings::default())
    }

    #[test]
    fn test_new_app_seeded_with_samples() {
        let app = app();
        assert_eq!(app.active_view, ActiveView::Dashboard);
        assert_eq!(app.planner.matrix.len(), 3);
        assert_eq!(app.requests.len(), 5);
        assert!(app.planner.ledger.is_empty());
    }

    #[test]
    fn test_start_view_setting_respected() {
        let mut settings = Settings::default();
        settings.start_view = StartView::CreateFund;
        let app = App::new(settings);
        assert_eq!(app.active_view, ActiveView::CreateFund);
    }

    #[test]
    fn test_section_cycle() {
        let mut app = app();
        app.next_section();
        assert_eq!(app.section, CreateFundSection::BudgetTable);
        app.next_section();
        assert_eq!(app.section, CreateFundSection::Allocation);
        app.next_section();
        assert_eq!(app.section, CreateFundSection::Form);
    }

    #[test]
    fn test_clamp_year_selection_after_removal() {
        let mut app = app();
        app.planner.append_year();
        app.planner.append_year();
        app.selected_year_index = 1;

        app.planner.remove_latest_year();
        app.clamp_year_selection();
        assert_eq!(app.selected_year_index, 0);

        app.planner.remove_latest_year();
        app.clamp_year_selection();
        assert_eq!(app.selected_year_index, 0);
    }

    #[test]
    fn test_move_bounds() {
        let mut index = 0usize;
        App::move_up(&mut index);
        assert_eq!(index, 0);

        App::move_down(&mut index, 3);
        App::move_down(&mut index, 3);
        App::move_down(&mut index, 3);
        assert_eq!(index, 2);
    }
}
