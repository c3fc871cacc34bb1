//! Layout definitions for the TUI
//!
//! Defines the region structure of each view: header tabs, main content,
//! status bar, and the per-view splits.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    /// Header line with title and view tabs
    pub header: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the dashboard view
pub struct DashboardLayout {
    /// Statistic cards row
    pub stats: Rect,
    /// Monthly volume bar chart
    pub chart: Rect,
    /// Recent activity feed
    pub activity: Rect,
    /// Recent requests table
    pub requests: Rect,
}

impl DashboardLayout {
    /// Calculate dashboard layout
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),      // Stat cards
                Constraint::Percentage(45), // Chart + activity
                Constraint::Min(7),         // Requests table
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(62), // Chart
                Constraint::Percentage(38), // Activity feed
            ])
            .split(rows[1]);

        Self {
            stats: rows[0],
            chart: middle[0],
            activity: middle[1],
            requests: rows[2],
        }
    }
}

/// Layout for the create-fund view
pub struct CreateFundLayout {
    /// Fund request form
    pub form: Rect,
    /// Budget year table
    pub budget: Rect,
    /// Fund allocation table
    pub allocation: Rect,
}

impl CreateFundLayout {
    /// Calculate create-fund layout
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(55), // Form + budget table
                Constraint::Min(6),         // Allocation table
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Form
                Constraint::Percentage(40), // Budget table
            ])
            .split(rows[0]);

        Self {
            form: top[0],
            budget: top[1],
            allocation: rows[1],
        }
    }
}
