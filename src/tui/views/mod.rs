//! TUI views module
//!
//! Contains the two main views (dashboard, create-fund), the header tabs, and
//! the status bar. Rendering is a pure read of the app state; mutations happen
//! only in the event handlers.

pub mod create_fund;
pub mod dashboard;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveView, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveView::CreateFund => create_fund::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

/// Render the header line with the app title and view tabs
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let tabs = [
        ("1", "Dashboard", ActiveView::Dashboard),
        ("2", "Create Fund", ActiveView::CreateFund),
    ];

    let mut spans = vec![Span::styled(
        " Fundboard ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (key, name, view) in tabs {
        let style = if app.active_view == view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(name, style));
    }

    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
