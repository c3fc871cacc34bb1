//! Status bar view
//!
//! Shows the current status message and key hints for the active view.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, CreateFundSection, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" │"));
    }

    let hints = hints_for(app);
    spans.push(Span::styled(
        format!(" {}", hints),
        Style::default().fg(Color::White),
    ));

    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line), area);
}

fn hints_for(app: &App) -> &'static str {
    if app.input_mode == InputMode::Editing {
        return "Enter/Esc:Done  ←/→:Cursor";
    }

    match app.active_view {
        ActiveView::Dashboard => "1:Dashboard  2:Create Fund  j/k:Move  n:New Request  q:Quit",
        ActiveView::CreateFund => match app.section {
            CreateFundSection::Form => {
                "Tab:Section  j/k:Field  h/l:Options  Enter:Edit  q:Quit"
            }
            CreateFundSection::BudgetTable => {
                if app.selected_year_editing() {
                    "Type amount  Enter:Commit  Tab:Section"
                } else {
                    "Tab:Section  j/k:Move  a:Add Year  d:Delete Latest  q:Quit"
                }
            }
            CreateFundSection::Allocation => {
                "Tab:Section  j/k:Move  space:Select  x:Select All  q:Quit"
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;

    #[test]
    fn test_hints_follow_view_and_section() {
        let mut app = App::new(Settings::default());
        assert!(hints_for(&app).contains("Dashboard"));

        app.switch_view(ActiveView::CreateFund);
        assert!(hints_for(&app).contains("Field"));

        app.section = CreateFundSection::BudgetTable;
        assert!(hints_for(&app).contains("Add Year"));

        app.section = CreateFundSection::Allocation;
        assert!(hints_for(&app).contains("Select All"));
    }

    #[test]
    fn test_editing_budget_row_changes_hints() {
        let mut app = App::new(Settings::default());
        app.switch_view(ActiveView::CreateFund);
        app.section = CreateFundSection::BudgetTable;
        app.planner.append_year();

        assert!(hints_for(&app).contains("Commit"));
    }
}
