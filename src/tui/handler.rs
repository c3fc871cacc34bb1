//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! view, focused section, and input mode. Every planner mutation happens
//! synchronously in here; the render path only reads.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveView, App, CreateFundSection, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.input_mode == InputMode::Editing {
        return handle_form_editing_key(app, key);
    }

    // A budget row in edit mode captures keystrokes like a real input field
    if app.active_view == ActiveView::CreateFund
        && app.section == CreateFundSection::BudgetTable
        && app.selected_year_editing()
    {
        return handle_budget_draft_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Dashboard);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::CreateFund);
            return Ok(());
        }
        KeyCode::Tab if app.active_view == ActiveView::CreateFund => {
            app.next_section();
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Dashboard => handle_dashboard_key(app, key),
        ActiveView::CreateFund => handle_create_fund_key(app, key),
    }
}

/// Handle keys in the dashboard view
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.requests.len();
            App::move_down(&mut app.selected_request_index, max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::move_up(&mut app.selected_request_index);
        }
        // "New Request" shortcut
        KeyCode::Char('n') => {
            app.switch_view(ActiveView::CreateFund);
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys in the create-fund view
fn handle_create_fund_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.section {
        CreateFundSection::Form => handle_form_key(app, key),
        CreateFundSection::BudgetTable => handle_budget_table_key(app, key),
        CreateFundSection::Allocation => handle_allocation_key(app, key),
    }
}

/// Handle keys when the form section is focused
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.form.focus_next(),
        KeyCode::Char('k') | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(select) = app.form.focused_select() {
                select.next();
            }
        }
        KeyCode::Char('h') | KeyCode::Left => {
            if let Some(select) = app.form.focused_select() {
                select.prev();
            }
        }
        KeyCode::Enter | KeyCode::Char('i') => {
            if app.form.focus.is_text() {
                app.input_mode = InputMode::Editing;
            } else if key.code == KeyCode::Enter {
                if let Some(select) = app.form.focused_select() {
                    select.next();
                }
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys while editing a form text field
fn handle_form_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let Some(input) = app.form.focused_text() else {
        app.input_mode = InputMode::Normal;
        return Ok(());
    };

    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        _ => {}
    }

    Ok(())
}

/// Handle keys when the budget table is focused and no entry captures input
fn handle_budget_table_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.planner.ledger.len();
            App::move_down(&mut app.selected_year_index, max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::move_up(&mut app.selected_year_index);
        }
        KeyCode::Char('a') => append_year(app),
        KeyCode::Char('d') => remove_latest_year(app),
        _ => {}
    }

    Ok(())
}

/// Handle keys while the selected budget row is in edit mode
fn handle_budget_draft_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let index = app.selected_year_index;

    match key.code {
        KeyCode::Enter => {
            // Same commit path as any explicit commit action
            app.planner.commit_draft(index);
            if let Some(entry) = app.planner.ledger.get(index) {
                if let Some(amount) = entry.committed_amount() {
                    app.set_status(format!("Budget for {} set to {}", entry.year, amount));
                }
            }
        }
        KeyCode::Char(c) => {
            let mut draft = current_draft(app, index);
            draft.push(c);
            app.planner.update_draft(index, draft);
        }
        KeyCode::Backspace => {
            let mut draft = current_draft(app, index);
            draft.pop();
            app.planner.update_draft(index, draft);
        }
        // Drafts persist per-row; moving away does not commit
        KeyCode::Down => {
            let max = app.planner.ledger.len();
            App::move_down(&mut app.selected_year_index, max);
        }
        KeyCode::Up => {
            App::move_up(&mut app.selected_year_index);
        }
        KeyCode::Tab | KeyCode::Esc => {
            app.next_section();
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys when the allocation table is focused
fn handle_allocation_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.planner.matrix.len();
            App::move_down(&mut app.selected_alloc_index, max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::move_up(&mut app.selected_alloc_index);
        }
        KeyCode::Char(' ') => {
            let id = app
                .planner
                .matrix
                .rows()
                .get(app.selected_alloc_index)
                .map(|row| row.id);
            if let Some(id) = id {
                app.planner.toggle_row(id);
            }
        }
        KeyCode::Char('x') => {
            app.planner.toggle_all();
        }
        _ => {}
    }

    Ok(())
}

fn current_draft(app: &App, index: usize) -> String {
    app.planner
        .ledger
        .get(index)
        .and_then(|entry| entry.draft())
        .unwrap_or_default()
        .to_string()
}

fn append_year(app: &mut App) {
    app.planner.append_year();
    // Focus the new entry so keystrokes go straight into its draft
    app.selected_year_index = app.planner.ledger.len() - 1;
    if let Some(entry) = app.planner.ledger.get(app.selected_year_index) {
        app.set_status(format!("Added budget year {}", entry.year));
    }
}

fn remove_latest_year(app: &mut App) {
    match app.planner.remove_latest_year() {
        Some(year) => {
            app.clamp_year_selection();
            app.set_status(format!("Removed {} from budget and allocations", year));
        }
        None => {
            // Empty ledger: nothing to remove
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::Amount;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn app_in_budget_section() -> App {
        let mut app = App::new(Settings::default());
        app.switch_view(ActiveView::CreateFund);
        app.section = CreateFundSection::BudgetTable;
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_key_event(app, key).unwrap();
    }

    #[test]
    fn test_add_year_then_type_then_enter_commits() {
        // The confirm keypress and the commit operation yield identical state
        let mut app = app_in_budget_section();

        press(&mut app, KeyCode::Char('a'));
        assert!(app.selected_year_editing());

        for c in "$500".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        let entry = app.planner.ledger.get(0).unwrap();
        assert!(!entry.is_editing());
        assert_eq!(entry.committed_amount(), Some(&Amount::from("$500")));
    }

    #[test]
    fn test_enter_on_empty_draft_commits_placeholder() {
        let mut app = app_in_budget_section();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.planner.ledger.get(0).unwrap().committed_amount(),
            Some(&Amount::zero_placeholder())
        );
    }

    #[test]
    fn test_backspace_edits_draft() {
        let mut app = app_in_budget_section();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.planner.ledger.get(0).unwrap().draft(), Some("1"));
    }

    #[test]
    fn test_delete_latest_cascades() {
        let mut app = app_in_budget_section();

        // Two committed years, then delete the tail
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        let tail = app.planner.ledger.get(1).unwrap().year;

        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.planner.ledger.len(), 1);
        for row in app.planner.matrix.rows() {
            assert_eq!(row.amount_for(tail), None);
        }
    }

    #[test]
    fn test_delete_on_empty_ledger_is_noop() {
        let mut app = app_in_budget_section();
        press(&mut app, KeyCode::Char('d'));
        assert!(app.planner.ledger.is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_space_toggles_allocation_row() {
        let mut app = app_in_budget_section();
        app.section = CreateFundSection::Allocation;
        let id = app.planner.matrix.rows()[0].id;

        press(&mut app, KeyCode::Char(' '));
        assert!(app.planner.matrix.is_selected(id));

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.planner.matrix.is_selected(id));
    }

    #[test]
    fn test_x_toggles_all_rows() {
        let mut app = app_in_budget_section();
        app.section = CreateFundSection::Allocation;

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.planner.matrix.selected_count(), 3);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.planner.matrix.selected_count(), 0);
    }

    #[test]
    fn test_view_switching() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::CreateFund);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_view, ActiveView::Dashboard);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_form_select_cycles() {
        let mut app = App::new(Settings::default());
        app.switch_view(ActiveView::CreateFund);

        press(&mut app, KeyCode::Right);
        assert_eq!(
            app.form.transfer_type.value(),
            Some("Internal Transfer")
        );
    }

    #[test]
    fn test_form_text_editing_round_trip() {
        let mut app = App::new(Settings::default());
        app.switch_view(ActiveView::CreateFund);
        // Move to the Description field and edit it
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);

        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.form.description.value(), "hi");
    }
}
