//! Create-fund view
//!
//! Shows the fund-request form, the budget year table with its edit/commit
//! flow, and the fund-allocation table whose year columns mirror the ledger.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::planner::SelectionSummary;
use crate::tui::app::{App, CreateFundSection};
use crate::tui::form::FundField;
use crate::tui::layout::CreateFundLayout;

/// Render the create-fund view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = CreateFundLayout::new(area);

    render_form(frame, app, layout.form);
    render_budget_table(frame, app, layout.budget);
    render_allocation_table(frame, app, layout.allocation);
}

fn section_border(app: &App, section: CreateFundSection) -> Style {
    if app.section == section {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render the fund request form
fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Fund Request Details ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(section_border(app, CreateFundSection::Form));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width: u16 = 16;
    let section_focused = app.section == CreateFundSection::Form;

    for (i, field) in FundField::ALL.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }

        let focused = section_focused && app.form.focus == *field;
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let marker = if focused { "▶ " } else { "  " };
        let label = format!("{}{:<14}", marker, field.label());
        frame
            .buffer_mut()
            .set_stringn(inner.x, y, &label, label_width as usize + 2, label_style);

        let value_area = Rect::new(
            inner.x + label_width + 2,
            y,
            inner.width.saturating_sub(label_width + 2),
            1,
        );

        match field {
            FundField::Description => {
                app.form
                    .description
                    .render(value_area, frame.buffer_mut(), focused);
            }
            FundField::Explanation => {
                app.form
                    .explanation
                    .render(value_area, frame.buffer_mut(), focused);
            }
            FundField::TransferType => {
                app.form
                    .transfer_type
                    .render(value_area, frame.buffer_mut(), focused);
            }
            FundField::FundCenter => {
                app.form
                    .fund_center
                    .render(value_area, frame.buffer_mut(), focused);
            }
            FundField::FundType => {
                app.form
                    .fund_type
                    .render(value_area, frame.buffer_mut(), focused);
            }
            FundField::RequestedBy => {
                app.form
                    .requested_by
                    .render(value_area, frame.buffer_mut(), focused);
            }
            FundField::Currency => {
                app.form
                    .currency
                    .render(value_area, frame.buffer_mut(), focused);
            }
        }
    }
}

/// Render the budget year table
fn render_budget_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Budget Overview ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(
            Line::from(" [a] Add Year  [d] Delete Latest ").style(Style::default().fg(Color::Yellow)),
        )
        .borders(Borders::ALL)
        .border_style(section_border(app, CreateFundSection::BudgetTable));

    if app.planner.ledger.is_empty() {
        let text = Paragraph::new("No budget years added yet.\nPress [a] to start creating your budget.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(vec![Cell::from("Budget Year"), Cell::from("Amount")])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let rows: Vec<Row> = app
        .planner
        .ledger
        .entries()
        .map(|entry| {
            let amount_cell = match entry.draft() {
                // Edit mode: show the draft with a cursor marker
                Some(draft) if draft.is_empty() => Cell::from(Line::from(vec![
                    Span::styled("▏", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        "Enter budget amount...",
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                Some(draft) => Cell::from(Line::from(vec![
                    Span::styled(draft.to_string(), Style::default().fg(Color::White)),
                    Span::styled("▏", Style::default().fg(Color::Cyan)),
                ])),
                None => match entry.committed_amount() {
                    Some(amount) => Cell::from(amount.to_string())
                        .style(Style::default().fg(Color::Gray)),
                    None => Cell::from("-"),
                },
            };

            Row::new(vec![
                Cell::from(entry.year.to_string()).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                amount_cell,
            ])
        })
        .collect();

    let widths = [Constraint::Length(12), Constraint::Min(14)];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_year_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Render the fund allocation table
fn render_allocation_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let selected = app.planner.matrix.selected_count();
    let title = if selected > 0 {
        format!(" Fund Allocation ({} selected) ", selected)
    } else {
        " Fund Allocation ".to_string()
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(
            Line::from(" [space] Select  [x] Select All ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .borders(Borders::ALL)
        .border_style(section_border(app, CreateFundSection::Allocation));

    let header_checkbox = match app.planner.matrix.selection_summary() {
        SelectionSummary::None => "[ ]",
        SelectionSummary::Partial => "[~]",
        SelectionSummary::All => "[x]",
    };

    // Column set is exactly the ledger's year order
    let columns = app.planner.columns();

    let mut header_cells = vec![
        Cell::from(header_checkbox),
        Cell::from("Fund Center"),
        Cell::from("Commitment Item"),
    ];
    for year in &columns {
        header_cells.push(Cell::from(year.to_string()));
    }
    let header = Row::new(header_cells)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let rows: Vec<Row> = app
        .planner
        .matrix
        .rows()
        .iter()
        .map(|row| {
            let is_selected = app.planner.matrix.is_selected(row.id);
            let checkbox = if is_selected { "[x]" } else { "[ ]" };

            let mut cells = vec![
                Cell::from(checkbox).style(if is_selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                }),
                Cell::from(row.fund_center.clone()).style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(row.commitment_item.clone()),
            ];

            for year in &columns {
                // Sparse mapping: missing years render as a placeholder
                let text = row
                    .amount_for(*year)
                    .map(|amount| amount.to_string())
                    .unwrap_or_else(|| "-".to_string());
                cells.push(Cell::from(text));
            }

            let table_row = Row::new(cells);
            if is_selected {
                table_row.style(Style::default().bg(Color::Rgb(20, 40, 70)))
            } else {
                table_row
            }
        })
        .collect();

    let mut widths = vec![
        Constraint::Length(4),
        Constraint::Min(20),
        Constraint::Min(18),
    ];
    widths.extend(columns.iter().map(|_| Constraint::Length(12)));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_alloc_index));

    frame.render_stateful_widget(table, area, &mut state);
}
