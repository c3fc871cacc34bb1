//! Dashboard view
//!
//! Shows the aggregate stat cards, the monthly approved/pending/rejected bar
//! chart, the recent-activity feed, and the recent-requests table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, List, ListItem, Paragraph, Row,
        Table, TableState},
    Frame,
};

use crate::models::{ActivityKind, Priority, RequestStatus};
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

const APPROVED_COLOR: Color = Color::Green;
const PENDING_COLOR: Color = Color::Yellow;
const REJECTED_COLOR: Color = Color::Red;

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area);

    render_stat_cards(frame, app, layout.stats);
    render_chart(frame, app, layout.chart);
    render_activity(frame, app, layout.activity);
    render_requests(frame, app, layout.requests);
}

/// Render the four statistic cards
fn render_stat_cards(frame: &mut Frame, app: &App, area: Rect) {
    let accents = [Color::Green, Color::Red, Color::Magenta, Color::Yellow];

    let constraints = vec![Constraint::Ratio(1, app.stats.len().max(1) as u32); app.stats.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, stat) in app.stats.iter().enumerate() {
        let accent = accents[i % accents.len()];

        let block = Block::default()
            .title(format!(" {} ", stat.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let change_color = if stat.change.starts_with('-') {
            Color::Red
        } else {
            Color::Green
        };

        let lines = vec![
            Line::from(Span::styled(
                stat.value.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(stat.change.clone(), Style::default().fg(change_color)),
                Span::styled(" from last month", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let card = Paragraph::new(lines).block(block);
        frame.render_widget(card, cells[i]);
    }
}

/// Render the monthly request-volume bar chart (values in $K)
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Request Volume ($K) ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    // Legend line above the bars
    let legend = Line::from(vec![
        Span::styled("■ Approved  ", Style::default().fg(APPROVED_COLOR)),
        Span::styled("■ Pending  ", Style::default().fg(PENDING_COLOR)),
        Span::styled("■ Rejected", Style::default().fg(REJECTED_COLOR)),
    ]);
    let legend_area = Rect::new(inner.x, inner.y, inner.width, 1);
    frame.render_widget(Paragraph::new(legend), legend_area);

    let chart_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );

    let mut chart = BarChart::default()
        .bar_width(2)
        .bar_gap(0)
        .group_gap(1);

    for volume in &app.volumes {
        let group = BarGroup::default()
            .label(Line::from(volume.month.clone()))
            .bars(&[
                Bar::default()
                    .value(volume.approved / 1000)
                    .style(Style::default().fg(APPROVED_COLOR)),
                Bar::default()
                    .value(volume.pending / 1000)
                    .style(Style::default().fg(PENDING_COLOR)),
                Bar::default()
                    .value(volume.rejected / 1000)
                    .style(Style::default().fg(REJECTED_COLOR)),
            ]);
        chart = chart.data(group);
    }

    frame.render_widget(chart, chart_area);
}

/// Render the recent activity feed
fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Recent Activity ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = app
        .activity
        .iter()
        .map(|event| {
            let marker_color = match event.kind {
                ActivityKind::Approved => Color::Green,
                ActivityKind::Rejected => Color::Red,
                ActivityKind::Submitted => Color::Blue,
                ActivityKind::Pending => Color::Yellow,
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", event.kind.marker()),
                    Style::default().fg(marker_color),
                ),
                Span::styled(
                    event.fund_number.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(event.message.clone(), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("  {}", event.time),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Render the recent requests table
fn render_requests(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Recent Requests ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Department"),
        Cell::from("Amount"),
        Cell::from("Status"),
        Cell::from("Date"),
        Cell::from("Priority"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let date_format = app.settings.date_format.clone();
    let rows: Vec<Row> = app
        .requests
        .iter()
        .map(|request| {
            Row::new(vec![
                Cell::from(request.title.clone()),
                Cell::from(request.department.clone()),
                Cell::from(request.amount.to_string()),
                Cell::from(request.status.to_string())
                    .style(Style::default().fg(status_color(request.status))),
                Cell::from(request.date.format(&date_format).to_string()),
                Cell::from(Line::from(vec![
                    Span::styled("● ", Style::default().fg(priority_color(request.priority))),
                    Span::raw(request.priority.to_string()),
                ])),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(10),
    ];

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
    state.select(Some(app.selected_request_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn status_color(status: RequestStatus) -> Color {
    match status {
        RequestStatus::Approved => Color::Green,
        RequestStatus::Pending => Color::Yellow,
        RequestStatus::Reviewing => Color::Blue,
        RequestStatus::Rejected => Color::Red,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}
