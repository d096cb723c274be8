//! The dashboard view.
//!
//! Counter cards on top, the ranked top-users list on the left, resource
//! gauges and uptime on the right. Sinks that have no data yet render
//! as "--".

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::GaugeValue;

/// Render the full dashboard into the content area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Counter cards
            Constraint::Min(8),    // Top users + system
        ])
        .split(area);

    render_counters(frame, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_top_users(frame, app, columns[0]);
    render_system(frame, app, columns[1]);
}

/// The four counter cards: users, deliveries, earnings, active buffs.
fn render_counters(frame: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let dash = &app.dashboard;
    let counters = [
        ("Users", &dash.users),
        ("Deliveries", &dash.deliveries),
        ("Earnings", &dash.earnings),
        ("Active buffs", &dash.buffs),
    ];

    for ((title, value), card_area) in counters.iter().zip(cards.iter()) {
        let text = match value {
            Some(v) => Span::styled(v.clone(), app.theme.value),
            None => Span::styled("--", Style::default().fg(app.theme.dim)),
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", title), app.theme.header))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type);

        frame.render_widget(Paragraph::new(Line::from(text)).block(block), *card_area);
    }
}

/// Ranked top-users list with medal glyphs for the first three ranks.
fn render_top_users(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Top users ", app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type);

    let items: Vec<ListItem> = match &app.dashboard.top_users {
        Some(rows) => rows
            .iter()
            .map(|row| {
                if row.rank.is_empty() && row.deliveries.is_empty() {
                    // Placeholder row for an empty list
                    return ListItem::new(Line::from(Span::styled(
                        row.username.clone(),
                        Style::default().fg(app.theme.dim),
                    )));
                }
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<3} ", row.rank)),
                    Span::styled(row.username.clone(), app.theme.value),
                    Span::raw(" — "),
                    Span::raw(format!("{} deliveries", row.deliveries)),
                ]))
            })
            .collect(),
        None => vec![ListItem::new(Line::from(Span::styled(
            "--",
            Style::default().fg(app.theme.dim),
        )))],
    };

    frame.render_widget(List::new(items).block(block), area);
}

/// CPU/memory/disk gauges plus the uptime line.
fn render_system(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" System ", app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // CPU
            Constraint::Length(2), // Memory
            Constraint::Length(2), // Disk
            Constraint::Length(1), // Uptime
        ])
        .split(inner);

    let dash = &app.dashboard;
    render_gauge(frame, app, rows[0], "CPU", &dash.cpu);
    render_gauge(frame, app, rows[1], "Memory", &dash.memory);
    render_gauge(frame, app, rows[2], "Disk", &dash.disk);

    let uptime = match &dash.uptime {
        Some(u) => Line::from(vec![
            Span::styled("Uptime: ", app.theme.header),
            Span::raw(u.clone()),
        ]),
        None => Line::from(Span::styled("Uptime: --", Style::default().fg(app.theme.dim))),
    };
    frame.render_widget(Paragraph::new(uptime), rows[3]);
}

/// One labelled gauge row; fill width equals the clamped percentage.
fn render_gauge(frame: &mut Frame, app: &App, area: Rect, title: &str, value: &Option<GaugeValue>) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(8), Constraint::Min(10)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(title.to_string(), app.theme.header)),
        parts[0],
    );

    match value {
        Some(v) => {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(app.theme.gauge_color(v.percent)))
                .ratio(v.percent / 100.0)
                .label(v.label.clone());
            frame.render_widget(gauge, parts[1]);
        }
        None => {
            frame.render_widget(
                Paragraph::new(Span::styled("--", Style::default().fg(app.theme.dim))),
                parts[1],
            );
        }
    }
}
