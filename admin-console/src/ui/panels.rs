//! Dashboard, reports, profile and welcome panes

use ratatui::{prelude::*, widgets::*};

use console_client::aggregate::Aggregate;
use console_client::reports::or_na;
use console_client::{Dashboard, Reports};
use shared::models::{Admin, Breakdown};

use crate::ui::date;

/// One line per aggregate: loading, its error, or the rendered value
fn figure<'a, T>(label: &'a str, value: &Aggregate<T>, render: impl Fn(&T) -> String) -> Line<'a> {
    let shown = match value {
        Aggregate::Loading => Span::styled("Loading...", Style::default().fg(Color::DarkGray)),
        Aggregate::Failed(e) => Span::styled(format!("Error: {}", e), Style::default().fg(Color::Red)),
        Aggregate::Ready(v) => Span::styled(
            render(v),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };
    Line::from(vec![Span::raw(format!("{:<18}", label)), shown])
}

/// A titled box listing `items`, or the aggregate's state
fn list_panel<T>(
    f: &mut Frame,
    title: &str,
    value: &Aggregate<Vec<T>>,
    render: impl Fn(&T) -> String,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let lines: Vec<Line> = match value {
        Aggregate::Loading => vec![Line::styled("Loading...", Style::default().fg(Color::DarkGray))],
        Aggregate::Failed(e) => vec![Line::styled(format!("Error: {}", e), Style::default().fg(Color::Red))],
        Aggregate::Ready(items) if items.is_empty() => vec![Line::raw("Nothing yet")],
        Aggregate::Ready(items) => items.iter().map(|item| Line::raw(render(item))).collect(),
    };
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

pub fn welcome(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::styled(
            "Welcome to the admin console",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Manage customers, employees and bookings, and review business reports."),
        Line::from(""),
        Line::styled("Press Enter to get started", Style::default().fg(Color::Yellow)),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

pub fn dashboard(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4), Constraint::Min(4)])
        .split(area);

    let figures = vec![
        figure("Employees", &dashboard.employee_count, |n| n.to_string()),
        figure("Customers", &dashboard.customer_count, |n| n.to_string()),
        figure("Products", &dashboard.product_count, |n| n.to_string()),
        figure("Services", &dashboard.service_count, |n| or_na(*n)),
        figure("Total revenue", &dashboard.total_revenue, |r| format!("{:.2}", r)),
    ];
    f.render_widget(
        Paragraph::new(figures).block(
            Block::default()
                .title(" Overview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        rows[0],
    );

    let people = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    list_panel(
        f,
        "Recent Employees",
        &dashboard.recent_employees,
        |e| format!("{} ({}) - {}", e.full_name(), e.role, e.status),
        people[0],
    );
    list_panel(
        f,
        "Recent Customers",
        &dashboard.recent_customers,
        |c| format!("{} - {}", c.display_name(), c.status),
        people[1],
    );

    let catalog = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    list_panel(
        f,
        "Products",
        &dashboard.recent_products,
        |p| format!("{}  {:.2}", p.name, p.price),
        catalog[0],
    );
    list_panel(
        f,
        "Services",
        &dashboard.recent_services,
        |s| format!("{}  {:.2}", s.name, s.price),
        catalog[1],
    );
}

fn breakdown(counts: &Breakdown) -> String {
    if counts.is_empty() {
        return "N/A".to_string();
    }
    counts
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn money(value: Option<f64>) -> String {
    or_na(value.map(|v| format!("{:.2}", v)))
}

pub fn reports(f: &mut Frame, reports: &Reports, area: Rect) {
    let mut lines = vec![Line::styled("Customers", Style::default().fg(Color::Cyan))];
    lines.push(figure("  Total", &reports.customer_stats, |s| or_na(s.total)));
    lines.push(figure("  By status", &reports.customer_stats, |s| {
        breakdown(&s.status_breakdown)
    }));

    lines.push(Line::styled("Commodities", Style::default().fg(Color::Cyan)));
    lines.push(figure("  Total", &reports.commodities, |r| or_na(r.total)));
    lines.push(figure("  Pieces", &reports.commodities, |r| or_na(r.total_pieces)));
    lines.push(figure("  Avg price", &reports.commodities, |r| money(r.avg_price)));
    lines.push(figure("  Total value", &reports.commodities, |r| money(r.total_value)));

    lines.push(Line::styled("Services", Style::default().fg(Color::Cyan)));
    lines.push(figure("  Total", &reports.services, |r| or_na(r.total)));
    lines.push(figure("  Available", &reports.services, |r| {
        format!("{} / unavailable {}", or_na(r.available), or_na(r.unavailable))
    }));
    lines.push(figure("  Avg price", &reports.services, |r| money(r.avg_price)));
    lines.push(figure("  Avg duration", &reports.services, |r| {
        or_na(r.avg_duration.map(|d| format!("{:.0} min", d)))
    }));

    lines.push(Line::styled("Product bookings", Style::default().fg(Color::Cyan)));
    lines.push(figure("  Total", &reports.bookings, |r| or_na(r.total_bookings)));
    lines.push(figure("  Status", &reports.bookings, |r| breakdown(&r.status_counts)));
    lines.push(figure("  Payment", &reports.bookings, |r| {
        breakdown(&r.payment_status_counts)
    }));
    lines.push(figure("  Method", &reports.bookings, |r| {
        breakdown(&r.payment_method_counts)
    }));
    lines.push(figure("  Revenue", &reports.bookings, |r| money(r.total_revenue)));

    lines.push(Line::styled("Service bookings", Style::default().fg(Color::Cyan)));
    lines.push(figure("  Total", &reports.service_bookings, |r| or_na(r.total_bookings)));
    lines.push(figure("  Status", &reports.service_bookings, |r| {
        breakdown(&r.status_counts)
    }));
    lines.push(figure("  Method", &reports.service_bookings, |r| {
        breakdown(&r.payment_method_counts)
    }));
    lines.push(figure("  Per service", &reports.service_bookings, |r| {
        if r.service_booking_counts.is_empty() {
            return "N/A".to_string();
        }
        r.service_booking_counts
            .iter()
            .map(|c| format!("{}: {}", c.service_name, c.count))
            .collect::<Vec<_>>()
            .join(", ")
    }));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn profile(f: &mut Frame, id: &str, admin: &Aggregate<Admin>, area: Rect) {
    let lines = match admin {
        Aggregate::Loading => vec![Line::styled("Loading...", Style::default().fg(Color::DarkGray))],
        Aggregate::Failed(e) => vec![Line::styled(
            format!("Failed to fetch admin profile: {}", e),
            Style::default().fg(Color::Red),
        )],
        Aggregate::Ready(a) => vec![
            Line::styled(a.full_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(format!("Email:   {}", a.email)),
            Line::from(format!(
                "Phone:   {}",
                a.phone_number.as_deref().unwrap_or("-")
            )),
            Line::from(format!("Created: {}", date(a.created_at))),
            Line::from(format!("Id:      {}", id)),
        ],
    };
    f.render_widget(Paragraph::new(lines), area);
}
