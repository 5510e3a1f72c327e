//! List screens

use ratatui::{prelude::*, widgets::*};

use console_client::{CustomerAction, CustomersView, EmployeeAction, EmployeesView, EntityListStore, LoadState};
use console_client::transition::Transition;
use shared::models::{Admin, CustomerStatus, EmployeeStatus, ProductBooking, ServiceBooking};
use shared::Record;

use crate::app::Table as TableScreen;
use crate::ui::{banner, date};

/// Status line, optional error banner, then the table
fn frame_list<T: Record>(
    f: &mut Frame,
    store: &EntityListStore<T>,
    summary: String,
    table: Table,
    selected: usize,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(if store.load_error().is_some() { 2 } else { 0 }),
            Constraint::Min(1),
        ])
        .split(area);

    let state_text = match store.load_state() {
        LoadState::Idle => "",
        LoadState::Loading => "  Loading...",
        LoadState::Loaded => "",
        LoadState::Failed(_) => "  (load failed)",
    };
    f.render_widget(
        Paragraph::new(format!("{}{}", summary, state_text)).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );
    if let Some(error) = store.load_error() {
        banner(f, &format!("Failed to load: {}  (r to retry)", error), chunks[1]);
    }

    let mut state = TableState::default().with_selected(Some(selected));
    f.render_stateful_widget(
        table
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> "),
        chunks[2],
        &mut state,
    );
}

fn header(cells: &[&'static str]) -> Row<'static> {
    Row::new(cells.to_vec()).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// In-flight marker or the last mutation fault for a row
fn row_note<T: Record>(store: &EntityListStore<T>, id: &str) -> Cell<'static> {
    if store.is_in_flight(id) {
        Cell::from("working...").style(Style::default().fg(Color::Yellow))
    } else if let Some(error) = store.row_error(id) {
        Cell::from(error.to_string()).style(Style::default().fg(Color::Red))
    } else {
        Cell::from("")
    }
}

fn customer_status_color(status: CustomerStatus) -> Color {
    match status {
        CustomerStatus::Active => Color::Green,
        CustomerStatus::Pending => Color::Yellow,
        CustomerStatus::Rejected | CustomerStatus::Suspended => Color::Red,
        CustomerStatus::Unknown => Color::DarkGray,
    }
}

fn employee_status_color(status: EmployeeStatus) -> Color {
    match status {
        EmployeeStatus::Active => Color::Green,
        EmployeeStatus::Suspended => Color::Red,
        EmployeeStatus::Unknown => Color::DarkGray,
    }
}

fn query_summary(count: usize, total: usize, query: &str) -> String {
    if query.is_empty() {
        format!("{} records", total)
    } else {
        format!("{} of {} match \"{}\"", count, total, query)
    }
}

pub fn customers(f: &mut Frame, view: &CustomersView, selected: usize, area: Rect) {
    let store = &view.list.store;
    let visible = view.list.visible();
    let rows: Vec<Row> = visible
        .iter()
        .map(|c| {
            let actions = CustomerAction::available(c.status)
                .into_iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(" ");
            Row::new(vec![
                Cell::from(c.display_name()),
                Cell::from(c.email.clone().unwrap_or_default()),
                Cell::from(c.phone.clone().unwrap_or_default()),
                Cell::from(c.status.as_str())
                    .style(Style::default().fg(customer_status_color(c.status))),
                Cell::from(date(c.created_at)),
                Cell::from(actions),
                row_note(store, &c.id),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(16),
            Constraint::Percentage(20),
            Constraint::Percentage(11),
            Constraint::Percentage(9),
            Constraint::Percentage(10),
            Constraint::Percentage(16),
            Constraint::Percentage(18),
        ],
    )
    .header(header(&["Name", "Email", "Phone", "Status", "Joined", "Actions", ""]));

    let summary = format!(
        "Filter: {} (f)  {}",
        view.filter.label(),
        query_summary(visible.len(), store.len(), view.list.query())
    );
    frame_list(f, store, summary, table, selected, area);
}

pub fn employees(f: &mut Frame, view: &EmployeesView, selected: usize, area: Rect) {
    let store = &view.list.store;
    let visible = view.list.visible();
    let rows: Vec<Row> = visible
        .iter()
        .map(|e| {
            let actions = EmployeeAction::available(e.status)
                .into_iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(" ");
            Row::new(vec![
                Cell::from(e.full_name()),
                Cell::from(e.email.clone()),
                Cell::from(e.role.clone()),
                Cell::from(e.status.as_str())
                    .style(Style::default().fg(employee_status_color(e.status))),
                Cell::from(actions),
                row_note(store, &e.id),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(22),
            Constraint::Percentage(12),
            Constraint::Percentage(10),
            Constraint::Percentage(18),
            Constraint::Percentage(20),
        ],
    )
    .header(header(&["Name", "Email", "Role", "Status", "Actions", ""]));

    let summary = format!(
        "Filter: {} (f)  {}",
        view.filter.label(),
        query_summary(visible.len(), store.len(), view.list.query())
    );
    frame_list(f, store, summary, table, selected, area);
}

pub fn admins(f: &mut Frame, screen: &TableScreen<Admin>, area: Rect) {
    let store = &screen.list.store;
    let visible = screen.list.visible();
    let rows: Vec<Row> = visible
        .iter()
        .map(|a| {
            Row::new(vec![
                a.full_name.clone(),
                a.email.clone(),
                a.phone_number.clone().unwrap_or_default(),
                date(a.created_at),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
        ],
    )
    .header(header(&["Full Name", "Email", "Phone", "Created"]));

    let summary = query_summary(visible.len(), store.len(), screen.list.query());
    frame_list(f, store, summary, table, screen.selected, area);
}

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{:.2}", v))
}

pub fn product_bookings(f: &mut Frame, screen: &TableScreen<ProductBooking>, area: Rect) {
    let store = &screen.list.store;
    let visible = screen.list.visible();
    let rows: Vec<Row> = visible
        .iter()
        .map(|b| {
            let customer = b.customer.clone().unwrap_or_default();
            let product = b.product.clone().unwrap_or_default();
            Row::new(vec![
                customer.name.unwrap_or_default(),
                product.commodity_name.unwrap_or_default(),
                b.quantity.to_string(),
                money(b.payment_amount),
                b.payment_status.clone().unwrap_or_default(),
                b.payment_method.clone().unwrap_or_default(),
                b.status.clone(),
                date(b.booked_at),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(16),
            Constraint::Percentage(20),
            Constraint::Percentage(6),
            Constraint::Percentage(11),
            Constraint::Percentage(11),
            Constraint::Percentage(11),
            Constraint::Percentage(11),
            Constraint::Percentage(14),
        ],
    )
    .header(header(&[
        "Customer", "Product", "Qty", "Amount", "Payment", "Method", "Status", "Booked",
    ]));

    let summary = query_summary(visible.len(), store.len(), screen.list.query());
    frame_list(f, store, summary, table, screen.selected, area);
}

pub fn service_bookings(f: &mut Frame, screen: &TableScreen<ServiceBooking>, area: Rect) {
    let store = &screen.list.store;
    let visible = screen.list.visible();
    let rows: Vec<Row> = visible
        .iter()
        .map(|b| {
            let customer = b.customer.clone().unwrap_or_default();
            let service = b.service.clone().unwrap_or_default();
            Row::new(vec![
                customer.name.unwrap_or_default(),
                service.name.unwrap_or_default(),
                money(service.price),
                date(b.booking_date),
                b.status.clone(),
                b.payment_method.clone().unwrap_or_default(),
                b.notes.clone().unwrap_or_default(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(16),
            Constraint::Percentage(18),
            Constraint::Percentage(10),
            Constraint::Percentage(12),
            Constraint::Percentage(11),
            Constraint::Percentage(11),
            Constraint::Percentage(22),
        ],
    )
    .header(header(&[
        "Customer", "Service", "Price", "Date", "Status", "Method", "Notes",
    ]));

    let summary = query_summary(visible.len(), store.len(), screen.list.query());
    frame_list(f, store, summary, table, screen.selected, area);
}
