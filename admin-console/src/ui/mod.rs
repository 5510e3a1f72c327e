//! Rendering
//!
//! Layout: header, navigation tabs, the current screen beside the log pane,
//! and a footer carrying the input line or key help.

mod forms;
mod panels;
mod tables;

use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::{App, InputMode, Screen};
use crate::routes::Route;

pub fn draw<C>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Navigation
            Constraint::Min(1),    // Screen + logs
            Constraint::Length(1), // Notice
            Constraint::Length(3), // Input / help
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[2]);

    header(f, app, chunks[0]);
    navigation(f, app, chunks[1]);
    screen(f, app, body[0]);
    logs(f, app, body[1]);
    notice(f, app, chunks[3]);
    footer(f, app, chunks[4]);
}

fn header<C>(f: &mut Frame, app: &App<C>, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Admin Console "),
        Span::styled(
            format!(" {} ", app.route.title()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(app.route.path(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(app.target.as_str(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn navigation<C>(f: &mut Frame, app: &App<C>, area: Rect) {
    let titles: Vec<Line> = Route::NAV.iter().map(|r| Line::from(r.title())).collect();
    let mut tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .divider("|");
    if let Some(index) = app.route.nav_index() {
        tabs = tabs.select(index);
    }
    f.render_widget(tabs, area);
}

fn screen<C>(f: &mut Frame, app: &App<C>, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.route.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.screen {
        Screen::Welcome => panels::welcome(f, inner),
        Screen::Login(form) => forms::form(f, form, "Login", inner),
        Screen::Dashboard(dashboard) => panels::dashboard(f, dashboard, inner),
        Screen::Customers { view, selected } => tables::customers(f, view, *selected, inner),
        Screen::AddCustomer(form) => forms::form(f, form, "Add Customer", inner),
        Screen::Employees { view, selected } => tables::employees(f, view, *selected, inner),
        Screen::AddEmployee(form) => forms::form(f, form, "Add Employee", inner),
        Screen::Admins(table) => tables::admins(f, table, inner),
        Screen::Reports(reports) => panels::reports(f, reports, inner),
        Screen::ProductBookings(table) => tables::product_bookings(f, table, inner),
        Screen::ServiceBookings(table) => tables::service_bookings(f, table, inner),
        Screen::Profile { id, admin } => panels::profile(f, id, admin, inner),
    }
}

fn logs<C>(f: &mut Frame, app: &App<C>, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(widget, area);
}

fn notice<C>(f: &mut Frame, app: &App<C>, area: Rect) {
    if let Some(notice) = &app.notice {
        let color = if notice.is_error { Color::Red } else { Color::Green };
        f.render_widget(
            Paragraph::new(format!(" {}", notice.text)).style(Style::default().fg(color)),
            area,
        );
    }
}

fn key_help(screen: &Screen) -> &'static str {
    match screen {
        Screen::Welcome => "Enter get started | Tab/Shift-Tab pages | g go to path | q quit",
        Screen::Login(_) | Screen::AddCustomer(_) | Screen::AddEmployee(_) => {
            "e edit | Tab pages | g go to path | q quit"
        }
        Screen::Customers { .. } => {
            "a approve x reject s suspend v reactivate | / search f filter r refresh | q quit"
        }
        Screen::Employees { .. } => {
            "s suspend a activate d delete | / search f filter r refresh | q quit"
        }
        Screen::Admins(_) => "Enter profile | / search r refresh | Tab pages | q quit",
        Screen::ProductBookings(_) => "Enter receipt | / search r refresh | Tab pages | q quit",
        Screen::Profile { .. } => "Esc back | r refresh | Tab pages | q quit",
        _ => "r refresh | Tab/Shift-Tab pages | g go to path | q quit",
    }
}

fn footer<C>(f: &mut Frame, app: &App<C>, area: Rect) {
    let (title, style) = match app.input_mode {
        InputMode::Search => (" Search ", Style::default().fg(Color::Yellow)),
        InputMode::Goto => (" Go to path ", Style::default().fg(Color::Yellow)),
        InputMode::Editing => (
            " Editing: Tab next field, Enter submit, Esc stop ",
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Normal => (" Keys ", Style::default().fg(Color::Gray)),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    match app.input_mode {
        InputMode::Search | InputMode::Goto => {
            let width = area.width.max(3) - 3;
            let scroll = app.input.visual_scroll(width as usize);
            let input = Paragraph::new(app.input.value())
                .style(style)
                .scroll((0, scroll as u16))
                .block(block);
            f.render_widget(input, area);
            f.set_cursor_position((
                area.x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
                area.y + 1,
            ));
        }
        InputMode::Normal | InputMode::Editing => {
            let help = Paragraph::new(key_help(&app.screen))
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(help, area);
        }
    }
}

/// `2024-03-01` style date, `-` when absent
pub(crate) fn date(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Red banner for a failed load
pub(crate) fn banner(f: &mut Frame, text: &str, area: Rect) {
    f.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true }),
        area,
    );
}
