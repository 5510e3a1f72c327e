//! Form screens

use ratatui::{prelude::*, widgets::*};

use console_client::{Form, FormStatus, FormView};

pub fn form<F: Form>(f: &mut Frame, view: &FormView<F>, title: &str, area: Rect) {
    let mut lines = vec![
        Line::styled(title.to_string(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];

    for (index, (_, label)) in F::FIELDS.iter().enumerate() {
        let value = view.form.field(index);
        let shown = if F::is_secret(index) {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let focused = index == view.focus();
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<12}", marker, label), style),
            Span::styled(format!("[{}]", shown), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(match view.status() {
        FormStatus::Idle => Line::styled("Enter to submit", Style::default().fg(Color::DarkGray)),
        FormStatus::Submitting => Line::styled("Submitting...", Style::default().fg(Color::Yellow)),
        FormStatus::Succeeded(msg) => Line::styled(msg.clone(), Style::default().fg(Color::Green)),
        FormStatus::Failed(msg) => Line::styled(msg.clone(), Style::default().fg(Color::Red)),
    });

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
