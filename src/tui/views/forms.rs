//! Input forms
//!
//! Create account, deposit/withdraw, and balance check. The focused form
//! gets a highlighted border; the focused field shows a cursor.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::layout::AppLayout;
use crate::tui::surface::TuiSurface;
use crate::tui::widgets::TextInput;
use crate::view::{Field, Form};

use super::panel;

/// Render all three forms
pub fn render(frame: &mut Frame, surface: &TuiSurface, layout: &AppLayout) {
    let forms = [
        (Form::CreateAccount, "Create Account", layout.create_form),
        (Form::Transaction, "Deposit / Withdraw", layout.transaction_form),
        (Form::BalanceCheck, "Check Balance", layout.balance_form),
    ];
    for (form, title, area) in forms {
        render_form(frame, surface, form, title, area);
    }
}

fn render_form(frame: &mut Frame, surface: &TuiSurface, form: Form, title: &str, area: Rect) {
    let focused = surface.focus().form() == form;
    let block = panel(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.fields();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(fields.iter().map(|_| Constraint::Length(1)))
        .split(inner);

    for (field, row) in fields.iter().zip(rows.iter()) {
        let has_focus = surface.focus() == *field;
        let line = match surface.input(*field) {
            Some(input) => text_field(label(*field), input, has_focus),
            None => type_selector(label(*field), surface.movement().to_string(), has_focus),
        };
        frame.render_widget(Paragraph::new(line), *row);
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::CustomerName => "Name",
        Field::InitialBalance => "Initial balance",
        Field::TransactionAccount => "Account #",
        Field::TransactionType => "Type",
        Field::Amount => "Amount",
        Field::BalanceAccount => "Account #",
    }
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

fn text_field<'a>(label: &'a str, input: &'a TextInput, focused: bool) -> Line<'a> {
    let mut spans = vec![Span::styled(format!("{}: ", label), label_style(focused))];
    let value_style = Style::default().fg(Color::White);

    if focused {
        let (before, under, after) = input.split_at_cursor();
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            under.unwrap_or(' ').to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
    } else if input.value().is_empty() {
        spans.push(Span::styled(
            input.placeholder.as_str(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(input.value(), value_style));
    }

    Line::from(spans)
}

fn type_selector(label: &str, value: String, focused: bool) -> Line<'_> {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style(focused)),
        Span::styled(format!("◀ {} ▶", value), value_style),
    ])
}
