//! Transactions table
//!
//! Rows arrive sorted newest first. Outflows are drawn red.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::format::NO_TRANSACTIONS;
use crate::display::TransactionRow;

use super::panel;

pub fn render(frame: &mut Frame, transactions: &[TransactionRow], area: Rect) {
    let block = panel("Transactions", false);

    if transactions.is_empty() {
        let empty = Paragraph::new(NO_TRANSACTIONS)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let widths = [
        Constraint::Length(26), // Date
        Constraint::Length(10), // Account #
        Constraint::Length(16), // Type
        Constraint::Min(12),    // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Account #"),
        Cell::from("Type"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = transactions
        .iter()
        .map(|row| {
            let amount_style = if row.outflow {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            Row::new(vec![
                Cell::from(row.when.as_str()),
                Cell::from(row.account_number.as_str()),
                Cell::from(row.kind.as_str()),
                Cell::from(row.amount.as_str()).style(amount_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
