//! Accounts table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::format::NO_ACCOUNTS;
use crate::display::AccountRow;

use super::panel;

/// Render the accounts table, or the empty placeholder
pub fn render(frame: &mut Frame, accounts: &[AccountRow], area: Rect) {
    let block = panel("Accounts", false);

    if accounts.is_empty() {
        let empty = Paragraph::new(NO_ACCOUNTS)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let widths = [
        Constraint::Length(10), // Account #
        Constraint::Min(16),    // Customer
        Constraint::Length(24), // Balance
    ];

    let header = Row::new(vec![
        Cell::from("Account #").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Customer").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Balance").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = accounts
        .iter()
        .map(|row| {
            let balance_style = if row.balance.overdrawn {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            Row::new(vec![
                Cell::from(row.account_number.as_str()),
                Cell::from(row.customer_name.as_str()),
                Cell::from(row.balance.to_string()).style(balance_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
