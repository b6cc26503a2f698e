//! Balance panel

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::display::BalancePanel;

use super::panel;

pub fn render(frame: &mut Frame, balance: &BalancePanel, area: Rect) {
    let style = match balance {
        BalancePanel::Blank => Style::default(),
        BalancePanel::Balance { balance, .. } if balance.overdrawn => {
            Style::default().fg(Color::Red)
        }
        BalancePanel::Balance { .. } => Style::default().fg(Color::Green),
        BalancePanel::NotFound => Style::default().fg(Color::Red),
    };

    let paragraph = Paragraph::new(balance.to_string())
        .style(style)
        .block(panel("Balance", false));
    frame.render_widget(paragraph, area);
}
