//! TUI Views module
//!
//! Draws the three forms, the balance panel, both tables, the status bar and
//! the notification toast from the surface state.

pub mod accounts;
pub mod balance;
pub mod forms;
pub mod status_bar;
pub mod transactions;

use std::time::Instant;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use super::app::App;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    {
        let surface = app.binder.surface();
        forms::render(frame, &surface, &layout);
        balance::render(frame, surface.balance(), layout.balance);
        accounts::render(frame, surface.accounts(), layout.accounts);
        transactions::render(frame, surface.transactions(), layout.transactions);
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some((notification, phase)) = app.binder.notifier().showing(Instant::now()) {
        let area = toast_rect(50, 5, frame.area());
        frame.render_widget(NotificationWidget::new(&notification, phase), area);
    }
}

/// Bordered block with a bold title
pub(crate) fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::White };
    Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}
