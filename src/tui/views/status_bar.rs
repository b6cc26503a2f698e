//! Status bar view
//!
//! Shows the endpoint, the latest notification, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::widgets::notification::color;

const HINTS: &str = " Tab:Next  Enter:Submit  ^A/^T:Refresh  Esc:Dismiss  ^Q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Endpoint: ", Style::default().fg(Color::White)),
        Span::styled(app.endpoint.as_str(), Style::default().fg(Color::Cyan)),
    ];

    if let Some(notification) = app.binder.notifier().current() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            notification.message,
            Style::default().fg(color(notification.severity)),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
