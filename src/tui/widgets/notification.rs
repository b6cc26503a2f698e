//! Toast notification widget
//!
//! Draws the notifier's current notification. A fading notification is
//! drawn dimmed for its last moments before the slot clears.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::status::{Notification, Phase, Severity};

/// Color for a severity
pub fn color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Blue,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}

/// Icon shown before the title
pub fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "i",
        Severity::Success => "+",
        Severity::Warning => "!",
        Severity::Danger => "x",
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    phase: Phase,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, phase: Phase) -> Self {
        Self {
            notification,
            phase,
        }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.phase == Phase::Expired {
            return;
        }

        let severity = self.notification.severity;
        let mut accent = Style::default().fg(color(severity));
        let mut text = Style::default().fg(Color::White);
        if self.phase == Phase::Fading {
            accent = accent.add_modifier(Modifier::DIM);
            text = text.add_modifier(Modifier::DIM);
        }

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(accent)
            .title(format!(" {} {} ", icon(severity), severity.title()))
            .title_style(accent.add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(text)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn notification(severity: Severity) -> Notification {
        Notification {
            message: "Please enter valid values".into(),
            severity,
            created_at: Instant::now(),
        }
    }

    fn rendered(buf: &Buffer) -> String {
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_colors() {
        assert_eq!(color(Severity::Info), Color::Blue);
        assert_eq!(color(Severity::Success), Color::Green);
        assert_eq!(color(Severity::Warning), Color::Yellow);
        assert_eq!(color(Severity::Danger), Color::Red);
    }

    #[test]
    fn test_renders_title_and_message() {
        let n = notification(Severity::Warning);
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        NotificationWidget::new(&n, Phase::Visible).render(area, &mut buf);

        let text = rendered(&buf);
        assert!(text.contains("Warning"));
        assert!(text.contains("Please enter"));
    }

    #[test]
    fn test_expired_draws_nothing() {
        let n = notification(Severity::Danger);
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        NotificationWidget::new(&n, Phase::Expired).render(area, &mut buf);

        assert!(rendered(&buf).trim().is_empty());
    }
}
