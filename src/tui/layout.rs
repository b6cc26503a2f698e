//! Layout definitions for the TUI
//!
//! Forms and the balance panel on the left, the two tables on the right,
//! a status bar along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub create_form: Rect,
    pub transaction_form: Rect,
    pub balance_form: Rect,
    pub balance: Rect,
    pub accounts: Rect,
    pub transactions: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(44), // Forms
                Constraint::Min(40),    // Tables
            ])
            .split(vertical[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Create account
                Constraint::Length(5), // Deposit / withdraw
                Constraint::Length(3), // Balance check
                Constraint::Length(3), // Balance panel
                Constraint::Min(0),
            ])
            .split(horizontal[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(horizontal[1]);

        Self {
            create_form: left[0],
            transaction_form: left[1],
            balance_form: left[2],
            balance: left[3],
            accounts: right[0],
            transactions: right[1],
            status_bar: vertical[1],
        }
    }
}

/// Toast area in the top-right corner
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_fit_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.create_form.width, 44);
        assert_eq!(layout.accounts.x, 44);
        assert!(layout.transactions.height > layout.accounts.height);
    }

    #[test]
    fn test_toast_clamped() {
        let toast = toast_rect(50, 5, Rect::new(0, 0, 30, 3));
        assert_eq!(toast, Rect::new(0, 0, 30, 3));

        let toast = toast_rect(50, 5, Rect::new(0, 0, 120, 40));
        assert_eq!(toast, Rect::new(70, 0, 50, 5));
    }
}
