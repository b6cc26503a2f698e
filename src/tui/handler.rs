//! Key handling for the TUI
//!
//! Editing keys change the focused field in place. Keys that need the ledger
//! come back as an [`Action`] for the event loop to run.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::view::{Action, Field};

use super::app::App;

/// Handle a key press; returns the action to run, if any
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control_key(app, key.code);
    }

    match key.code {
        KeyCode::Esc => {
            app.binder.notifier().dismiss();
            None
        }
        KeyCode::Tab => {
            app.binder.surface_mut().focus_next();
            None
        }
        KeyCode::BackTab => {
            app.binder.surface_mut().focus_prev();
            None
        }
        KeyCode::Enter => {
            let form = app.binder.surface().focus().form();
            Some(Action::submit(form))
        }
        code => {
            edit_focused(app, code);
            None
        }
    }
}

fn handle_control_key(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('c') | KeyCode::Char('q') => {
            app.quit();
            None
        }
        KeyCode::Char('a') => Some(Action::RefreshAccounts),
        KeyCode::Char('t') => Some(Action::RefreshTransactions),
        _ => None,
    }
}

fn edit_focused(app: &mut App, code: KeyCode) {
    let mut surface = app.binder.surface_mut();
    let focus = surface.focus();

    if focus == Field::TransactionType {
        if matches!(
            code,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
        ) {
            surface.toggle_movement();
        }
        return;
    }

    let Some(input) = surface.input_mut(focus) else {
        return;
    };
    match code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use async_trait::async_trait;

    use crate::client::LedgerClient;
    use crate::display::Formatter;
    use crate::error::{TellerError, TellerResult};
    use crate::protocol::{Movement, Request, Response};
    use crate::status::Notifier;
    use crate::transport::{Endpoint, Transport};
    use crate::tui::surface::TuiSurface;
    use crate::view::{Surface, ViewBinder};

    struct Offline;

    #[async_trait(?Send)]
    impl Endpoint for Offline {
        async fn post(&self, _request: &Request) -> TellerResult<Response> {
            Err(TellerError::Transport("offline".into()))
        }
    }

    fn app() -> App {
        let notifier = Notifier::default();
        let client = LedgerClient::new(Transport::new(Box::new(Offline), notifier.clone()));
        let binder = ViewBinder::new(client, notifier, Formatter::default(), TuiSurface::new());
        App::new(Rc::new(binder), "http://localhost/cgi-bin/bank.cgi")
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> Option<Action> {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = app();
        for c in "Asha".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.binder.surface().read(Field::CustomerName), "Ash");
    }

    #[test]
    fn test_enter_submits_focused_form() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Enter), Some(Action::CreateAccount));

        app.binder.surface_mut().set_focus(Field::Amount);
        assert_eq!(press(&mut app, KeyCode::Enter), Some(Action::Transact));

        press(&mut app, KeyCode::Tab);
        assert_eq!(press(&mut app, KeyCode::Enter), Some(Action::CheckBalance));
    }

    #[test]
    fn test_type_selector_toggles() {
        let mut app = app();
        app.binder.surface_mut().set_focus(Field::TransactionType);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.binder.surface().movement(), Movement::Withdraw);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.binder.surface().movement(), Movement::Withdraw);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.binder.surface().movement(), Movement::Deposit);
    }

    #[test]
    fn test_control_keys() {
        let mut app = app();
        assert_eq!(ctrl(&mut app, 'a'), Some(Action::RefreshAccounts));
        assert_eq!(ctrl(&mut app, 't'), Some(Action::RefreshTransactions));
        assert!(!app.should_quit);
        assert_eq!(ctrl(&mut app, 'q'), None);
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_dismisses_notification() {
        let mut app = app();
        app.binder.notifier().warning("Please enter valid values");
        press(&mut app, KeyCode::Esc);
        assert!(app.binder.notifier().current().is_none());
    }
}
