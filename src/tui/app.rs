//! Application state for the TUI

use std::rc::Rc;

use crate::view::ViewBinder;

use super::surface::TuiSurface;

/// Main application state
pub struct App {
    /// The bound view; its surface holds everything drawn
    pub binder: Rc<ViewBinder<TuiSurface>>,

    /// Endpoint shown in the status bar
    pub endpoint: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(binder: Rc<ViewBinder<TuiSurface>>, endpoint: impl Into<String>) -> Self {
        Self {
            binder,
            endpoint: endpoint.into(),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
