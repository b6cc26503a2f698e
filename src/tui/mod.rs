//! Terminal User Interface module
//!
//! An interactive surface for the ledger built on ratatui: the three input
//! forms, the balance panel, both tables, and a notification toast.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod surface;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use surface::TuiSurface;
pub use terminal::run_tui;
