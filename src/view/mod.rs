//! View binding
//!
//! Connects user actions on a presentation surface to ledger operations and
//! renders what comes back.

pub mod binder;
pub mod sequence;
pub mod surface;

pub use binder::{Action, Outcome, ViewBinder};
pub use sequence::{Panel, PanelSequencer};
pub use surface::{Field, Form, Surface};
