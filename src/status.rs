//! Status notifier
//!
//! A single notification slot shared by everything that reports to the user.
//! A new notification replaces whatever is showing. Each notification stays
//! visible for a while, fades, and then the slot clears; the user can dismiss
//! it earlier.
//!
//! The notifier is a cheap cloneable handle. All clones share the slot, and
//! everything runs on one thread, so the handle is `Rc`-based.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// Title shown with the message
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Danger => "Error",
        }
    }

    /// Whether this severity reports a problem
    pub fn is_problem(&self) -> bool {
        matches!(self, Self::Warning | Self::Danger)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// Lifecycle phase of the notification in the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Fading,
    Expired,
}

/// How long notifications live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Fully visible period
    pub display: Duration,
    /// Fade step before the slot clears
    pub fade: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            display: Duration::from_secs(5),
            fade: Duration::from_millis(150),
        }
    }
}

/// A notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// When it entered the slot
    pub created_at: Instant,
}

impl Notification {
    /// Phase at `now` under the given timing
    pub fn phase_at(&self, now: Instant, timing: Timing) -> Phase {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < timing.display {
            Phase::Visible
        } else if elapsed < timing.display + timing.fade {
            Phase::Fading
        } else {
            Phase::Expired
        }
    }
}

#[derive(Debug)]
struct Slot {
    current: Option<Notification>,
    timing: Timing,
    issued: u64,
}

/// Shared handle to the notification slot
#[derive(Debug, Clone)]
pub struct Notifier {
    slot: Rc<RefCell<Slot>>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl Notifier {
    pub fn new(timing: Timing) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                current: None,
                timing,
                issued: 0,
            })),
        }
    }

    /// Put a notification in the slot, superseding any current one
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!(%severity, message = %message, "Notification");

        let mut slot = self.slot.borrow_mut();
        slot.current = Some(Notification {
            message,
            severity,
            created_at: Instant::now(),
        });
        slot.issued += 1;
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, Severity::Warning);
    }

    pub fn danger(&self, message: impl Into<String>) {
        self.notify(message, Severity::Danger);
    }

    /// Remove the current notification immediately
    pub fn dismiss(&self) {
        self.slot.borrow_mut().current = None;
    }

    /// Advance the lifecycle; clears the slot once the fade has finished
    ///
    /// Returns true if the slot was cleared by this call.
    pub fn tick(&self, now: Instant) -> bool {
        let mut slot = self.slot.borrow_mut();
        let timing = slot.timing;
        let expired = slot
            .current
            .as_ref()
            .is_some_and(|n| n.phase_at(now, timing) == Phase::Expired);
        if expired {
            slot.current = None;
        }
        expired
    }

    /// The notification in the slot, if any
    pub fn current(&self) -> Option<Notification> {
        self.slot.borrow().current.clone()
    }

    /// The notification in the slot together with its phase at `now`
    pub fn showing(&self, now: Instant) -> Option<(Notification, Phase)> {
        let slot = self.slot.borrow();
        slot.current
            .as_ref()
            .map(|n| (n.clone(), n.phase_at(now, slot.timing)))
    }

    /// How many notifications have been issued since creation
    pub fn issued(&self) -> u64 {
        self.slot.borrow().issued
    }

    pub fn timing(&self) -> Timing {
        self.slot.borrow().timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_replaces_current() {
        let notifier = Notifier::default();
        notifier.info("First");
        notifier.danger("Second");

        let current = notifier.current().unwrap();
        assert_eq!(current.message, "Second");
        assert_eq!(current.severity, Severity::Danger);
        assert_eq!(notifier.issued(), 2);
    }

    #[test]
    fn test_lifecycle_phases() {
        let notifier = Notifier::default();
        notifier.success("Saved");
        let created = notifier.current().unwrap().created_at;

        let phase = |offset: Duration| notifier.showing(created + offset).unwrap().1;
        assert_eq!(phase(Duration::from_millis(4999)), Phase::Visible);
        assert_eq!(phase(Duration::from_millis(5000)), Phase::Fading);
        assert_eq!(phase(Duration::from_millis(5149)), Phase::Fading);
        assert_eq!(phase(Duration::from_millis(5150)), Phase::Expired);
    }

    #[test]
    fn test_tick_clears_after_fade() {
        let notifier = Notifier::default();
        notifier.warning("Careful");
        let created = notifier.current().unwrap().created_at;

        assert!(!notifier.tick(created + Duration::from_millis(5100)));
        assert!(notifier.current().is_some());

        assert!(notifier.tick(created + Duration::from_millis(5150)));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_dismiss_is_immediate() {
        let notifier = Notifier::default();
        notifier.info("Hello");
        notifier.dismiss();
        assert!(notifier.current().is_none());
        assert!(!notifier.tick(Instant::now()));
    }

    #[test]
    fn test_custom_timing() {
        let notifier = Notifier::new(Timing {
            display: Duration::from_millis(10),
            fade: Duration::from_millis(5),
        });
        notifier.info("Quick");
        let created = notifier.current().unwrap().created_at;
        assert!(notifier.tick(created + Duration::from_millis(15)));
    }

    #[test]
    fn test_clones_share_slot() {
        let notifier = Notifier::default();
        let other = notifier.clone();
        other.danger("Shared");
        assert_eq!(notifier.current().unwrap().message, "Shared");
        assert!(Severity::Danger.is_problem());
        assert!(!Severity::Success.is_problem());
    }
}
