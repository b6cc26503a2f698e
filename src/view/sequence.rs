//! Per-panel request sequencing
//!
//! Every load that ends in a panel render takes a ticket first. When the
//! response arrives, the render only happens if no newer ticket has been
//! issued for the same panel, so an old response can never overwrite a newer
//! one.

use std::cell::Cell;

/// Panels that are replaced by server responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Accounts,
    Transactions,
    Balance,
}

impl Panel {
    fn index(self) -> usize {
        match self {
            Self::Accounts => 0,
            Self::Transactions => 1,
            Self::Balance => 2,
        }
    }
}

/// Ticket identifying one pending render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    panel: Panel,
    seq: u64,
}

/// Monotonic sequence counters, one per panel
#[derive(Debug, Default)]
pub struct PanelSequencer {
    latest: [Cell<u64>; 3],
}

impl PanelSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding all earlier ones for the panel
    pub fn begin(&self, panel: Panel) -> Ticket {
        let counter = &self.latest[panel.index()];
        let seq = counter.get() + 1;
        counter.set(seq);
        Ticket { panel, seq }
    }

    /// The newest ticket already issued for the panel, without issuing one
    pub fn latest(&self, panel: Panel) -> Ticket {
        Ticket {
            panel,
            seq: self.latest[panel.index()].get(),
        }
    }

    /// Whether the ticket is still the newest for its panel
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.panel.index()].get() == ticket.seq
    }
}
