use leptos::prelude::*;

use super::{DharmaWord, FetchCycle, FetchState, FetchTicket};

/// Frontend-only reactive state (Leptos signals).
/// Shared state accessible to all components via `use_context()`.
#[derive(Clone, Copy)]
pub struct DharmaState {
    /// Current fetch lifecycle and the ticket that owns it
    pub cycle: RwSignal<FetchCycle>,
    /// Active notification (if any)
    pub notification: RwSignal<Option<String>>,
}

impl DharmaState {
    /// Create a new state with nothing fetched yet
    pub fn new() -> Self {
        Self {
            cycle: RwSignal::new(FetchCycle::default()),
            notification: RwSignal::new(None),
        }
    }

    /// Snapshot of the fetch lifecycle (tracked)
    pub fn fetch_state(&self) -> FetchState {
        self.cycle.with(|cycle| cycle.state().clone())
    }

    /// Clear the displayed word or error and enter loading
    pub fn begin_fetch(&self) -> FetchTicket {
        self.cycle.try_update(FetchCycle::begin).unwrap_or_default()
    }

    /// Apply a fetch outcome; false if `ticket` is no longer current
    pub fn finish_fetch<E>(&self, ticket: FetchTicket, outcome: Result<DharmaWord, E>) -> bool {
        self.cycle
            .try_update(|cycle| cycle.finish(ticket, outcome))
            .unwrap_or(false)
    }

    /// Show a notification (auto-dismiss should be handled by component)
    pub fn show_notification(&self, message: impl Into<String>) {
        self.notification.set(Some(message.into()));
    }

    /// Clear the current notification
    pub fn clear_notification(&self) {
        self.notification.set(None);
    }
}

impl Default for DharmaState {
    fn default() -> Self {
        Self::new()
    }
}
