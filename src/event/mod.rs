//! Host notification plumbing.
//!
//! The host pushes events as its UI refreshes or a selectable value
//! changes; [`HintBinder::pump`](crate::resolver::HintBinder::pump) drains
//! the queue synchronously inside the notification.

/// Event names the binder reacts to.
pub mod events {
    /// The UI has been (re)rendered or updated.
    pub const UI_UPDATED: &str = "UI_UPDATED";
    /// A selectable element's value changed.
    pub const VALUE_CHANGED: &str = "VALUE_CHANGED";
}

/// An event with an optional subject element.
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub name: String,
    /// Element the event concerns, for per-element events.
    pub element: Option<u64>,
}

impl UiEvent {
    pub fn ui_updated() -> Self {
        Self {
            name: events::UI_UPDATED.to_string(),
            element: None,
        }
    }

    pub fn value_changed(element_id: u64) -> Self {
        Self {
            name: events::VALUE_CHANGED.to_string(),
            element: Some(element_id),
        }
    }
}

/// Event queue for pending events.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<UiEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: UiEvent) {
        self.pending.push(event);
    }

    pub fn push_simple(&mut self, name: &str) {
        self.pending.push(UiEvent {
            name: name.to_string(),
            element: None,
        });
    }

    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
