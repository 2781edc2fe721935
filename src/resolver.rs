//! Tooltip resolution and hover-text binding.
//!
//! Runs synchronously inside the host's UI-update notification, to
//! completion, before returning control. Every operation here is
//! idempotent: redundant refresh notifications produce the same
//! observable state.

use crate::element::{BindableElement, ElementKind, UiHost};
use crate::event::{events, EventQueue};
use crate::table::TooltipTable;
use std::collections::HashSet;

/// Resolve the hover text for one element.
///
/// Lookup precedence is fixed: displayed text first, then current value,
/// then the element's class names in their defined order. The three key
/// namespaces share one table, so a value key can shadow a class key on
/// the same element; the precedence order is what decides.
///
/// A miss on every namespace is normal and yields `None`.
pub fn resolve_tooltip<'t>(
    element: &dyn BindableElement,
    table: &'t TooltipTable,
) -> Option<&'t str> {
    if let Some(hint) = table.get(element.label_text()) {
        return Some(hint);
    }
    if let Some(hint) = element.current_value().and_then(|v| table.get(v)) {
        return Some(hint);
    }
    element.class_names().iter().find_map(|c| table.get(c))
}

/// Bulk pass: resolve and assign hover text for every label-bearing and
/// selectable element the host currently renders.
///
/// Elements that resolve to nothing keep whatever hover text they already
/// have; the bulk pass never clears.
pub fn apply_tooltips(host: &mut dyn UiHost, table: &TooltipTable) {
    for kind in ElementKind::ALL {
        if !kind.bears_label() {
            continue;
        }
        host.for_each_element(kind, &mut |element| {
            if let Some(hint) = resolve_tooltip(&*element, table) {
                element.set_hover_text(hint);
            }
        });
    }
}

/// Owns the injected tooltip table and the change-binding bookkeeping for
/// selectable elements.
///
/// The table is built once at startup and read-only from here on. The
/// binder tracks which selectables already have a change binding so that
/// rebinding on every refresh stays a no-op.
#[derive(Debug, Default)]
pub struct HintBinder {
    table: TooltipTable,
    bound_selects: HashSet<u64>,
}

impl HintBinder {
    pub fn new(table: TooltipTable) -> Self {
        Self {
            table,
            bound_selects: HashSet::new(),
        }
    }

    pub fn table(&self) -> &TooltipTable {
        &self.table
    }

    /// React to a UI refresh: run the bulk pass, then make sure every
    /// currently rendered selectable has a change binding.
    ///
    /// The host may signal refreshes repeatedly and redundantly; calling
    /// this any number of times with the same UI yields the same state.
    pub fn ui_updated(&mut self, host: &mut dyn UiHost) {
        apply_tooltips(host, &self.table);

        let bound = &mut self.bound_selects;
        let mut new_bindings = 0usize;
        host.for_each_element(ElementKind::Select, &mut |element| {
            if bound.insert(element.id()) {
                new_bindings += 1;
            }
        });
        if new_bindings > 0 {
            tracing::debug!("Bound change handlers for {} select element(s)", new_bindings);
        }
    }

    /// Attach a change binding to one selectable element.
    ///
    /// Returns false without doing anything if a binding is already
    /// present, so repeated binding never stacks handlers.
    pub fn bind_select(&mut self, element: &dyn BindableElement) -> bool {
        self.bound_selects.insert(element.id())
    }

    /// Whether a selectable element currently has a change binding.
    pub fn is_bound(&self, element_id: u64) -> bool {
        self.bound_selects.contains(&element_id)
    }

    /// Number of active change bindings.
    pub fn bound_count(&self) -> usize {
        self.bound_selects.len()
    }

    /// Release the binding for an element the host has torn down.
    pub fn unbind(&mut self, element_id: u64) -> bool {
        self.bound_selects.remove(&element_id)
    }

    /// Change-handler path: the bound element's value changed, so re-look
    /// up by the new value.
    ///
    /// Unlike the bulk pass, a miss here sets the hover text to the empty
    /// string rather than leaving a stale description for the previous
    /// value. Elements without a binding are ignored.
    pub fn select_changed(&self, element: &mut dyn BindableElement) {
        if !self.bound_selects.contains(&element.id()) {
            return;
        }
        let hint = element
            .current_value()
            .and_then(|v| self.table.get(v))
            .unwrap_or("");
        element.set_hover_text(hint);
    }

    /// Dispatch a value-change notification by element ID.
    ///
    /// Returns false if the host no longer renders the element.
    pub fn value_changed(&self, element_id: u64, host: &mut dyn UiHost) -> bool {
        host.with_element(element_id, &mut |element| self.select_changed(element))
    }

    /// Drain the event queue and dispatch each notification in order.
    pub fn pump(&mut self, queue: &mut EventQueue, host: &mut dyn UiHost) {
        for event in queue.drain() {
            match event.name.as_str() {
                events::UI_UPDATED => self.ui_updated(host),
                events::VALUE_CHANGED => {
                    if let Some(id) = event.element {
                        self.value_changed(id, host);
                    }
                }
                other => {
                    tracing::debug!("Ignoring unknown UI event {:?}", other);
                }
            }
        }
    }
}
