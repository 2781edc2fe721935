//! In-memory element store for hosts without their own node tree.

use super::{BindableElement, Element, ElementKind, UiHost};
use std::collections::HashMap;

/// Registry of all elements in the UI.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    /// Elements by ID.
    elements: HashMap<u64, Element>,
    /// Element IDs by name.
    names: HashMap<String, u64>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new element.
    pub fn register(&mut self, element: Element) -> u64 {
        let id = element.id;
        if let Some(ref name) = element.name {
            self.names.insert(name.clone(), id);
        }
        self.elements.insert(id, element);
        id
    }

    /// Get an element by ID.
    pub fn get(&self, id: u64) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable element by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Get an element by name.
    pub fn get_by_name(&self, name: &str) -> Option<&Element> {
        self.names.get(name).and_then(|id| self.elements.get(id))
    }

    /// Get a mutable element by name.
    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut Element> {
        let id = self.names.get(name).copied()?;
        self.elements.get_mut(&id)
    }

    /// Get an element ID by name.
    pub fn get_id_by_name(&self, name: &str) -> Option<u64> {
        self.names.get(name).copied()
    }

    /// Remove an element, as the host does when a node is torn down.
    pub fn remove(&mut self, id: u64) -> Option<Element> {
        let element = self.elements.remove(&id)?;
        if let Some(ref name) = element.name {
            self.names.remove(name);
        }
        Some(element)
    }

    /// All element IDs, sorted for deterministic iteration.
    pub fn all_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.elements.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// IDs of all elements of a given kind, sorted.
    pub fn ids_of_kind(&self, kind: ElementKind) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .elements
            .values()
            .filter(|e| e.kind == kind)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl UiHost for ElementRegistry {
    fn for_each_element(&mut self, kind: ElementKind, f: &mut dyn FnMut(&mut dyn BindableElement)) {
        for id in self.ids_of_kind(kind) {
            if let Some(element) = self.elements.get_mut(&id) {
                f(element);
            }
        }
    }

    fn with_element(&mut self, id: u64, f: &mut dyn FnMut(&mut dyn BindableElement)) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                f(element);
                true
            }
            None => false,
        }
    }
}
