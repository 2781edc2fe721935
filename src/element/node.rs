//! Element - a plain in-memory UI node.

use super::{next_element_id, BindableElement, ElementKind};

/// An in-memory node implementing [`BindableElement`].
///
/// Hosts with their own node type implement the trait directly; this
/// struct backs the bundled [`ElementRegistry`](super::ElementRegistry),
/// the demo binary and the tests.
#[derive(Debug, Clone)]
pub struct Element {
    /// Unique element ID.
    pub id: u64,
    /// Element kind.
    pub kind: ElementKind,
    /// Global name (optional).
    pub name: Option<String>,
    /// Displayed text.
    pub text: String,
    /// Current value (selectable elements).
    pub value: Option<String>,
    /// Class names in defined order.
    pub classes: Vec<String>,
    /// Hover text attribute.
    pub hover_text: Option<String>,
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            id: next_element_id(),
            kind,
            name: None,
            text: text.into(),
            value: None,
            classes: Vec::new(),
            hover_text: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Update the current value, as the host does when the user picks a
    /// new option.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }
}

impl BindableElement for Element {
    fn id(&self) -> u64 {
        self.id
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn label_text(&self) -> &str {
        &self.text
    }

    fn current_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn class_names(&self) -> &[String] {
        &self.classes
    }

    fn hover_text(&self) -> Option<&str> {
        self.hover_text.as_deref()
    }

    fn set_hover_text(&mut self, text: &str) {
        self.hover_text = Some(text.to_string());
    }
}
