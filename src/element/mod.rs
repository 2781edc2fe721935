//! Bindable-element abstraction over the host's rendered UI nodes.

mod node;
mod registry;

pub use node::Element;
pub use registry::ElementRegistry;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique element ID.
pub fn next_element_id() -> u64 {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Element kinds the resolver scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Label,
    Button,
    Checkbox,
    Select,
}

impl ElementKind {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        // Host layouts use both PascalCase ("Select") and lowercase
        // ("select") for kind names, so match case-insensitively.
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "label" | "span" => Some(Self::Label),
            "button" => Some(Self::Button),
            "checkbox" => Some(Self::Checkbox),
            "select" | "dropdown" => Some(Self::Select),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "Label",
            Self::Button => "Button",
            Self::Checkbox => "Checkbox",
            Self::Select => "Select",
        }
    }

    /// Kinds whose display text participates in the bulk tooltip pass.
    pub fn bears_label(&self) -> bool {
        matches!(self, Self::Label | Self::Button | Self::Checkbox | Self::Select)
    }

    /// Kinds that carry a user-selectable value.
    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select)
    }

    /// All kinds, in scan order.
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Label,
        ElementKind::Button,
        ElementKind::Checkbox,
        ElementKind::Select,
    ];
}

/// A rendered UI node whose hover text can be resolved and assigned.
///
/// The host's rendering framework owns the node; this crate only reads its
/// text, value and class names, and writes the hover-text attribute.
pub trait BindableElement {
    /// Unique element ID, stable for the node's lifetime.
    fn id(&self) -> u64;

    /// Element kind.
    fn kind(&self) -> ElementKind;

    /// Displayed text (label caption, button text).
    fn label_text(&self) -> &str;

    /// Current value, for selectable-option elements.
    fn current_value(&self) -> Option<&str>;

    /// Class names in their defined order.
    fn class_names(&self) -> &[String];

    /// Current hover text, if any has been set.
    fn hover_text(&self) -> Option<&str>;

    /// Assign the hover-text attribute.
    fn set_hover_text(&mut self, text: &str);
}

/// Host-side view of the rendered UI.
///
/// The resolver never creates or destroys elements; it asks the host to
/// enumerate what is currently rendered and visits nodes in place.
pub trait UiHost {
    /// Visit every currently rendered element of the given kind.
    fn for_each_element(&mut self, kind: ElementKind, f: &mut dyn FnMut(&mut dyn BindableElement));

    /// Visit one element by ID. Returns false if no such element exists.
    fn with_element(&mut self, id: u64, f: &mut dyn FnMut(&mut dyn BindableElement)) -> bool;
}
