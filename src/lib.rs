//! UI hints
//!
//! Attaches hover help text to rendered settings-panel elements. A static
//! key/description table drives all lookups; the host signals UI refreshes
//! and value changes, and this crate resolves and assigns the hover-text
//! attribute on matching elements.

pub mod builtin;
pub mod dump;
pub mod element;
pub mod error;
pub mod event;
pub mod resolver;
pub mod table;

pub use element::{BindableElement, Element, ElementKind, ElementRegistry, UiHost};
pub use error::{Error, Result};
pub use resolver::{apply_tooltips, resolve_tooltip, HintBinder};
pub use table::TooltipTable;
