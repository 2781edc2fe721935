//! Element dump diagnostics.

use crate::element::ElementRegistry;
use std::fmt::Write;

/// Render the registry as a deterministic text listing, one element per
/// line in ID order.
pub fn dump_elements(registry: &ElementRegistry) -> String {
    let mut out = String::new();
    for id in registry.all_ids() {
        let Some(e) = registry.get(id) else { continue };
        let _ = write!(out, "#{} {:<8}", e.id, e.kind.as_str());
        if let Some(ref name) = e.name {
            let _ = write!(out, " [{}]", name);
        }
        let _ = write!(out, " {:?}", e.text);
        if let Some(ref value) = e.value {
            let _ = write!(out, " value={:?}", value);
        }
        if !e.classes.is_empty() {
            let _ = write!(out, " classes={:?}", e.classes);
        }
        match e.hover_text {
            Some(ref hover) => {
                let _ = writeln!(out, " hover={:?}", hover);
            }
            None => {
                let _ = writeln!(out, " hover=(none)");
            }
        }
    }
    out
}
