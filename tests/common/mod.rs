//! Shared test helpers.

use ui_hints::{Element, ElementKind, ElementRegistry, TooltipTable};

/// Small fixed table covering all three key namespaces.
#[allow(dead_code)]
pub fn demo_table() -> TooltipTable {
    TooltipTable::from_pairs([
        ("Seed", "A value that determines the output of the generator"),
        ("Max frames", "Total number of frames to render"),
        ("2D", "only 2D motion is applied between frames"),
        ("3D", "frames are warped in simulated 3D space"),
        ("motion-preview", "Preview of the configured motion"),
        ("guided-images", "Blend specified images into the animation"),
    ])
}

#[allow(dead_code)]
pub fn labeled(text: &str) -> Element {
    Element::new(ElementKind::Label, text)
}

#[allow(dead_code)]
pub fn select(text: &str, value: &str) -> Element {
    Element::new(ElementKind::Select, text).with_value(value)
}

/// A registry resembling the demo settings panel: two labels, one select,
/// one class-keyed button, one unknown label.
#[allow(dead_code)]
pub fn settings_panel() -> ElementRegistry {
    let mut registry = ElementRegistry::new();
    registry.register(labeled("Seed").with_name("SeedLabel"));
    registry.register(labeled("Max frames").with_name("MaxFrames"));
    registry.register(select("Mode", "2D").with_name("Mode"));
    registry.register(
        Element::new(ElementKind::Button, "Preview")
            .with_name("PreviewButton")
            .with_classes(["motion-preview"]),
    );
    registry.register(labeled("Unknown Field").with_name("Unknown"));
    registry
}
