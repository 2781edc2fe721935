//! Tests for the bulk apply pass.

mod common;

use common::{demo_table, settings_panel};
use ui_hints::{apply_tooltips, dump};

#[test]
fn apply_sets_hover_text_on_matching_elements() {
    let table = demo_table();
    let mut registry = settings_panel();

    apply_tooltips(&mut registry, &table);

    let seed = registry.get_by_name("SeedLabel").unwrap();
    assert_eq!(
        seed.hover_text.as_deref(),
        Some("A value that determines the output of the generator")
    );

    let frames = registry.get_by_name("MaxFrames").unwrap();
    assert_eq!(
        frames.hover_text.as_deref(),
        Some("Total number of frames to render")
    );

    // Select resolves through its value, button through its class.
    let mode = registry.get_by_name("Mode").unwrap();
    assert_eq!(
        mode.hover_text.as_deref(),
        Some("only 2D motion is applied between frames")
    );

    let preview = registry.get_by_name("PreviewButton").unwrap();
    assert_eq!(
        preview.hover_text.as_deref(),
        Some("Preview of the configured motion")
    );
}

#[test]
fn apply_leaves_unmatched_elements_untouched() {
    let table = demo_table();
    let mut registry = settings_panel();

    apply_tooltips(&mut registry, &table);

    let unknown = registry.get_by_name("Unknown").unwrap();
    assert_eq!(unknown.hover_text, None);
}

#[test]
fn apply_preserves_stale_hover_text_on_miss() {
    let table = demo_table();
    let mut registry = settings_panel();

    // Hover text set before the element's label stopped matching.
    let id = registry.get_id_by_name("Unknown").unwrap();
    registry.get_mut(id).unwrap().hover_text = Some("previous description".into());

    apply_tooltips(&mut registry, &table);

    let unknown = registry.get(id).unwrap();
    assert_eq!(unknown.hover_text.as_deref(), Some("previous description"));
}

#[test]
fn apply_is_idempotent_across_redundant_refreshes() {
    let table = demo_table();
    let mut registry = settings_panel();

    apply_tooltips(&mut registry, &table);
    let first = dump::dump_elements(&registry);

    apply_tooltips(&mut registry, &table);
    apply_tooltips(&mut registry, &table);
    let after = dump::dump_elements(&registry);

    assert_eq!(first, after);
}

#[test]
fn apply_on_empty_registry_is_a_no_op() {
    let table = demo_table();
    let mut registry = ui_hints::ElementRegistry::new();

    apply_tooltips(&mut registry, &table);

    assert!(registry.is_empty());
}
