//! Tests for change bindings on selectable elements.

mod common;

use common::{demo_table, select, settings_panel};
use ui_hints::{BindableElement, HintBinder};

#[test]
fn ui_updated_binds_every_rendered_select() {
    let mut binder = HintBinder::new(demo_table());
    let mut registry = settings_panel();

    binder.ui_updated(&mut registry);

    assert_eq!(binder.bound_count(), 1);
    let id = registry.get_id_by_name("Mode").unwrap();
    assert!(binder.is_bound(id));
}

#[test]
fn rebinding_on_redundant_refresh_does_not_stack_handlers() {
    let mut binder = HintBinder::new(demo_table());
    let mut registry = settings_panel();

    binder.ui_updated(&mut registry);
    binder.ui_updated(&mut registry);
    binder.ui_updated(&mut registry);

    assert_eq!(binder.bound_count(), 1);
}

#[test]
fn bind_select_twice_is_a_no_op() {
    let mut binder = HintBinder::new(demo_table());
    let element = select("Mode", "2D");

    assert!(binder.bind_select(&element));
    assert!(!binder.bind_select(&element));
    assert_eq!(binder.bound_count(), 1);
}

#[test]
fn change_to_known_value_sets_its_description() {
    let mut binder = HintBinder::new(demo_table());
    let mut element = select("Mode", "2D");
    binder.bind_select(&element);

    element.set_value("3D");
    binder.select_changed(&mut element);

    assert_eq!(
        element.hover_text(),
        Some("frames are warped in simulated 3D space")
    );
}

#[test]
fn change_to_unknown_value_clears_hover_text() {
    let mut binder = HintBinder::new(demo_table());
    let mut element = select("Mode", "2D");
    binder.bind_select(&element);

    binder.select_changed(&mut element);
    assert_eq!(
        element.hover_text(),
        Some("only 2D motion is applied between frames")
    );

    // Unlike the bulk pass, the change handler must not leave the stale
    // "2D" description in place.
    element.set_value("Video Input");
    binder.select_changed(&mut element);
    assert_eq!(element.hover_text(), Some(""));
}

#[test]
fn change_on_unbound_element_is_ignored() {
    let binder = HintBinder::new(demo_table());
    let mut element = select("Mode", "2D");

    binder.select_changed(&mut element);

    assert_eq!(element.hover_text(), None);
}

#[test]
fn value_changed_dispatches_through_the_host() {
    let mut binder = HintBinder::new(demo_table());
    let mut registry = settings_panel();
    binder.ui_updated(&mut registry);

    let id = registry.get_id_by_name("Mode").unwrap();
    registry.get_mut(id).unwrap().set_value("3D");

    assert!(binder.value_changed(id, &mut registry));
    let mode = registry.get(id).unwrap();
    assert_eq!(
        mode.hover_text.as_deref(),
        Some("frames are warped in simulated 3D space")
    );
}

#[test]
fn value_changed_for_missing_element_returns_false() {
    let binder = HintBinder::new(demo_table());
    let mut registry = settings_panel();

    assert!(!binder.value_changed(u64::MAX, &mut registry));
}

#[test]
fn unbind_releases_a_torn_down_element() {
    let mut binder = HintBinder::new(demo_table());
    let element = select("Mode", "2D");
    binder.bind_select(&element);

    assert!(binder.unbind(element.id()));
    assert!(!binder.is_bound(element.id()));
    assert!(!binder.unbind(element.id()));
}
