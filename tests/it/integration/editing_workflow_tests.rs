//! Editing Workflow Integration Tests

use crate::helpers::{
    TestStoreBuilder, assert_max_z_covers_elements, assert_sticker_count, assert_sticker_z,
    assert_unique_ids, empty_store, sticker, text,
};
use stickerboard::{
    AvailableSticker, CanvasSize, EditorUpdate, ElementKind, ImageHandle, StickerElement,
    TextElement,
};

#[test]
fn test_new_store_defaults() {
    let store = empty_store();
    let state = store.state();

    assert!(state.stickers().is_empty());
    assert!(state.text_elements().is_empty());
    assert_eq!(state.current_text_input(), "");
    assert!(state.bg_image().is_none());
    assert_eq!(state.canvas_size(), CanvasSize::new(1024, 700));
    assert_eq!(state.max_z_index(), 0);
    assert_eq!(state.available_stickers().len(), 8);
    assert_eq!(store.history_len(), 0);
}

#[test]
fn test_bring_sticker_to_front() {
    let mut store = empty_store();
    store.set_stickers(vec![sticker("a")]);

    let z = store.bring_to_front("a", ElementKind::Sticker);

    assert_eq!(z, 1);
    assert_eq!(store.state().stickers()[0].z_index, 1);
    assert_eq!(store.state().max_z_index(), 1);
}

#[test]
fn test_bring_to_front_increments_on_miss() {
    let mut store = TestStoreBuilder::new().with_sticker("a").build();
    store.set_max_z_index(4);

    store.bring_to_front("missing", ElementKind::Sticker);
    assert_eq!(store.state().max_z_index(), 5);
    assert_sticker_z(store.state(), "a", 0);

    store.bring_to_front("missing", ElementKind::Text);
    assert_eq!(store.state().max_z_index(), 6);
}

#[test]
fn test_bring_to_front_scans_only_requested_kind() {
    let mut store = TestStoreBuilder::new()
        .with_sticker("shared")
        .with_text("shared", "Same id")
        .build();

    store.bring_to_front("shared", ElementKind::Text);

    assert_eq!(store.state().text_elements()[0].z_index, 1);
    assert_sticker_z(store.state(), "shared", 0);
}

#[test]
fn test_bring_to_front_saturates_at_max() {
    let mut store = TestStoreBuilder::new().with_sticker("a").build();
    store.set_max_z_index(i32::MAX);

    assert_eq!(store.bring_to_front("a", ElementKind::Sticker), i32::MAX);
    assert_eq!(store.bring_to_front("a", ElementKind::Sticker), i32::MAX);
    assert_eq!(store.state().max_z_index(), i32::MAX);
    assert_sticker_z(store.state(), "a", i32::MAX);
}

#[test]
fn test_bring_to_front_always_adds_one() {
    let mut store = TestStoreBuilder::new()
        .with_sticker("a")
        .with_sticker("b")
        .with_text("t", "Hello")
        .build();

    let targets = [
        ("a", ElementKind::Sticker),
        ("t", ElementKind::Text),
        ("nope", ElementKind::Sticker),
        ("b", ElementKind::Sticker),
        ("a", ElementKind::Text),
        ("a", ElementKind::Sticker),
    ];
    for (id, kind) in targets {
        let before = store.state().max_z_index();
        store.bring_to_front(id, kind);
        assert_eq!(store.state().max_z_index(), before + 1);
        assert_max_z_covers_elements(store.state());
    }

    assert_sticker_z(store.state(), "a", 6);
    assert_sticker_z(store.state(), "b", 4);
}

#[test]
fn test_clear_selected_stickers() {
    let mut store = TestStoreBuilder::new()
        .with_sticker_at("a", 0, true)
        .with_sticker_at("b", 0, false)
        .build();

    store.clear_selected_stickers();

    assert!(store.state().stickers().iter().all(|s| !s.is_selected));
    assert_eq!(store.state().selected_stickers().count(), 0);
    assert_sticker_count(&store, 2);
}

#[test]
fn test_update_only_touches_supplied_fields() {
    let mut store = TestStoreBuilder::new()
        .with_sticker("a")
        .with_text("t", "Hello")
        .build();
    let before = store.state().clone();

    store.update(EditorUpdate::new().with_current_text_input("hi"));
    let after = store.state();

    assert_eq!(after.current_text_input(), "hi");
    assert!(std::ptr::eq(before.stickers().as_ptr(), after.stickers().as_ptr()));
    assert!(std::ptr::eq(
        before.text_elements().as_ptr(),
        after.text_elements().as_ptr()
    ));
    assert!(std::ptr::eq(
        before.available_stickers().as_ptr(),
        after.available_stickers().as_ptr()
    ));
    assert_eq!(before.canvas_size(), after.canvas_size());
    assert_eq!(before.max_z_index(), after.max_z_index());
}

#[test]
fn test_update_with_empty_collection_replaces() {
    let mut store = TestStoreBuilder::new().with_sticker("a").build();

    store.update(EditorUpdate::new().with_stickers(Vec::new()));

    assert_sticker_count(&store, 0);
}

#[test]
fn test_update_all_fields() {
    let mut store = empty_store();
    let bg = ImageHandle::new("/bg.png", 1024, 700);

    store.update(
        EditorUpdate::new()
            .with_stickers(vec![sticker("a")])
            .with_available_stickers(vec![AvailableSticker::new("Star", "/star.svg")])
            .with_text_elements(vec![text("t", "Hello")])
            .with_current_text_input("draft")
            .with_bg_image(Some(bg.clone()))
            .with_canvas_size(CanvasSize::new(800, 600))
            .with_max_z_index(9),
    );

    let state = store.state();
    assert_eq!(state.stickers().len(), 1);
    assert_eq!(state.available_stickers()[0].name, "Star");
    assert_eq!(state.text_elements()[0].text, "Hello");
    assert_eq!(state.current_text_input(), "draft");
    assert_eq!(state.bg_image(), Some(&bg));
    assert_eq!(state.canvas_size(), CanvasSize::new(800, 600));
    assert_eq!(state.max_z_index(), 9);

    store.update(EditorUpdate::new().with_bg_image(None));
    assert!(store.state().bg_image().is_none());
}

#[test]
fn test_empty_update_changes_nothing() {
    let mut store = TestStoreBuilder::new().with_sticker("a").build();
    let history_before = store.history_len();

    let update = EditorUpdate::new();
    assert!(update.is_empty());
    store.update(update);

    assert_sticker_count(&store, 1);
    assert_eq!(store.history_len(), history_before);
}

#[test]
fn test_functional_append_keeps_ids_unique() {
    let mut store = empty_store();

    for _ in 0..20 {
        let next = StickerElement::new("/star.svg");
        store.update_stickers(|prev| {
            let mut stickers = prev.to_vec();
            stickers.push(next);
            stickers
        });
        let next_text = TextElement::new("note");
        store.update_text_elements(|prev| [prev, std::slice::from_ref(&next_text)].concat());
    }

    assert_sticker_count(&store, 20);
    assert_eq!(store.state().text_elements().len(), 20);
    assert_unique_ids(store.state());
}

#[test]
fn test_palette_extends_catalog() {
    let mut store = empty_store();
    let before = store.state().available_stickers().len();

    store.update_available_stickers(|prev| {
        let mut catalog = prev.to_vec();
        catalog.push(AvailableSticker::new("Heart", "/heart.svg"));
        catalog
    });

    assert_eq!(store.state().available_stickers().len(), before + 1);
    let placed = store.state().available_stickers()[before].instantiate();
    assert_eq!(placed.src, "/heart.svg");
}

#[test]
fn test_malformed_elements_accepted_verbatim() {
    let mut store = empty_store();
    let odd = StickerElement::new("")
        .with_id("")
        .with_size(-10.0, 0.0)
        .with_z_index(-3);

    store.set_stickers(vec![odd.clone(), odd.clone()]);

    assert_sticker_count(&store, 2);
    assert_eq!(store.state().stickers()[0], odd);
}

#[test]
fn test_drag_gesture_sequence() {
    let mut store = TestStoreBuilder::new()
        .with_sticker("a")
        .with_sticker("b")
        .build();

    // Select, raise and move "b" like the canvas view does on drag
    store.update_stickers(|prev| {
        prev.iter()
            .map(|s| StickerElement {
                is_selected: s.id == "b",
                ..s.clone()
            })
            .collect()
    });
    store.bring_to_front("b", ElementKind::Sticker);
    store.update_stickers(|prev| {
        prev.iter()
            .map(|s| {
                if s.id == "b" {
                    s.clone().with_position(120.0, 80.0)
                } else {
                    s.clone()
                }
            })
            .collect()
    });

    let b = store.state().sticker("b").unwrap();
    assert!(b.is_selected);
    assert_eq!(b.z_index, 1);
    assert_eq!(b.position, (120.0, 80.0));

    store.clear_selected_stickers();
    assert!(!store.state().sticker("b").unwrap().is_selected);
}
