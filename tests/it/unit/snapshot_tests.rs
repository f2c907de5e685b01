//! Snapshot tests using the insta crate.
//!
//! These pin the JSON shape consumers see when exporting state, and the
//! debug layout of elements. To update after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use stickerboard::{
    AvailableSticker, EditorConfig, EditorStore, ElementKind, ImageHandle, StickerElement,
};

// ============================================================================
// State Serialization Tests
// ============================================================================

#[test]
fn snapshot_fresh_state() {
    let config = EditorConfig {
        available_stickers: vec![AvailableSticker::new("Star", "/star.svg")],
        ..EditorConfig::default()
    };
    let store = EditorStore::with_config(config);

    insta::assert_json_snapshot!(store.state(), @r#"
    {
      "stickers": [],
      "availableStickers": [
        {
          "name": "Star",
          "src": "/star.svg"
        }
      ],
      "textElements": [],
      "currentTextInput": "",
      "bgImageObj": null,
      "canvasSize": {
        "width": 1024,
        "height": 700
      },
      "maxZIndex": 0
    }
    "#);
}

#[test]
fn snapshot_tracked_fields_only() {
    let mut store = EditorStore::new();
    store.set_bg_image(Some(ImageHandle::new("/bg.png", 800, 600)));
    store.set_max_z_index(2);
    store.set_current_text_input("not tracked");

    insta::assert_json_snapshot!(store.tracked(), @r#"
    {
      "stickers": [],
      "textElements": [],
      "maxZIndex": 2,
      "bgImageObj": {
        "src": "/bg.png",
        "width": 800,
        "height": 600
      }
    }
    "#);
}

#[test]
fn snapshot_element_kind() {
    insta::assert_json_snapshot!(ElementKind::Sticker, @r#""sticker""#);
}

// ============================================================================
// Element Layout Tests
// ============================================================================

#[test]
fn snapshot_sticker_debug() {
    let sticker = StickerElement::new("/a.svg")
        .with_id("a")
        .with_position(10.0, 20.0)
        .with_z_index(3)
        .selected(true);

    insta::assert_debug_snapshot!(sticker, @r#"
    StickerElement {
        id: "a",
        src: "/a.svg",
        position: (
            10.0,
            20.0,
        ),
        size: (
            100.0,
            100.0,
        ),
        rotation: 0.0,
        z_index: 3,
        is_selected: true,
    }
    "#);
}
