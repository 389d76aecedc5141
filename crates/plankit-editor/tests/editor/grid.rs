use plankit_core::Size;
use plankit_editor::grid::{self, GridSettings};
use plankit_editor::EditorState;

#[test]
fn test_line_counts_match_ceil() {
    let cases = [
        (500.0, 300.0, 50, 10, 6),
        (512.0, 300.0, 50, 11, 6),
        (100.0, 100.0, 10, 10, 10),
        (99.0, 101.0, 20, 5, 6),
    ];
    for (w, h, size, vertical, horizontal) in cases {
        let overlay = grid::regenerate(
            GridSettings {
                size,
                visible: true,
            },
            Size::new(w, h),
        );
        assert_eq!(overlay.vertical_count(), vertical, "{w}x{h}/{size}");
        assert_eq!(overlay.horizontal_count(), horizontal, "{w}x{h}/{size}");
    }
}

#[test]
fn test_toggle_off_then_on_regenerates() {
    let mut editor = EditorState::with_viewport(500.0, 300.0);
    assert!(editor.grid().visible);
    assert!(!editor.grid_overlay().lines.is_empty());

    editor.toggle_grid();
    assert!(!editor.grid().visible);
    assert!(editor.grid_overlay().lines.is_empty());

    editor.toggle_grid();
    assert_eq!(editor.grid_overlay().vertical_count(), 10);
    assert_eq!(editor.grid_overlay().horizontal_count(), 6);
}

#[test]
fn test_resize_triggers_regeneration() {
    let mut editor = EditorState::with_viewport(500.0, 300.0);
    editor.resize(250.0, 300.0);
    assert_eq!(editor.grid_overlay().vertical_count(), 5);
    assert_eq!(editor.grid_overlay().horizontal_count(), 6);
}

#[test]
fn test_grid_size_stepping_clamps_at_minimum() {
    let mut editor = EditorState::with_viewport(500.0, 300.0);
    editor.decrease_grid_size(); // 50 -> 40
    editor.decrease_grid_size(); // 40 -> 30
    editor.decrease_grid_size(); // 30 -> 20
    editor.decrease_grid_size(); // 20 -> 10
    editor.decrease_grid_size(); // clamped
    assert_eq!(editor.grid().size, 10);

    editor.increase_grid_size();
    assert_eq!(editor.grid().size, 20);
    assert_eq!(editor.grid_overlay().vertical_count(), 25);
}

#[test]
fn test_overlay_is_not_a_scene_entry() {
    let editor = EditorState::with_viewport(500.0, 300.0);
    // The overlay lives outside the scene; user shapes can never be
    // confused with guide lines.
    assert!(editor.scene().is_empty());
    assert!(!editor.grid_overlay().lines.is_empty());
}
