use plankit_editor::{DrawState, EditorState, ShapeGeometry, Tool};

#[test]
fn test_full_editing_scenario() {
    let mut editor = EditorState::with_viewport(500.0, 300.0);

    // Arm the rectangle tool and drag (10,10) -> (110,60).
    editor.select_tool(Tool::Rectangle);
    editor.pointer_down(10.0, 10.0);
    editor.pointer_move(110.0, 60.0);
    editor.pointer_up();

    assert_eq!(editor.scene().len(), 1);
    let selected = editor.selection().selected_id().expect("live shape selected");
    let entry = editor.scene().get(selected).unwrap();
    assert_eq!(entry.bounding_box(), (10.0, 10.0, 110.0, 60.0));
    assert_eq!(*editor.draw_state(), DrawState::Armed(Tool::Rectangle));
    assert!(editor.is_modified());

    // Grid off and back on: 500x300 at 50 gives 10 vertical, 6 horizontal.
    editor.toggle_grid();
    editor.toggle_grid();
    assert_eq!(editor.grid_overlay().vertical_count(), 10);
    assert_eq!(editor.grid_overlay().horizontal_count(), 6);

    // Selection reads out grid units: 100x50 on a 50 grid is 2x1.
    assert_eq!(editor.selection().derived_dimensions().width, 2);
    assert_eq!(editor.selection().derived_dimensions().height, 1);
}

#[test]
fn test_pointer_conversion_honors_zoom() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    // Wheel up twice: zoom 1.2, anchored at the canvas center.
    editor.handle_wheel(-1.0);
    editor.handle_wheel(-1.0);
    assert!((editor.viewport().zoom() - 1.2).abs() < 1e-9);

    editor.select_tool(Tool::Rectangle);
    editor.pointer_down(400.0, 300.0);
    editor.pointer_up();

    // The canvas center is zoom-invariant, so the shape lands at the
    // scene point that was under it before zooming.
    let id = editor.selection().selected_id().unwrap();
    let (x1, y1, _, _) = editor.scene().get(id).unwrap().bounding_box();
    assert!((x1 - 400.0).abs() < 1e-9);
    assert!((y1 - 300.0).abs() < 1e-9);
}

#[test]
fn test_display_name_tracks_modifications() {
    let mut editor = EditorState::new();
    assert_eq!(editor.display_name(), "Untitled");

    editor.select_tool(Tool::Line);
    editor.pointer_down(0.0, 0.0);
    editor.pointer_move(100.0, 0.0);
    editor.pointer_up();
    assert_eq!(editor.display_name(), "Untitled*");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("floor.json");
    editor.save_to_file(&path).unwrap();
    assert_eq!(editor.display_name(), "floor.json");
}

#[test]
fn test_new_plan_resets_session() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    editor.add_from_catalog("shelf").unwrap();
    editor.select_tool(Tool::Circle);
    assert!(!editor.scene().is_empty());

    editor.new_plan();
    assert!(editor.scene().is_empty());
    assert_eq!(editor.selection().selected_id(), None);
    assert_eq!(*editor.draw_state(), DrawState::Idle);
    assert_eq!(editor.plan_name(), "Untitled");
    assert!(!editor.is_modified());
}

#[test]
fn test_delete_selection_clears_draw_state() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    editor.select_tool(Tool::Text);
    editor.pointer_down(100.0, 100.0);
    assert!(matches!(editor.draw_state(), DrawState::EditingText { .. }));

    editor.delete_selection().unwrap();
    assert_eq!(*editor.draw_state(), DrawState::Armed(Tool::Text));
    assert!(editor.scene().is_empty());
}

#[test]
fn test_svg_export_covers_all_variants() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    editor.add_from_catalog("room").unwrap();
    editor.add_from_catalog("toilet").unwrap();
    editor.add_from_catalog("door-arc").unwrap();
    editor.add_from_catalog("table-rect-6").unwrap();

    editor.select_tool(Tool::Triangle);
    editor.pointer_down(10.0, 10.0);
    editor.pointer_move(60.0, 60.0);
    editor.pointer_up();

    editor.select_tool(Tool::Text);
    editor.pointer_down(200.0, 200.0);
    editor.commit_text_edit("Caisse <1>");

    let svg = editor.export_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<rect"));
    assert!(svg.contains("<ellipse"));
    assert!(svg.contains("<path"));
    assert!(svg.contains("<g transform=\"translate("));
    assert!(svg.contains("<polygon"));
    assert!(svg.contains("Caisse &lt;1&gt;"));
}

#[test]
fn test_text_defaults_flow_into_new_text() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    let mut defaults = editor.text_defaults().clone();
    defaults.font_size = 32.0;
    defaults.underline = true;
    editor.set_text_defaults(defaults);

    editor.select_tool(Tool::Text);
    editor.pointer_down(50.0, 50.0);
    let id = editor.selection().selected_id().unwrap();
    match &editor.scene().get_shape(id).unwrap().geometry {
        ShapeGeometry::Text(text) => {
            assert_eq!(text.style.font_size, 32.0);
            assert!(text.style.underline);
        }
        other => panic!("expected text, got {:?}", other.kind()),
    }
}
