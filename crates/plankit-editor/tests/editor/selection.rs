use plankit_core::{Color, Point, Style};
use plankit_editor::{
    EditorState, GridDimensions, Rect, Scene, SelectionManager, ShapeGeometry, Tool,
};

#[test]
fn test_dimensions_in_grid_units() {
    // A 150px wide rectangle on a 50-unit grid reads as 3 units wide.
    let mut scene = Scene::new();
    let id = scene.push_shape(
        ShapeGeometry::Rect(Rect::new(Point::ZERO, 150.0, 100.0)),
        Style::default(),
    );
    let mut selection = SelectionManager::new();
    selection.select(&scene, 50, Some(id));
    assert_eq!(
        selection.derived_dimensions(),
        GridDimensions {
            width: 3,
            height: 2
        }
    );
}

#[test]
fn test_dimensions_round_to_nearest() {
    let mut scene = Scene::new();
    let id = scene.push_shape(
        ShapeGeometry::Rect(Rect::new(Point::ZERO, 130.0, 120.0)),
        Style::default(),
    );
    let mut selection = SelectionManager::new();
    selection.select(&scene, 50, Some(id));
    // 130/50 = 2.6 -> 3, 120/50 = 2.4 -> 2.
    assert_eq!(
        selection.derived_dimensions(),
        GridDimensions {
            width: 3,
            height: 2
        }
    );
}

#[test]
fn test_selection_click_in_session() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    let id = editor.add_from_catalog_at("desk", Point::new(200.0, 200.0)).unwrap();

    // Drawing tools disarmed: clicks select.
    editor.select_tool(Tool::Select);
    editor.pointer_down(200.0, 200.0);
    assert_eq!(editor.selection().selected_id(), Some(id));

    // Empty space clears the selection and the read-outs.
    editor.pointer_down(700.0, 500.0);
    assert_eq!(editor.selection().selected_id(), None);
    assert_eq!(editor.selection().derived_dimensions(), GridDimensions::default());
}

#[test]
fn test_grid_size_change_rescales_readouts() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    let id = editor.add_from_catalog_at("wall", Point::new(300.0, 300.0)).unwrap();
    editor.select_tool(Tool::Select);
    editor.pointer_down(300.0, 300.0);
    assert_eq!(editor.selection().selected_id(), Some(id));

    // The wall is 200x20: at grid 50 it reads 4x0, at grid 100 it reads 2x0.
    assert_eq!(editor.selection().derived_dimensions().width, 4);
    editor.increase_grid_size(); // 50 -> 60
    editor.increase_grid_size(); // 60 -> 70
    editor.increase_grid_size(); // 70 -> 80
    editor.increase_grid_size(); // 80 -> 90
    editor.increase_grid_size(); // 90 -> 100
    assert_eq!(editor.selection().derived_dimensions().width, 2);
}

#[test]
fn test_text_panel_roundtrip_in_session() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    editor.select_tool(Tool::Text);
    editor.pointer_down(100.0, 100.0);
    editor.commit_text_edit("Promo -50%");

    let mut panel = editor.selection().text_panel().unwrap().clone();
    assert_eq!(panel.font_size, 20.0);
    assert!(!panel.bold);

    panel.bold = true;
    panel.fill = Color::new("#FF0000");
    panel.background = Color::new("#FFFF00");
    assert!(editor.apply_text_style(&panel));

    let mirrored = editor.selection().text_panel().unwrap();
    assert!(mirrored.bold);
    assert_eq!(mirrored.fill.as_str(), "#FF0000");
    assert_eq!(mirrored.background.as_str(), "#FFFF00");
}

#[test]
fn test_style_edit_after_delete_is_noop() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    editor.select_tool(Tool::Text);
    editor.pointer_down(100.0, 100.0);
    editor.commit_text_edit("Sortie");

    let panel = editor.selection().text_panel().unwrap().clone();
    let scene_len = editor.scene().len();
    editor.delete_selection().unwrap();
    assert_eq!(editor.scene().len(), scene_len - 1);
    assert!(!editor.apply_text_style(&panel));
}

#[test]
fn test_move_and_scale_selection() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    let id = editor
        .add_from_catalog_at("square-table", Point::new(100.0, 100.0))
        .unwrap();

    assert!(editor.move_selection(50.0, -20.0));
    let (x1, y1, x2, y2) = editor.scene().get(id).unwrap().bounding_box();
    assert_eq!(((x1 + x2) / 2.0, (y1 + y2) / 2.0), (150.0, 80.0));

    assert!(editor.scale_selection(2.0, 2.0));
    let (x1, _, x2, _) = editor.scene().get(id).unwrap().bounding_box();
    assert_eq!(x2 - x1, 80.0);
    // Scaling happens about the entry center.
    assert_eq!((x1 + x2) / 2.0, 150.0);
}
