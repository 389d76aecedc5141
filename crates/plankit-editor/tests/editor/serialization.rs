use plankit_core::Point;
use plankit_editor::{
    export_file_name, EditorState, PlanDocument, SceneEntry, ShapeGeometry, Tool,
};

fn populated_editor() -> EditorState {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    editor.add_from_catalog_at("room", Point::new(100.0, 100.0)).unwrap();
    editor
        .add_from_catalog_at("table-round-4", Point::new(300.0, 200.0))
        .unwrap();
    editor.select_tool(Tool::Rectangle);
    editor.pointer_down(400.0, 400.0);
    editor.pointer_move(480.0, 450.0);
    editor.pointer_up();
    editor.select_tool(Tool::Text);
    editor.pointer_down(50.0, 50.0);
    editor.commit_text_edit("Entrée");
    editor
}

#[test]
fn test_roundtrip_preserves_scene() {
    let editor = populated_editor();
    let document = editor.to_document();
    let json = document.to_json().unwrap();
    let restored = PlanDocument::from_json(&json).unwrap();
    let scene = restored.restore_scene();

    assert_eq!(scene.len(), editor.scene().len());
    for (original, roundtrip) in editor.scene().iter().zip(scene.iter()) {
        assert_eq!(original.id(), roundtrip.id());
        let (ax1, ay1, ax2, ay2) = original.bounding_box();
        let (bx1, by1, bx2, by2) = roundtrip.bounding_box();
        assert!((ax1 - bx1).abs() < 1e-9);
        assert!((ay1 - by1).abs() < 1e-9);
        assert!((ax2 - bx2).abs() < 1e-9);
        assert!((ay2 - by2).abs() < 1e-9);
    }
    scene.validate().unwrap();
}

#[test]
fn test_roundtrip_preserves_group_membership() {
    let editor = populated_editor();
    let json = editor.export_json().unwrap();
    let scene = PlanDocument::from_json(&json).unwrap().restore_scene();

    let group = scene
        .iter()
        .find_map(|e| match e {
            SceneEntry::Group(g) => Some(g),
            SceneEntry::Shape(_) => None,
        })
        .expect("group survived the round trip");
    assert_eq!(group.children.len(), 5);
    assert!(group.children.iter().all(|c| c.owner_group == Some(group.id)));
}

#[test]
fn test_roundtrip_preserves_text_content() {
    let editor = populated_editor();
    let json = editor.export_json().unwrap();
    let scene = PlanDocument::from_json(&json).unwrap().restore_scene();

    let text = scene
        .iter()
        .find_map(|e| match e {
            SceneEntry::Shape(s) => match &s.geometry {
                ShapeGeometry::Text(t) => Some(t),
                _ => None,
            },
            SceneEntry::Group(_) => None,
        })
        .expect("text survived the round trip");
    assert_eq!(text.content, "Entrée");
}

#[test]
fn test_file_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.json");

    let mut editor = populated_editor();
    editor.set_plan_name("Shop Floor");
    editor.save_to_file(&path).unwrap();
    assert!(!editor.is_modified());

    let mut loaded = EditorState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.plan_name(), "Shop Floor");
    assert_eq!(loaded.scene().len(), editor.scene().len());
    assert_eq!(loaded.grid(), editor.grid());
    assert!(!loaded.is_modified());
}

#[test]
fn test_export_file_name_pattern() {
    let mut editor = EditorState::new();
    editor.set_plan_name("Rayon Frais #2");
    assert_eq!(editor.export_file_name(), "rayon-frais--2_planogram.json");
    assert_eq!(export_file_name("Shop"), "shop_planogram.json");
}

#[test]
fn test_load_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut editor = EditorState::new();
    assert!(editor.load_from_file(&path).is_err());
    // The in-memory session stays usable after a failed load.
    assert!(editor.scene().is_empty());
}
