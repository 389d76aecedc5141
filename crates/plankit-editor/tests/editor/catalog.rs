use plankit_core::{CatalogError, Point};
use plankit_editor::{Catalog, EditorState, SceneEntry, ShapeGeometry};

#[test]
fn test_unknown_template_leaves_scene_unchanged() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    let err = editor.add_from_catalog("hot-tub").unwrap_err();
    assert!(matches!(
        err,
        plankit_core::Error::Catalog(CatalogError::UnknownTemplate(_))
    ));
    assert!(editor.scene().is_empty());
    assert_eq!(editor.selection().selected_id(), None);
}

#[test]
fn test_instantiation_appends_at_z_tail_and_selects() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    let first = editor.add_from_catalog("room").unwrap();
    let second = editor.add_from_catalog("desk").unwrap();

    let order: Vec<_> = editor.scene().iter().map(|e| e.id()).collect();
    assert_eq!(order, vec![first, second]);
    assert_eq!(editor.selection().selected_id(), Some(second));
}

#[test]
fn test_default_placement_is_viewport_center() {
    let mut editor = EditorState::with_viewport(800.0, 600.0);
    let id = editor.add_from_catalog("circle").unwrap();
    let (x1, y1, x2, y2) = editor.scene().get(id).unwrap().bounding_box();
    assert_eq!(((x1 + x2) / 2.0, (y1 + y2) / 2.0), (400.0, 300.0));
}

#[test]
fn test_instantiating_twice_yields_fresh_ids() {
    let catalog = Catalog::builtin();
    let a = catalog
        .instantiate("window-double", Point::new(50.0, 50.0))
        .unwrap();
    let b = catalog
        .instantiate("window-double", Point::new(50.0, 50.0))
        .unwrap();

    assert_ne!(a.id(), b.id());
    assert_eq!(a.bounding_box(), b.bounding_box());
    match (&a, &b) {
        (SceneEntry::Group(ga), SceneEntry::Group(gb)) => {
            for (ca, cb) in ga.children.iter().zip(&gb.children) {
                assert_ne!(ca.id, cb.id);
                assert_eq!(ca.geometry, cb.geometry);
                assert_eq!(ca.style, cb.style);
            }
        }
        _ => panic!("window-double must instantiate as a group"),
    }
}

#[test]
fn test_instantiation_does_not_mutate_template() {
    let catalog = Catalog::builtin();
    let before = match &catalog.get("room").unwrap().spec {
        plankit_editor::TemplateSpec::Single(part) => part.geometry.clone(),
        _ => panic!("room is a single template"),
    };

    let mut editor = EditorState::with_viewport(800.0, 600.0);
    let id = editor.add_from_catalog("room").unwrap();
    editor.move_selection(500.0, 500.0);
    editor.scale_selection(3.0, 3.0);
    assert!(editor.scene().contains(id));

    let after = match &catalog.get("room").unwrap().spec {
        plankit_editor::TemplateSpec::Single(part) => part.geometry.clone(),
        _ => unreachable!(),
    };
    assert_eq!(before, after);
}

#[test]
fn test_dashed_wall_template_carries_dash() {
    let entry = Catalog::builtin()
        .instantiate("wall-h-dashed", Point::ZERO)
        .unwrap();
    match entry {
        SceneEntry::Shape(shape) => {
            assert_eq!(shape.style.dash.as_deref(), Some(&[5.0, 5.0][..]));
            assert!(matches!(shape.geometry, ShapeGeometry::Line(_)));
        }
        SceneEntry::Group(_) => panic!("dashed wall is a single shape"),
    }
}

#[test]
fn test_door_arc_uses_arc_command() {
    let entry = Catalog::builtin().instantiate("door-arc", Point::ZERO).unwrap();
    let SceneEntry::Shape(shape) = entry else {
        panic!("door-arc is a single shape");
    };
    let ShapeGeometry::Path(path) = &shape.geometry else {
        panic!("door-arc is a path");
    };
    assert!(path
        .commands
        .iter()
        .any(|c| matches!(c, plankit_editor::PathCommand::Arc { rx, .. } if *rx == 50.0)));
}

#[test]
fn test_search_filters_registry_order() {
    let catalog = Catalog::builtin();
    let walls = catalog.search("wall");
    assert_eq!(walls.first().map(|t| t.id), Some("wall-h"));
    assert!(walls.iter().all(|t| t.id.contains("wall")));
    assert!(catalog.search("").len() >= catalog.search("wall").len());
}
