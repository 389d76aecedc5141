use plankit_core::{Point, TextStyle};
use plankit_editor::tools::{self, DEFAULT_TEXT_CONTENT};
use plankit_editor::{
    DrawEffect, DrawState, PathCommand, PointerEvent, Scene, ShapeGeometry, Tool,
};

fn defaults() -> TextStyle {
    TextStyle::default()
}

fn drag(
    scene: &mut Scene,
    tool: Tool,
    from: Point,
    to: Point,
) -> (DrawState, uuid::Uuid) {
    let (state, effects) = tools::transition(
        DrawState::Armed(tool),
        PointerEvent::Down(from),
        scene,
        &defaults(),
    );
    let id = match effects[0] {
        DrawEffect::ShapeCreated(id) => id,
        _ => panic!("expected shape creation"),
    };
    let (state, _) = tools::transition(state, PointerEvent::Move(to), scene, &defaults());
    let (state, _) = tools::transition(state, PointerEvent::Up, scene, &defaults());
    (state, id)
}

#[test]
fn test_dashed_line_gets_dash_pattern() {
    let mut scene = Scene::new();
    let (_, id) = drag(
        &mut scene,
        Tool::DashedLine,
        Point::new(0.0, 0.0),
        Point::new(60.0, 0.0),
    );
    let shape = scene.get_shape(id).unwrap();
    assert_eq!(shape.style.dash.as_deref(), Some(&[5.0, 5.0][..]));
    match &shape.geometry {
        ShapeGeometry::Line(line) => {
            assert_eq!(line.p1, Point::new(0.0, 0.0));
            assert_eq!(line.p2, Point::new(60.0, 0.0));
        }
        other => panic!("expected line, got {:?}", other.kind()),
    }
}

#[test]
fn test_semicircle_arc_radius_is_pointer_distance() {
    let mut scene = Scene::new();
    let (_, id) = drag(
        &mut scene,
        Tool::Semicircle,
        Point::new(10.0, 10.0),
        Point::new(40.0, 50.0),
    );
    match &scene.get_shape(id).unwrap().geometry {
        ShapeGeometry::Path(path) => match path.commands[1] {
            PathCommand::Arc { rx, ry, sweep, to, .. } => {
                assert_eq!(rx, 50.0);
                assert_eq!(ry, 50.0);
                assert!(sweep);
                assert_eq!(to, Point::new(40.0, 50.0));
            }
            other => panic!("expected arc, got {other:?}"),
        },
        other => panic!("expected path, got {:?}", other.kind()),
    }
}

#[test]
fn test_triangle_drag_normalizes_any_quadrant() {
    let mut scene = Scene::new();
    let (_, id) = drag(
        &mut scene,
        Tool::Triangle,
        Point::new(100.0, 100.0),
        Point::new(20.0, 40.0),
    );
    match &scene.get_shape(id).unwrap().geometry {
        ShapeGeometry::Triangle(tri) => {
            assert_eq!(tri.origin, Point::new(20.0, 40.0));
            assert_eq!(tri.width, 80.0);
            assert_eq!(tri.height, 60.0);
        }
        other => panic!("expected triangle, got {:?}", other.kind()),
    }
}

#[test]
fn test_degenerate_shape_is_kept() {
    let mut scene = Scene::new();
    // Down and straight up with no movement: degenerate, still kept.
    let (state, effects) = tools::transition(
        DrawState::Armed(Tool::Rectangle),
        PointerEvent::Down(Point::new(10.0, 10.0)),
        &mut scene,
        &defaults(),
    );
    let (_, _) = tools::transition(state, PointerEvent::Up, &mut scene, &defaults());
    assert!(matches!(effects[0], DrawEffect::ShapeCreated(_)));
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_delete_during_drawing_rearms_tool() {
    let mut scene = Scene::new();
    let (state, effects) = tools::transition(
        DrawState::Armed(Tool::Circle),
        PointerEvent::Down(Point::new(0.0, 0.0)),
        &mut scene,
        &defaults(),
    );
    let live_id = match effects[0] {
        DrawEffect::ShapeCreated(id) => id,
        _ => panic!("expected creation"),
    };

    scene.remove(live_id);
    let state = tools::on_deleted(state, live_id);
    assert_eq!(state, DrawState::Armed(Tool::Circle));

    // A stale move for the deleted live shape is swallowed.
    let (state, effects) = tools::transition(
        state,
        PointerEvent::Move(Point::new(50.0, 50.0)),
        &mut scene,
        &defaults(),
    );
    assert_eq!(state, DrawState::Armed(Tool::Circle));
    assert!(effects.is_empty());
    assert!(scene.is_empty());
}

#[test]
fn test_second_click_while_editing_starts_new_text() {
    let mut scene = Scene::new();
    let (state, _) = tools::transition(
        DrawState::Armed(Tool::Text),
        PointerEvent::Down(Point::new(10.0, 10.0)),
        &mut scene,
        &defaults(),
    );
    let first = match state {
        DrawState::EditingText { shape_id } => shape_id,
        other => panic!("expected editing, got {other:?}"),
    };

    let (state, effects) = tools::transition(
        state,
        PointerEvent::Down(Point::new(200.0, 200.0)),
        &mut scene,
        &defaults(),
    );
    assert_eq!(effects[0], DrawEffect::TextEditEnded(first));
    let second = match state {
        DrawState::EditingText { shape_id } => shape_id,
        other => panic!("expected editing, got {other:?}"),
    };
    assert_ne!(first, second);
    assert_eq!(scene.len(), 2);
    match &scene.get_shape(second).unwrap().geometry {
        ShapeGeometry::Text(text) => assert_eq!(text.content, DEFAULT_TEXT_CONTENT),
        other => panic!("expected text, got {:?}", other.kind()),
    }
}
