//! Drawing tools and the pointer state machine.
//!
//! Pointer handling is a single transition function over an explicit
//! state enum: `(state, event) -> (state, effects)`. The scene is mutated
//! through the transition context and the returned effects tell the host
//! what changed (created/updated shapes, selection, text editing), so the
//! machine is testable without any UI attached.

use plankit_core::constants::DEGENERATE_EPSILON;
use plankit_core::{Point, Style, TextStyle};
use tracing::warn;
use uuid::Uuid;

use crate::model::{Circle, Line, PathShape, Rect, ShapeGeometry, TextShape, Triangle};
use crate::scene::Scene;

/// Default text content for a freshly placed text shape.
pub const DEFAULT_TEXT_CONTENT: &str = "Texte";

/// The active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Line,
    DashedLine,
    Circle,
    Semicircle,
    Rectangle,
    Triangle,
    Text,
}

/// Drawing interaction state.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawState {
    /// No tool armed; pointer interactions manipulate existing shapes.
    Idle,
    /// A creation tool is armed and waiting for pointer-down.
    Armed(Tool),
    /// A freehand gesture is in progress; `live_id` is the shape being
    /// continuously updated.
    Drawing {
        tool: Tool,
        anchor: Point,
        live_id: Uuid,
    },
    /// A text shape is in in-place edit mode.
    EditingText { shape_id: Uuid },
}

/// Pointer input routed through the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
}

/// What a transition did, for the host to react to (re-render, sync the
/// selection read-outs, open the text editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawEffect {
    ShapeCreated(Uuid),
    ShapeUpdated(Uuid),
    /// A gesture ended and the live shape stayed in the scene.
    ShapeFinalized(Uuid),
    SelectionChanged(Option<Uuid>),
    TextEditStarted(Uuid),
    TextEditEnded(Uuid),
}

/// Arms `tool`, finalizing any in-progress gesture first. Arming the
/// select tool disarms entirely.
pub fn select_tool(state: DrawState, tool: Tool, scene: &Scene) -> (DrawState, Vec<DrawEffect>) {
    let mut effects = Vec::new();
    match state {
        DrawState::Drawing { live_id, .. } => {
            // Switching tools mid-drag finalizes whatever exists; there is
            // no separate cancel path.
            finalize_live_shape(scene, live_id);
            effects.push(DrawEffect::ShapeFinalized(live_id));
        }
        DrawState::EditingText { shape_id } => {
            effects.push(DrawEffect::TextEditEnded(shape_id));
        }
        DrawState::Idle | DrawState::Armed(_) => {}
    }

    let next = if tool == Tool::Select {
        DrawState::Idle
    } else {
        DrawState::Armed(tool)
    };
    (next, effects)
}

/// Ends in-place text editing, returning to the armed text tool.
pub fn finish_text_edit(state: DrawState) -> (DrawState, Vec<DrawEffect>) {
    match state {
        DrawState::EditingText { shape_id } => (
            DrawState::Armed(Tool::Text),
            vec![DrawEffect::TextEditEnded(shape_id)],
        ),
        other => (other, Vec::new()),
    }
}

/// Adjusts the state after a shape was deleted out from under it.
pub fn on_deleted(state: DrawState, deleted_id: Uuid) -> DrawState {
    match state {
        DrawState::Drawing { tool, live_id, .. } if live_id == deleted_id => {
            DrawState::Armed(tool)
        }
        DrawState::EditingText { shape_id } if shape_id == deleted_id => {
            DrawState::Armed(Tool::Text)
        }
        other => other,
    }
}

/// The single transition entry point for pointer events.
pub fn transition(
    state: DrawState,
    event: PointerEvent,
    scene: &mut Scene,
    text_defaults: &TextStyle,
) -> (DrawState, Vec<DrawEffect>) {
    match (state, event) {
        (DrawState::Armed(Tool::Text), PointerEvent::Down(p)) => begin_text(scene, p, text_defaults),

        (DrawState::Armed(tool), PointerEvent::Down(p)) => begin_gesture(scene, tool, p),

        (
            DrawState::Drawing {
                tool,
                anchor,
                live_id,
            },
            PointerEvent::Move(p),
        ) => {
            if update_live_shape(scene, tool, anchor, live_id, p) {
                (
                    DrawState::Drawing {
                        tool,
                        anchor,
                        live_id,
                    },
                    vec![DrawEffect::ShapeUpdated(live_id)],
                )
            } else {
                // The live shape was removed mid-gesture; drop back to the
                // armed tool.
                (DrawState::Armed(tool), Vec::new())
            }
        }

        (DrawState::Drawing { tool, live_id, .. }, PointerEvent::Up) => {
            finalize_live_shape(scene, live_id);
            (
                DrawState::Armed(tool),
                vec![DrawEffect::ShapeFinalized(live_id)],
            )
        }

        // A second click while editing text commits the edit and starts a
        // fresh text shape under the pointer.
        (DrawState::EditingText { shape_id }, PointerEvent::Down(p)) => {
            let (next, mut effects) = begin_text(scene, p, text_defaults);
            effects.insert(0, DrawEffect::TextEditEnded(shape_id));
            (next, effects)
        }

        // Pointer traffic with no gesture in progress is a no-op, not an
        // error.
        (state, _) => (state, Vec::new()),
    }
}

fn begin_text(
    scene: &mut Scene,
    p: Point,
    text_defaults: &TextStyle,
) -> (DrawState, Vec<DrawEffect>) {
    let text = TextShape::new(p, DEFAULT_TEXT_CONTENT, text_defaults.clone());
    let id = scene.push_shape(ShapeGeometry::Text(text), Style::default());
    (
        DrawState::EditingText { shape_id: id },
        vec![
            DrawEffect::ShapeCreated(id),
            DrawEffect::SelectionChanged(Some(id)),
            DrawEffect::TextEditStarted(id),
        ],
    )
}

/// Creates the degenerate live shape for a pointer-down and enters
/// `Drawing`. The shape is visible immediately so the user gets live
/// feedback while dragging.
fn begin_gesture(scene: &mut Scene, tool: Tool, p: Point) -> (DrawState, Vec<DrawEffect>) {
    let (geometry, style) = match tool {
        Tool::Line => (
            ShapeGeometry::Line(Line::new(p, p)),
            Style::outline("#000", 2.0),
        ),
        Tool::DashedLine => (
            ShapeGeometry::Line(Line::new(p, p)),
            Style::outline("#000", 2.0).with_dash(vec![5.0, 5.0]),
        ),
        Tool::Circle => (
            ShapeGeometry::Circle(Circle::new(p, 1.0)),
            Style::outline("#000", 2.0),
        ),
        Tool::Semicircle => (
            ShapeGeometry::Path(PathShape::semicircle(p, Point::new(p.x + 1.0, p.y))),
            Style::outline("#000", 2.0),
        ),
        Tool::Rectangle => (
            ShapeGeometry::Rect(Rect::new(p, 1.0, 1.0)),
            Style::outline("#000", 2.0),
        ),
        Tool::Triangle => (
            ShapeGeometry::Triangle(Triangle::new(p, 1.0, 1.0)),
            Style::outline("#000", 2.0),
        ),
        // Select never arms a gesture and Text is handled separately.
        Tool::Select | Tool::Text => {
            return (DrawState::Idle, Vec::new());
        }
    };

    let id = scene.push_shape(geometry, style);
    (
        DrawState::Drawing {
            tool,
            anchor: p,
            live_id: id,
        },
        vec![
            DrawEffect::ShapeCreated(id),
            DrawEffect::SelectionChanged(Some(id)),
        ],
    )
}

/// Applies the per-tool geometry rule for a pointer-move. Returns `false`
/// when the live shape no longer exists.
fn update_live_shape(scene: &mut Scene, tool: Tool, anchor: Point, live_id: Uuid, p: Point) -> bool {
    let Some(shape) = scene.get_shape_mut(live_id) else {
        return false;
    };

    match (tool, &mut shape.geometry) {
        (Tool::Line | Tool::DashedLine, ShapeGeometry::Line(line)) => {
            line.p2 = p;
        }
        (Tool::Circle, ShapeGeometry::Circle(circle)) => {
            circle.radius = anchor.distance_to(&p);
        }
        (Tool::Semicircle, ShapeGeometry::Path(path)) => {
            *path = PathShape::semicircle(anchor, p);
        }
        (Tool::Rectangle, ShapeGeometry::Rect(rect)) => {
            let corner_radius = rect.corner_radius;
            *rect = Rect::from_drag(anchor, p);
            rect.corner_radius = corner_radius;
        }
        (Tool::Triangle, ShapeGeometry::Triangle(triangle)) => {
            *triangle = Triangle::from_drag(anchor, p);
        }
        _ => return false,
    }
    true
}

/// Leaves the live shape in the scene as-is. A gesture that ends with
/// near-zero extent still keeps its shape (observed editor behavior);
/// the warning lets a host decide to surface it.
fn finalize_live_shape(scene: &Scene, live_id: Uuid) {
    if let Some(shape) = scene.get_shape(live_id) {
        let (x1, y1, x2, y2) = shape.geometry.bounding_box();
        if (x2 - x1) < DEGENERATE_EPSILON && (y2 - y1) < DEGENERATE_EPSILON {
            warn!(shape = %live_id, "freehand gesture finalized a degenerate shape");
        }
    }
}
