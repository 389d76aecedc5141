//! Geometric shape variants for the floor-plan editor.
//!
//! `ShapeGeometry` is a closed discriminated union; every consumer
//! (hit-testing, serialization, SVG rendering) matches exhaustively on it
//! instead of dispatching through trait objects.

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod path;
pub mod rect;
pub mod text;
pub mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use path::{PathCommand, PathShape};
pub use rect::{CornerRadius, Rect};
pub use text::TextShape;
pub use triangle::Triangle;

use plankit_core::Point;
use serde::{Deserialize, Serialize};

/// Discriminant of a [`ShapeGeometry`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rect,
    Circle,
    Ellipse,
    Triangle,
    Path,
    Text,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Path => "path",
            ShapeKind::Text => "text",
        }
    }
}

/// Enum wrapper over all drawable geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeGeometry {
    Line(Line),
    Rect(Rect),
    Circle(Circle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Path(PathShape),
    Text(TextShape),
}

impl ShapeGeometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Line(_) => ShapeKind::Line,
            ShapeGeometry::Rect(_) => ShapeKind::Rect,
            ShapeGeometry::Circle(_) => ShapeKind::Circle,
            ShapeGeometry::Ellipse(_) => ShapeKind::Ellipse,
            ShapeGeometry::Triangle(_) => ShapeKind::Triangle,
            ShapeGeometry::Path(_) => ShapeKind::Path,
            ShapeGeometry::Text(_) => ShapeKind::Text,
        }
    }

    /// Axis-aligned bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match self {
            ShapeGeometry::Line(s) => s.bounding_box(),
            ShapeGeometry::Rect(s) => s.bounding_box(),
            ShapeGeometry::Circle(s) => s.bounding_box(),
            ShapeGeometry::Ellipse(s) => s.bounding_box(),
            ShapeGeometry::Triangle(s) => s.bounding_box(),
            ShapeGeometry::Path(s) => s.bounding_box(),
            ShapeGeometry::Text(s) => s.bounding_box(),
        }
    }

    /// Bounding-box width.
    pub fn width(&self) -> f64 {
        let (x1, _, x2, _) = self.bounding_box();
        x2 - x1
    }

    /// Bounding-box height.
    pub fn height(&self) -> f64 {
        let (_, y1, _, y2) = self.bounding_box();
        y2 - y1
    }

    /// Bounding-box center.
    pub fn center(&self) -> Point {
        let (x1, y1, x2, y2) = self.bounding_box();
        Point::new((x1 + x2) / 2.0, (y1 + y2) / 2.0)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            ShapeGeometry::Line(s) => s.translate(dx, dy),
            ShapeGeometry::Rect(s) => s.translate(dx, dy),
            ShapeGeometry::Circle(s) => s.translate(dx, dy),
            ShapeGeometry::Ellipse(s) => s.translate(dx, dy),
            ShapeGeometry::Triangle(s) => s.translate(dx, dy),
            ShapeGeometry::Path(s) => s.translate(dx, dy),
            ShapeGeometry::Text(s) => s.translate(dx, dy),
        }
    }

    /// Scales about `center`. A circle under anisotropic scale becomes an
    /// ellipse, so the variant can change.
    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        if let ShapeGeometry::Circle(c) = self {
            if (sx - sy).abs() > 1e-9 {
                let new_center = c.center.scaled(sx, sy, center);
                let rx = c.radius * sx.abs();
                let ry = c.radius * sy.abs();
                *self = ShapeGeometry::Ellipse(Ellipse::new(new_center, rx, ry));
                return;
            }
        }

        match self {
            ShapeGeometry::Line(s) => s.scale(sx, sy, center),
            ShapeGeometry::Rect(s) => s.scale(sx, sy, center),
            ShapeGeometry::Circle(s) => s.scale(sx, sy, center),
            ShapeGeometry::Ellipse(s) => s.scale(sx, sy, center),
            ShapeGeometry::Triangle(s) => s.scale(sx, sy, center),
            ShapeGeometry::Path(s) => s.scale(sx, sy, center),
            ShapeGeometry::Text(s) => s.scale(sx, sy, center),
        }
    }

    /// Hit test with a tolerance in scene units.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        match self {
            ShapeGeometry::Line(s) => s.contains_point(point, tolerance),
            ShapeGeometry::Rect(s) => s.contains_point(point, tolerance),
            ShapeGeometry::Circle(s) => s.contains_point(point, tolerance),
            ShapeGeometry::Ellipse(s) => s.contains_point(point, tolerance),
            ShapeGeometry::Triangle(s) => s.contains_point(point, tolerance),
            ShapeGeometry::Path(s) => s.contains_point(point, tolerance),
            ShapeGeometry::Text(s) => s.contains_point(point, tolerance),
        }
    }

    /// Translates the geometry so its bounding-box center lands on `target`.
    pub fn center_at(&mut self, target: Point) {
        let current = self.center();
        self.translate(target.x - current.x, target.y - current.y);
    }
}
