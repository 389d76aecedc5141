//! Axis-aligned rectangle, optionally with rounded corners.

use plankit_core::Point;
use serde::{Deserialize, Serialize};

/// Corner rounding radii. Used by furniture silhouettes such as bathtubs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    pub rx: f64,
    pub ry: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner in scene coordinates.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
}

impl Rect {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
            corner_radius: None,
        }
    }

    pub fn rounded(origin: Point, width: f64, height: f64, rx: f64, ry: f64) -> Self {
        Self {
            origin,
            width,
            height,
            corner_radius: Some(CornerRadius { rx, ry }),
        }
    }

    /// Builds the rectangle spanned by two drag corners, normalized so the
    /// origin is the minimum corner and width/height are non-negative.
    pub fn from_drag(anchor: Point, pointer: Point) -> Self {
        Self::new(
            Point::new(anchor.x.min(pointer.x), anchor.y.min(pointer.y)),
            (pointer.x - anchor.x).abs(),
            (pointer.y - anchor.y).abs(),
        )
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.translated(dx, dy);
    }

    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        self.origin = self.origin.scaled(sx, sy, center);
        self.width *= sx.abs();
        self.height *= sy.abs();
        if let Some(r) = &mut self.corner_radius {
            r.rx *= sx.abs();
            r.ry *= sy.abs();
        }
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        point.x >= self.origin.x - tolerance
            && point.x <= self.origin.x + self.width + tolerance
            && point.y >= self.origin.y - tolerance
            && point.y <= self.origin.y + self.height + tolerance
    }
}
