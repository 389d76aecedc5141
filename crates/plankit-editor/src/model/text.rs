//! Editable text label.
//!
//! Extents are approximate: no font stack is loaded, so width uses the
//! common 0.6 x font-size advance estimate per character and height uses a
//! 1.2 line factor. Good enough for selection read-outs and hit tests.

use plankit_core::{Point, TextStyle};
use serde::{Deserialize, Serialize};

/// Per-character width as a fraction of the font size.
const ADVANCE_FACTOR: f64 = 0.6;

/// Line height as a fraction of the font size.
const LINE_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
    /// Top-left corner of the text block.
    pub origin: Point,
    pub content: String,
    pub style: TextStyle,
}

impl TextShape {
    pub fn new(origin: Point, content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            origin,
            content: content.into(),
            style,
        }
    }

    /// Estimated rendered width of the widest line.
    pub fn estimated_width(&self) -> f64 {
        let longest = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        longest as f64 * self.style.font_size * ADVANCE_FACTOR
    }

    /// Estimated rendered height across all lines.
    pub fn estimated_height(&self) -> f64 {
        let lines = self.content.lines().count().max(1);
        lines as f64 * self.style.font_size * LINE_FACTOR
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.origin.x,
            self.origin.y,
            self.origin.x + self.estimated_width(),
            self.origin.y + self.estimated_height(),
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.translated(dx, dy);
    }

    /// Scaling a text block scales its font size by the dominant factor.
    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        self.origin = self.origin.scaled(sx, sy, center);
        self.style.font_size *= sx.abs().max(sy.abs());
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let (x1, y1, x2, y2) = self.bounding_box();
        point.x >= x1 - tolerance
            && point.x <= x2 + tolerance
            && point.y >= y1 - tolerance
            && point.y <= y2 + tolerance
    }
}
