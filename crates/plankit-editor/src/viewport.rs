//! Viewport and coordinate transformation for the editor canvas.
//!
//! Maps between screen coordinates (pointer events, y-down) and scene
//! coordinates. Owns the zoom factor and pan offset. Zoom is clamped to
//! [0.1, 3.0] and wheel-driven zoom is anchored at the viewport center so
//! the visual center stays fixed while zooming.

use std::fmt;

use plankit_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use plankit_core::{Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport of the given screen size at 1:1 zoom.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            width,
            height,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Sets the zoom factor, clamped to [0.1, 3.0]. Pan is unchanged.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Updates the screen size (window resize).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Converts a pointer position to scene coordinates.
    ///
    /// ```text
    /// scene_x = (screen_x - pan_x) / zoom
    /// scene_y = (screen_y - pan_y) / zoom
    /// ```
    pub fn screen_to_scene(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts scene coordinates to screen coordinates.
    pub fn scene_to_screen(&self, point: &Point) -> (f64, f64) {
        (
            point.x * self.zoom + self.pan_x,
            point.y * self.zoom + self.pan_y,
        )
    }

    /// The scene point currently under the viewport center.
    pub fn center(&self) -> Point {
        self.screen_to_scene(self.width / 2.0, self.height / 2.0)
    }

    /// Applies `new_zoom` while keeping `scene_point` at the same screen
    /// position.
    pub fn zoom_to_point(&mut self, scene_point: &Point, new_zoom: f64) {
        let new_zoom = new_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let (screen_x, screen_y) = self.scene_to_screen(scene_point);
        self.zoom = new_zoom;
        self.pan_x = screen_x - scene_point.x * new_zoom;
        self.pan_y = screen_y - scene_point.y * new_zoom;
    }

    /// Adjusts zoom by `delta`, clamped to [0.1, 3.0] and anchored at the
    /// viewport's current center point.
    pub fn zoom_by(&mut self, delta: f64) {
        let center = self.center();
        let new_zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom_to_point(&center, new_zoom);
    }

    /// Maps wheel input to a zoom step: scrolling up zooms in, down zooms
    /// out. Returns `true` when the event is consumed, in which case the
    /// host must suppress the default page-scroll behavior.
    pub fn handle_wheel(&mut self, delta_y: f64) -> bool {
        if delta_y > 0.0 {
            self.zoom_by(-ZOOM_STEP);
        } else {
            self.zoom_by(ZOOM_STEP);
        }
        true
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            plankit_core::constants::DEFAULT_VIEWPORT_WIDTH,
            plankit_core::constants::DEFAULT_VIEWPORT_HEIGHT,
        )
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zoom: {:.2}x | pan: ({:.1}, {:.1}) | {}x{}",
            self.zoom, self.pan_x, self.pan_y, self.width, self.height
        )
    }
}
