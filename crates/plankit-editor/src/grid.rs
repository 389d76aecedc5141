//! Grid overlay generation.
//!
//! The overlay is an explicit entity owned by the editor session, never a
//! scene entry: guide lines are a distinct type that cannot be selected or
//! hit-tested, and regeneration is a pure function of the grid settings
//! and viewport size, so it is idempotent by construction.

use plankit_core::constants::{DEFAULT_GRID_SIZE, GRID_SIZE_STEP, MIN_GRID_SIZE};
use plankit_core::{Point, Size};
use serde::{Deserialize, Serialize};

/// One non-interactive guide line in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub from: Point,
    pub to: Point,
}

/// The disposable grid overlay: regenerated wholesale on every trigger,
/// never merged with user shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOverlay {
    pub lines: Vec<GuideLine>,
}

impl GridOverlay {
    pub fn vertical_count(&self) -> usize {
        self.lines.iter().filter(|l| l.from.x == l.to.x).count()
    }

    pub fn horizontal_count(&self) -> usize {
        self.lines.iter().filter(|l| l.from.y == l.to.y).count()
    }
}

/// Grid spacing and visibility. Spacing is clamped to a minimum of 10 and
/// stepped by 10 per adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSettings {
    pub size: u32,
    pub visible: bool,
}

impl GridSettings {
    pub fn increase(&mut self) {
        self.size += GRID_SIZE_STEP;
    }

    pub fn decrease(&mut self) {
        self.size = self.size.saturating_sub(GRID_SIZE_STEP).max(MIN_GRID_SIZE);
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            visible: true,
        }
    }
}

/// Regenerates the overlay for the given settings and viewport size.
///
/// Emits one vertical line at every `x = k * size` for `x < width` and one
/// horizontal line at every `y = k * size` for `y < height`; an invisible
/// grid yields an empty overlay.
pub fn regenerate(settings: GridSettings, viewport: Size) -> GridOverlay {
    let mut overlay = GridOverlay::default();
    if !settings.visible {
        return overlay;
    }

    let step = settings.size.max(MIN_GRID_SIZE) as f64;

    let mut x = 0.0;
    while x < viewport.width {
        overlay.lines.push(GuideLine {
            from: Point::new(x, 0.0),
            to: Point::new(x, viewport.height),
        });
        x += step;
    }

    let mut y = 0.0;
    while y < viewport.height {
        overlay.lines.push(GuideLine {
            from: Point::new(0.0, y),
            to: Point::new(viewport.width, y),
        });
        y += step;
    }

    overlay
}
