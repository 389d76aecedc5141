//! Shared numeric constants for the editor.

/// Minimum viewport zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum viewport zoom factor.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom change applied per wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

/// Smallest allowed grid spacing, in scene units.
pub const MIN_GRID_SIZE: u32 = 10;

/// Amount the grid spacing grows or shrinks per adjustment.
pub const GRID_SIZE_STEP: u32 = 10;

/// Default grid spacing.
pub const DEFAULT_GRID_SIZE: u32 = 50;

/// Default viewport width in screen units.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1200.0;

/// Default viewport height in screen units.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

/// Tolerance below which a finalized freehand shape counts as degenerate.
pub const DEGENERATE_EPSILON: f64 = 1e-6;
