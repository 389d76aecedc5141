//! Selection state and the derived read-outs that hang off it.
//!
//! The manager tracks the primary selected entry, surfaces its dimensions
//! in grid-unit multiples, and mirrors text styling into a panel state
//! when the selection is a text shape. Panel edits flow back through
//! [`SelectionManager::apply_text_style`], which verifies the target still
//! exists before mutating anything.

use plankit_core::{Color, FontStyle, FontWeight, Point, TextStyle};
use uuid::Uuid;

use crate::model::ShapeGeometry;
use crate::scene::{Scene, SceneEntry};

/// Selected-entry dimensions expressed in grid units, rounded to the
/// nearest integer. Zero when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDimensions {
    pub width: i64,
    pub height: i64,
}

/// Style-panel state mirrored from the selected text shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPanelState {
    pub fill: Color,
    /// Background color, or the transparent sentinel when unset.
    pub background: Color,
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextPanelState {
    pub fn from_style(style: &TextStyle) -> Self {
        Self {
            fill: style.fill.clone(),
            background: style.background.clone(),
            font_size: style.font_size,
            bold: style.weight == FontWeight::Bold,
            italic: style.style == FontStyle::Italic,
            underline: style.underline,
        }
    }

    pub fn to_style(&self) -> TextStyle {
        TextStyle {
            fill: self.fill.clone(),
            background: self.background.clone(),
            font_size: self.font_size,
            weight: if self.bold {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            },
            style: if self.italic {
                FontStyle::Italic
            } else {
                FontStyle::Normal
            },
            underline: self.underline,
        }
    }
}

/// Tracks the active selection and its derived state.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<Uuid>,
    derived_dimensions: GridDimensions,
    text_panel: Option<TextPanelState>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected_id
    }

    pub fn derived_dimensions(&self) -> GridDimensions {
        self.derived_dimensions
    }

    /// Panel state for the selected text shape; `None` when the selection
    /// is not a text shape.
    pub fn text_panel(&self) -> Option<&TextPanelState> {
        self.text_panel.as_ref()
    }

    /// Sets the selection and recomputes the derived read-outs.
    pub fn select(&mut self, scene: &Scene, grid_size: u32, id: Option<Uuid>) {
        self.selected_id = id.filter(|id| scene.contains(*id));
        self.refresh(scene, grid_size);
    }

    /// Clears the selection; derived dimensions reset to zero.
    pub fn clear(&mut self) {
        self.selected_id = None;
        self.derived_dimensions = GridDimensions::default();
        self.text_panel = None;
    }

    /// Selects the topmost entry under `point`, or clears when the click
    /// hits empty space.
    pub fn select_at(
        &mut self,
        scene: &Scene,
        grid_size: u32,
        point: &Point,
        tolerance: f64,
    ) -> Option<Uuid> {
        let hit = scene.topmost_at(point, tolerance).map(|e| e.id());
        self.select(scene, grid_size, hit);
        self.selected_id
    }

    /// Recomputes derived dimensions and the text panel mirror. Call
    /// whenever the selection or the selected entry's geometry changes.
    pub fn refresh(&mut self, scene: &Scene, grid_size: u32) {
        let Some(entry) = self.selected_id.and_then(|id| scene.get(id)) else {
            self.clear();
            return;
        };

        let (x1, y1, x2, y2) = entry.bounding_box();
        let grid = grid_size.max(1) as f64;
        self.derived_dimensions = GridDimensions {
            width: ((x2 - x1) / grid).round() as i64,
            height: ((y2 - y1) / grid).round() as i64,
        };

        self.text_panel = match entry {
            SceneEntry::Shape(shape) => match &shape.geometry {
                ShapeGeometry::Text(text) => Some(TextPanelState::from_style(&text.style)),
                _ => None,
            },
            SceneEntry::Group(_) => None,
        };
    }

    /// Writes panel edits back to the selected text shape and refreshes
    /// the mirror. A no-op returning `false` when the selection is gone
    /// or is not a text shape; `true` means the host should re-render.
    pub fn apply_text_style(
        &mut self,
        scene: &mut Scene,
        grid_size: u32,
        panel: &TextPanelState,
    ) -> bool {
        let Some(id) = self.selected_id else {
            return false;
        };
        let Some(shape) = scene.get_shape_mut(id) else {
            // Selection points at a deleted shape; drop it.
            self.clear();
            return false;
        };
        let ShapeGeometry::Text(text) = &mut shape.geometry else {
            return false;
        };

        text.style = panel.to_style();
        self.refresh(scene, grid_size);
        true
    }

    /// Replaces the content of the selected text shape, if it still
    /// exists.
    pub fn apply_text_content(&mut self, scene: &mut Scene, content: &str) -> bool {
        let Some(id) = self.selected_id else {
            return false;
        };
        match scene.get_shape_mut(id) {
            Some(shape) => match &mut shape.geometry {
                ShapeGeometry::Text(text) => {
                    text.content = content.to_string();
                    true
                }
                _ => false,
            },
            None => {
                self.clear();
                false
            }
        }
    }

    /// Removes the selected entry from the scene and clears the
    /// selection. Returns the removed id.
    pub fn delete_selected(&mut self, scene: &mut Scene) -> Option<Uuid> {
        let id = self.selected_id?;
        scene.remove(id)?;
        self.clear();
        Some(id)
    }
}
