//! Editor session state.
//!
//! `EditorState` is the owned session object: one instance per open plan,
//! holding the scene, viewport, grid, selection, and drawing state.
//! Every operation is a method on the session; there is no ambient global
//! state. All mutation happens synchronously inside these methods - the
//! single-threaded event loop of the host provides mutual exclusion.

use std::path::{Path, PathBuf};

use anyhow::Result;
use plankit_core::constants::ZOOM_STEP;
use plankit_core::{Point, TextStyle};
use tracing::info;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::grid::{self, GridOverlay, GridSettings};
use crate::scene::Scene;
use crate::selection_manager::{SelectionManager, TextPanelState};
use crate::serialization::{self, PlanDocument};
use crate::svg_renderer;
use crate::tools::{self, DrawEffect, DrawState, PointerEvent, Tool};
use crate::viewport::Viewport;

/// Hit-test tolerance for selection clicks, in scene units.
const SELECT_TOLERANCE: f64 = 3.0;

/// The editor session: scene, viewport, grid, selection, drawing state.
#[derive(Debug)]
pub struct EditorState {
    scene: Scene,
    viewport: Viewport,
    grid: GridSettings,
    grid_overlay: GridOverlay,
    selection: SelectionManager,
    draw_state: DrawState,
    text_defaults: TextStyle,
    plan_name: String,
    current_file_path: Option<PathBuf>,
    modified: bool,
}

impl EditorState {
    /// Creates an empty session with the default viewport size.
    pub fn new() -> Self {
        Self::with_viewport(
            plankit_core::constants::DEFAULT_VIEWPORT_WIDTH,
            plankit_core::constants::DEFAULT_VIEWPORT_HEIGHT,
        )
    }

    /// Creates an empty session sized to the host canvas.
    pub fn with_viewport(width: f64, height: f64) -> Self {
        let viewport = Viewport::new(width, height);
        let grid = GridSettings::default();
        let grid_overlay = grid::regenerate(grid, viewport.size());
        Self {
            scene: Scene::new(),
            viewport,
            grid,
            grid_overlay,
            selection: SelectionManager::new(),
            draw_state: DrawState::Idle,
            text_defaults: TextStyle::default(),
            plan_name: "Untitled".to_string(),
            current_file_path: None,
            modified: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn grid(&self) -> GridSettings {
        self.grid
    }

    pub fn grid_overlay(&self) -> &GridOverlay {
        &self.grid_overlay
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn draw_state(&self) -> &DrawState {
        &self.draw_state
    }

    pub fn text_defaults(&self) -> &TextStyle {
        &self.text_defaults
    }

    /// Updates the defaults applied to newly created text shapes.
    pub fn set_text_defaults(&mut self, defaults: TextStyle) {
        self.text_defaults = defaults;
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn set_plan_name(&mut self, name: impl Into<String>) {
        self.plan_name = name.into();
        self.modified = true;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Display name for the title bar, with a `*` marker when there are
    /// unsaved changes.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or(&self.plan_name);
        if self.modified {
            format!("{name}*")
        } else {
            name.to_string()
        }
    }

    // --- Tools and pointer routing ---

    /// Arms a drawing tool. The select tool disarms freehand creation so
    /// pointer interactions manipulate existing shapes instead.
    pub fn select_tool(&mut self, tool: Tool) -> Vec<DrawEffect> {
        let state = std::mem::replace(&mut self.draw_state, DrawState::Idle);
        let (next, effects) = tools::select_tool(state, tool, &self.scene);
        self.draw_state = next;
        self.apply_effects(&effects);
        effects
    }

    /// Routes a pointer-down at screen coordinates. With no tool armed
    /// this is a selection click; with a tool armed it starts a gesture.
    pub fn pointer_down(&mut self, screen_x: f64, screen_y: f64) -> Vec<DrawEffect> {
        let point = self.viewport.screen_to_scene(screen_x, screen_y);
        if self.draw_state == DrawState::Idle {
            let hit = self
                .selection
                .select_at(&self.scene, self.grid.size, &point, SELECT_TOLERANCE);
            return vec![DrawEffect::SelectionChanged(hit)];
        }
        self.dispatch(PointerEvent::Down(point))
    }

    /// Routes a pointer-move; updates the live shape while drawing.
    pub fn pointer_move(&mut self, screen_x: f64, screen_y: f64) -> Vec<DrawEffect> {
        let point = self.viewport.screen_to_scene(screen_x, screen_y);
        self.dispatch(PointerEvent::Move(point))
    }

    /// Routes a pointer-up; finalizes any in-progress gesture in place.
    pub fn pointer_up(&mut self) -> Vec<DrawEffect> {
        self.dispatch(PointerEvent::Up)
    }

    fn dispatch(&mut self, event: PointerEvent) -> Vec<DrawEffect> {
        let state = std::mem::replace(&mut self.draw_state, DrawState::Idle);
        let (next, effects) =
            tools::transition(state, event, &mut self.scene, &self.text_defaults);
        self.draw_state = next;
        self.apply_effects(&effects);
        effects
    }

    fn apply_effects(&mut self, effects: &[DrawEffect]) {
        for effect in effects {
            match effect {
                DrawEffect::ShapeCreated(_) | DrawEffect::ShapeFinalized(_) => {
                    self.modified = true;
                }
                DrawEffect::ShapeUpdated(_) => {
                    self.modified = true;
                    self.selection.refresh(&self.scene, self.grid.size);
                }
                DrawEffect::SelectionChanged(id) => {
                    self.selection.select(&self.scene, self.grid.size, *id);
                }
                DrawEffect::TextEditStarted(_) | DrawEffect::TextEditEnded(_) => {}
            }
        }
    }

    /// Commits the in-place text edit, replacing the shape's content.
    pub fn commit_text_edit(&mut self, content: &str) -> Vec<DrawEffect> {
        if let DrawState::EditingText { .. } = self.draw_state {
            if self.selection.apply_text_content(&mut self.scene, content) {
                self.modified = true;
            }
        }
        let state = std::mem::replace(&mut self.draw_state, DrawState::Idle);
        let (next, effects) = tools::finish_text_edit(state);
        self.draw_state = next;
        effects
    }

    // --- Catalog ---

    /// Instantiates a catalog template at the viewport center and makes
    /// it the active selection.
    pub fn add_from_catalog(&mut self, template_id: &str) -> plankit_core::Result<Uuid> {
        let placement = self.viewport.center();
        self.add_from_catalog_at(template_id, placement)
    }

    /// Instantiates a catalog template at an explicit placement point.
    pub fn add_from_catalog_at(
        &mut self,
        template_id: &str,
        placement: Point,
    ) -> plankit_core::Result<Uuid> {
        let entry = Catalog::builtin().instantiate(template_id, placement)?;
        let id = self.scene.push(entry);
        self.selection.select(&self.scene, self.grid.size, Some(id));
        self.modified = true;
        Ok(id)
    }

    // --- Selection operations ---

    /// Deletes the active selection, if any. Any in-progress gesture on
    /// the deleted shape drops back to its armed tool.
    pub fn delete_selection(&mut self) -> Option<Uuid> {
        let deleted = self.selection.delete_selected(&mut self.scene)?;
        let state = std::mem::replace(&mut self.draw_state, DrawState::Idle);
        self.draw_state = tools::on_deleted(state, deleted);
        self.modified = true;
        Some(deleted)
    }

    /// Applies style-panel edits to the selected text shape. Returns
    /// `true` when a re-render is needed; editing a deleted or
    /// non-selected shape is a no-op.
    pub fn apply_text_style(&mut self, panel: &TextPanelState) -> bool {
        let applied = self
            .selection
            .apply_text_style(&mut self.scene, self.grid.size, panel);
        if applied {
            self.modified = true;
        }
        applied
    }

    /// Moves the selected entry by a scene-space delta.
    pub fn move_selection(&mut self, dx: f64, dy: f64) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        let Some(entry) = self.scene.get_mut(id) else {
            return false;
        };
        entry.translate(dx, dy);
        self.selection.refresh(&self.scene, self.grid.size);
        self.modified = true;
        true
    }

    /// Scales the selected entry about its own center.
    pub fn scale_selection(&mut self, sx: f64, sy: f64) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        let Some(entry) = self.scene.get_mut(id) else {
            return false;
        };
        entry.scale(sx, sy);
        self.selection.refresh(&self.scene, self.grid.size);
        self.modified = true;
        true
    }

    // --- Viewport and grid ---

    /// Adjusts zoom by `delta`, anchored at the viewport center.
    pub fn zoom_by(&mut self, delta: f64) {
        self.viewport.zoom_by(delta);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-ZOOM_STEP);
    }

    /// Wheel input; returns `true` when the host must suppress the
    /// default page scroll.
    pub fn handle_wheel(&mut self, delta_y: f64) -> bool {
        self.viewport.handle_wheel(delta_y)
    }

    /// Resizes the viewport and regenerates the grid overlay.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
        self.regenerate_grid();
    }

    pub fn toggle_grid(&mut self) {
        self.grid.toggle();
        self.regenerate_grid();
    }

    pub fn increase_grid_size(&mut self) {
        self.grid.increase();
        self.regenerate_grid();
        self.selection.refresh(&self.scene, self.grid.size);
    }

    pub fn decrease_grid_size(&mut self) {
        self.grid.decrease();
        self.regenerate_grid();
        self.selection.refresh(&self.scene, self.grid.size);
    }

    fn regenerate_grid(&mut self) {
        self.grid_overlay = grid::regenerate(self.grid, self.viewport.size());
    }

    // --- Document lifecycle ---

    /// Clears the session back to an empty untitled plan.
    pub fn new_plan(&mut self) {
        self.scene.clear();
        self.selection.clear();
        self.draw_state = DrawState::Idle;
        self.plan_name = "Untitled".to_string();
        self.current_file_path = None;
        self.modified = false;
    }

    /// Builds the full-snapshot document for this session.
    pub fn to_document(&self) -> PlanDocument {
        let mut document = PlanDocument::new(&self.plan_name);
        document.viewport = (&self.viewport).into();
        document.grid = self.grid;
        document.capture_scene(&self.scene);
        document
    }

    /// Saves the session to a plan file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let document = self.to_document();
        document.save_to_file(&path)?;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.modified = false;
        info!(path = %path.as_ref().display(), "plan saved");
        Ok(())
    }

    /// Loads a plan file into this session, replacing its state.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let document = PlanDocument::load_from_file(&path)?;
        self.apply_document(&document);
        self.current_file_path = Some(path.as_ref().to_path_buf());
        info!(path = %path.as_ref().display(), shapes = self.scene.len(), "plan loaded");
        Ok(())
    }

    /// Restores session state from a document snapshot.
    pub fn apply_document(&mut self, document: &PlanDocument) {
        self.scene = document.restore_scene();
        self.viewport.set_zoom(document.viewport.zoom);
        self.viewport
            .set_pan(document.viewport.pan_x, document.viewport.pan_y);
        self.grid = document.grid;
        self.regenerate_grid();
        self.selection.clear();
        self.draw_state = DrawState::Idle;
        self.plan_name = document.metadata.name.clone();
        self.modified = false;
    }

    /// JSON export of the full snapshot (the downloadable artifact).
    pub fn export_json(&self) -> Result<String> {
        self.to_document().to_json()
    }

    /// File name for the downloadable export.
    pub fn export_file_name(&self) -> String {
        serialization::export_file_name(&self.plan_name)
    }

    /// SVG rendering of the scene at the current viewport size.
    pub fn export_svg(&self) -> String {
        svg_renderer::render_scene(&self.scene, self.viewport.width(), self.viewport.height())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
