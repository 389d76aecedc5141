//! # Plankit Editor
//!
//! The floor-plan / planogram editor core: an in-memory scene model with
//! a shape catalog, an explicit drawing state machine, grid and viewport
//! control, and a JSON serialization contract.
//!
//! ## Core Components
//!
//! - **Model**: closed `ShapeGeometry` union (lines, rects, circles,
//!   ellipses, triangles, paths, text)
//! - **Scene**: z-ordered shape instances and depth-1 groups with stable
//!   uuid identity
//! - **Catalog**: immutable floor-plan template registry (walls, doors,
//!   windows, furniture) stamped into the scene
//! - **Tools**: pointer-driven drawing state machine, one transition
//!   function, testable without a UI
//! - **Viewport/Grid**: screen/scene mapping, center-anchored zoom in
//!   [0.1, 3.0], grid overlay generation
//! - **Serialization**: full-snapshot JSON documents plus sanitized
//!   export/asset file naming
//! - **Upload**: the one external collaborator, a multipart asset upload
//!
//! ## Architecture
//!
//! ```text
//! EditorState (session)
//!   ├── Scene (shapes, groups, z-order)
//!   ├── Viewport (zoom/pan, pointer -> scene mapping)
//!   ├── GridSettings + GridOverlay (explicit, outside the scene)
//!   ├── SelectionManager (derived dims, text style panel)
//!   └── DrawState (Idle / Armed / Drawing / EditingText)
//! ```

pub mod catalog;
pub mod editor_state;
pub mod grid;
pub mod model;
pub mod scene;
pub mod selection_manager;
pub mod serialization;
pub mod svg_renderer;
pub mod tools;
pub mod upload;
pub mod viewport;

pub use catalog::{Catalog, CatalogTemplate, TemplatePart, TemplateSpec};
pub use editor_state::EditorState;
pub use grid::{GridOverlay, GridSettings, GuideLine};
pub use model::{
    Circle, CornerRadius, Ellipse, Line, PathCommand, PathShape, Rect, ShapeGeometry, ShapeKind,
    TextShape, Triangle,
};
pub use scene::{Group, Scene, SceneEntry, ShapeInstance};
pub use selection_manager::{GridDimensions, SelectionManager, TextPanelState};
pub use serialization::{
    asset_file_name, export_file_name, sanitize_base_name, PlanDocument, PlanMetadata,
    ViewportState,
};
pub use tools::{DrawEffect, DrawState, PointerEvent, Tool};
pub use upload::{AssetUploader, UploadError};
pub use viewport::Viewport;
