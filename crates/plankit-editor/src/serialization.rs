//! Serialization and deserialization for plan documents.
//!
//! A saved plan is a single JSON snapshot: metadata, viewport and grid
//! state, and every scene entry with its geometry, style, and group
//! membership. Loading is the exact inverse up to floating-point
//! representation. Nothing is ever partially persisted; a save captures
//! the full scene in one pass.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::grid::GridSettings;
use crate::scene::{Scene, SceneEntry};
use crate::viewport::Viewport;

/// Plan file format version.
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Fixed suffix appended to exported plan files.
pub const EXPORT_SUFFIX: &str = "_planogram";

/// Complete plan file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    pub version: String,
    pub metadata: PlanMetadata,
    pub viewport: ViewportState,
    pub grid: GridSettings,
    pub entries: Vec<SceneEntry>,
}

/// Plan metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Persisted viewport state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl From<&Viewport> for ViewportState {
    fn from(viewport: &Viewport) -> Self {
        Self {
            zoom: viewport.zoom(),
            pan_x: viewport.pan_x(),
            pan_y: viewport.pan_y(),
        }
    }
}

impl PlanDocument {
    /// Creates an empty document with default viewport and grid state.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: PlanMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            viewport: ViewportState {
                zoom: 1.0,
                pan_x: 0.0,
                pan_y: 0.0,
            },
            grid: GridSettings::default(),
            entries: Vec::new(),
        }
    }

    /// Snapshots a scene into this document, replacing prior entries.
    pub fn capture_scene(&mut self, scene: &Scene) {
        self.entries = scene.iter().cloned().collect();
        self.metadata.modified = Utc::now();
    }

    /// Rebuilds a scene from the snapshot.
    pub fn restore_scene(&self) -> Scene {
        let mut scene = Scene::new();
        for entry in &self.entries {
            scene.push(entry.clone());
        }
        scene
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize plan")
    }

    /// Parses a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse plan")
    }

    /// Saves the document to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write plan file")?;
        Ok(())
    }

    /// Loads a document from a file, refreshing the modified timestamp.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read plan file")?;
        let mut document = Self::from_json(&content)?;
        document.metadata.modified = Utc::now();
        Ok(document)
    }
}

/// Sanitizes a user-facing base name for use in file names: every
/// non-alphanumeric character becomes `-` and the result is lower-cased.
pub fn sanitize_base_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// File name for the downloadable plan export.
pub fn export_file_name(base_name: &str) -> String {
    format!("{}{}.json", sanitize_base_name(base_name), EXPORT_SUFFIX)
}

/// File name for an uploaded asset: `<sanitized base>_<category>.<ext>`.
pub fn asset_file_name(base_name: &str, category: &str, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        sanitize_base_name(base_name),
        category,
        extension
    )
}
