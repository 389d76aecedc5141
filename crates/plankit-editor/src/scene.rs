//! The mutable scene document: an ordered collection of shape instances
//! and groups. Z-order is implicit in entry position; identity is by
//! `Uuid` and unique within the scene.

use std::collections::HashSet;

use plankit_core::{Point, SceneError, Style};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ShapeGeometry;

/// A single placed shape with stable identity and styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeInstance {
    pub id: Uuid,
    pub geometry: ShapeGeometry,
    pub style: Style,
    /// Set when this instance lives inside a [`Group`]; references the
    /// owning group's id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_group: Option<Uuid>,
}

impl ShapeInstance {
    pub fn new(geometry: ShapeGeometry, style: Style) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            style,
            owner_group: None,
        }
    }
}

/// A composite shape. Children are exclusively owned: their geometry is
/// relative to `origin`, they are destroyed with the group, and groups
/// never nest (depth-1 by construction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    /// Scene-space placement point; child geometry is relative to it.
    pub origin: Point,
    pub children: Vec<ShapeInstance>,
}

impl Group {
    /// Builds a group at `origin`, claiming ownership of the children.
    pub fn new(origin: Point, mut children: Vec<ShapeInstance>) -> Self {
        let id = Uuid::new_v4();
        for child in &mut children {
            child.owner_group = Some(id);
        }
        Self {
            id,
            origin,
            children,
        }
    }

    /// Scene-space bounding box: the union of child boxes offset by the
    /// group origin.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for child in &self.children {
            let (x1, y1, x2, y2) = child.geometry.bounding_box();
            min_x = min_x.min(x1);
            min_y = min_y.min(y1);
            max_x = max_x.max(x2);
            max_y = max_y.max(y2);
        }
        if min_x > max_x {
            return (self.origin.x, self.origin.y, self.origin.x, self.origin.y);
        }
        (
            min_x + self.origin.x,
            min_y + self.origin.y,
            max_x + self.origin.x,
            max_y + self.origin.y,
        )
    }

    /// Moving the group moves every child through the shared origin.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.translated(dx, dy);
    }

    /// Scales children about the group origin; relative offsets captured
    /// at creation scale with the geometry.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        for child in &mut self.children {
            child.geometry.scale(sx, sy, Point::ZERO);
        }
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let (x1, y1, x2, y2) = self.bounding_box();
        point.x >= x1 - tolerance
            && point.x <= x2 + tolerance
            && point.y >= y1 - tolerance
            && point.y <= y2 + tolerance
    }
}

/// One z-ordered scene entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SceneEntry {
    Shape(ShapeInstance),
    Group(Group),
}

impl SceneEntry {
    pub fn id(&self) -> Uuid {
        match self {
            SceneEntry::Shape(s) => s.id,
            SceneEntry::Group(g) => g.id,
        }
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match self {
            SceneEntry::Shape(s) => s.geometry.bounding_box(),
            SceneEntry::Group(g) => g.bounding_box(),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            SceneEntry::Shape(s) => s.geometry.translate(dx, dy),
            SceneEntry::Group(g) => g.translate(dx, dy),
        }
    }

    /// Scales about the entry's own center.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        match self {
            SceneEntry::Shape(s) => {
                let center = s.geometry.center();
                s.geometry.scale(sx, sy, center);
            }
            SceneEntry::Group(g) => g.scale(sx, sy),
        }
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        match self {
            SceneEntry::Shape(s) => s.geometry.contains_point(point, tolerance),
            SceneEntry::Group(g) => g.contains_point(point, tolerance),
        }
    }
}

/// The editable document. Created empty at editor start; mutated by
/// catalog instantiation, freehand drawing, deletion, and transforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    entries: Vec<SceneEntry>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry at the z-order tail and returns its id.
    pub fn push(&mut self, entry: SceneEntry) -> Uuid {
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    /// Appends a bare shape at the z-order tail.
    pub fn push_shape(&mut self, geometry: ShapeGeometry, style: Style) -> Uuid {
        self.push(SceneEntry::Shape(ShapeInstance::new(geometry, style)))
    }

    pub fn get(&self, id: Uuid) -> Option<&SceneEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut SceneEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    /// Looks up a top-level shape instance. Group children are not
    /// individually addressable; they live and die with their group.
    pub fn get_shape(&self, id: Uuid) -> Option<&ShapeInstance> {
        self.entries.iter().find_map(|e| match e {
            SceneEntry::Shape(s) if s.id == id => Some(s),
            _ => None,
        })
    }

    pub fn get_shape_mut(&mut self, id: Uuid) -> Option<&mut ShapeInstance> {
        self.entries.iter_mut().find_map(|e| match e {
            SceneEntry::Shape(s) if s.id == id => Some(s),
            _ => None,
        })
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// Removes an entry. Removing a group removes all of its children
    /// with it, since they are owned by the group.
    pub fn remove(&mut self, id: Uuid) -> Option<SceneEntry> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Topmost entry containing `point`, searching in reverse z-order.
    pub fn topmost_at(&self, point: &Point, tolerance: f64) -> Option<&SceneEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.contains_point(point, tolerance))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Checks the scene invariants: unique ids across entries and group
    /// children, and every `owner_group` pointing at its actual owner.
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id()) {
                return Err(SceneError::MissingEntry(entry.id()));
            }
            if let SceneEntry::Group(group) = entry {
                for child in &group.children {
                    if !seen.insert(child.id) {
                        return Err(SceneError::MissingEntry(child.id));
                    }
                    if child.owner_group != Some(group.id) {
                        return Err(SceneError::DanglingGroup {
                            shape: child.id,
                            group: child.owner_group.unwrap_or(group.id),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
