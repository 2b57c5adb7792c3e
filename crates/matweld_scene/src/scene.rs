// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene storage: materials, objects, and interaction mode.
//!
//! The scene is the single owner of all materials and objects. Slots hold
//! [`MaterialId`] handles into the scene's material table; nothing outside
//! the scene owns graph data.

use crate::object::{Object, ObjectId};
use indexmap::IndexMap;
use matweld_graph::{Material, MaterialId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The host's current interaction mode. Slot edits require object mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Object mode, the edit-safe default
    #[default]
    Object,
    /// Mesh edit mode
    Edit,
    /// Sculpt mode
    Sculpt,
    /// Vertex paint mode
    VertexPaint,
    /// Weight paint mode
    WeightPaint,
    /// Texture paint mode
    TexturePaint,
}

/// A scene holding materials and objects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name
    pub name: String,
    /// Materials by ID, in creation order
    materials: IndexMap<MaterialId, Material>,
    /// Objects by ID, in creation order
    objects: IndexMap<ObjectId, Object>,
    /// The selected object, if any. Mode changes require one.
    pub active_object: Option<ObjectId>,
    /// Current interaction mode
    pub mode: InteractionMode,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            materials: IndexMap::new(),
            objects: IndexMap::new(),
            active_object: None,
            mode: InteractionMode::Object,
        }
    }

    /// Add a material, returning its ID
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId::new();
        self.materials.insert(id, material);
        id
    }

    /// Get a material by ID
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    /// Get a material by ID, mutably
    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(&id)
    }

    /// Get the material table
    pub fn materials(&self) -> &IndexMap<MaterialId, Material> {
        &self.materials
    }

    /// Add an object, returning its ID
    pub fn add_object(&mut self, object: Object) -> ObjectId {
        let id = object.id;
        self.objects.insert(id, object);
        id
    }

    /// Get an object by ID
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id)
    }

    /// Get an object by ID, mutably
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(&id)
    }

    /// Find an object by name
    pub fn object_by_name(&self, name: &str) -> Option<&Object> {
        self.objects.values().find(|o| o.name == name)
    }

    /// Get all objects, in creation order
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    /// Split borrow: one object mutably plus the whole material table.
    ///
    /// The slot engine rewrites slot lists while reading material graphs;
    /// objects and materials live in separate tables, so both sides can be
    /// handed out at once.
    pub fn object_and_materials_mut(
        &mut self,
        id: ObjectId,
    ) -> Option<(&mut Object, &IndexMap<MaterialId, Material>)> {
        let object = self.objects.get_mut(&id)?;
        Some((object, &self.materials))
    }

    /// Switch the host to object mode.
    ///
    /// Fails (returning false) when no object is active, the same poll
    /// failure the host reports for mode changes without a selection.
    pub fn switch_to_object_mode(&mut self) -> bool {
        if self.active_object.is_none() {
            return false;
        }
        self.mode = InteractionMode::Object;
        true
    }

    /// Load a scene from a RON file
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        let scene = ron::from_str(&content)?;
        Ok(scene)
    }

    /// Save the scene to a RON file
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        let content = ron::ser::to_string_pretty(self, config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Error loading or saving a scene file
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// File could not be read or written
    #[error("Scene file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene file is not valid RON
    #[error("Scene file parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Scene could not be serialized
    #[error("Scene serialization error: {0}")]
    Serialize(#[from] ron::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectKind;
    use matweld_graph::principled_material;

    #[test]
    fn test_mode_change_requires_active_object() {
        let mut scene = Scene::new("Test");
        scene.mode = InteractionMode::Edit;
        assert!(!scene.switch_to_object_mode());
        assert_eq!(scene.mode, InteractionMode::Edit);

        let object_id = scene.add_object(Object::new("Cube", ObjectKind::Mesh));
        scene.active_object = Some(object_id);
        assert!(scene.switch_to_object_mode());
        assert_eq!(scene.mode, InteractionMode::Object);
    }

    #[test]
    fn test_object_lookup_by_name() {
        let mut scene = Scene::new("Test");
        scene.add_object(Object::new("Cube", ObjectKind::Mesh));
        assert!(scene.object_by_name("Cube").is_some());
        assert!(scene.object_by_name("Sphere").is_none());
    }

    #[test]
    fn test_ron_round_trip() {
        let mut scene = Scene::new("RoundTrip");
        let red = scene.add_material(principled_material("Red"));
        let mut cube = Object::new("Cube", ObjectKind::Mesh);
        cube.add_slot(red);
        scene.add_object(cube);

        let config = ron::ser::PrettyConfig::default().struct_names(true);
        let text = ron::ser::to_string_pretty(&scene, config).unwrap();
        let loaded: Scene = ron::from_str(&text).unwrap();

        assert_eq!(loaded.name, "RoundTrip");
        assert_eq!(loaded.material(red).unwrap().name, "Red");
        let cube = loaded.object_by_name("Cube").unwrap();
        assert_eq!(cube.slots()[0].material, Some(red));
    }
}
