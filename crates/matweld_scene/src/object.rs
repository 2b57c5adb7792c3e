// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene objects and their material slots.

use matweld_graph::MaterialId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    /// Create a new random object ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

/// Object type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Mesh geometry; the only kind with editable material slots
    Mesh,
    /// Light source
    Light,
    /// Camera
    Camera,
    /// Empty placeholder
    Empty,
}

/// An ordered, per-object binding of a sub-mesh partition to a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSlot {
    /// Referenced material, owned by the scene. May be unassigned.
    pub material: Option<MaterialId>,
}

impl MaterialSlot {
    /// Create a slot referencing a material
    pub fn new(material: MaterialId) -> Self {
        Self {
            material: Some(material),
        }
    }

    /// Create an unassigned slot
    pub fn empty() -> Self {
        Self { material: None }
    }
}

/// A scene object with an ordered material slot list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    /// Unique instance ID
    pub id: ObjectId,
    /// Object name
    pub name: String,
    /// Object type tag
    pub kind: ObjectKind,
    /// Material slots, in rendering order
    slots: Vec<MaterialSlot>,
    /// Index of the active slot; slot edits apply here
    active_slot: usize,
}

impl Object {
    /// Create a new object with no slots
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            kind,
            slots: Vec::new(),
            active_slot: 0,
        }
    }

    /// Append a slot referencing a material
    pub fn add_slot(&mut self, material: MaterialId) {
        self.slots.push(MaterialSlot::new(material));
    }

    /// Append an unassigned slot
    pub fn add_empty_slot(&mut self) {
        self.slots.push(MaterialSlot::empty());
    }

    /// Get the slot list
    pub fn slots(&self) -> &[MaterialSlot] {
        &self.slots
    }

    /// Get the slot list mutably
    pub fn slots_mut(&mut self) -> &mut [MaterialSlot] {
        &mut self.slots
    }

    /// Get the number of slots
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Get the active slot index
    pub fn active_slot_index(&self) -> usize {
        self.active_slot
    }

    /// Set the active slot index. Out-of-range indices are clamped to the
    /// last slot, matching host behavior.
    pub fn set_active_slot_index(&mut self, index: usize) {
        self.active_slot = index.min(self.slots.len().saturating_sub(1));
    }

    /// Swap the active slot with the one below it, keeping it active.
    ///
    /// Returns false without mutating when the active slot is already
    /// last or the object has no slots.
    pub fn move_active_slot_down(&mut self) -> bool {
        let index = self.active_slot;
        if index + 1 >= self.slots.len() {
            return false;
        }
        self.slots.swap(index, index + 1);
        self.active_slot = index + 1;
        true
    }

    /// Remove the active slot, clamping the active index afterwards.
    pub fn remove_active_slot(&mut self) -> Option<MaterialSlot> {
        if self.slots.is_empty() {
            return None;
        }
        let removed = self.slots.remove(self.active_slot);
        self.active_slot = self.active_slot.min(self.slots.len().saturating_sub(1));
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_with_slots(count: usize) -> (Object, Vec<MaterialId>) {
        let mut object = Object::new("Mesh", ObjectKind::Mesh);
        let ids: Vec<MaterialId> = (0..count).map(|_| MaterialId::new()).collect();
        for id in &ids {
            object.add_slot(*id);
        }
        (object, ids)
    }

    #[test]
    fn test_move_active_slot_down_swaps_adjacent() {
        let (mut object, ids) = mesh_with_slots(3);
        object.set_active_slot_index(0);
        assert!(object.move_active_slot_down());
        assert_eq!(object.slots()[0].material, Some(ids[1]));
        assert_eq!(object.slots()[1].material, Some(ids[0]));
        // The moved slot stays active
        assert_eq!(object.active_slot_index(), 1);
    }

    #[test]
    fn test_move_at_end_is_a_no_op() {
        let (mut object, ids) = mesh_with_slots(2);
        object.set_active_slot_index(1);
        assert!(!object.move_active_slot_down());
        assert_eq!(object.slots()[1].material, Some(ids[1]));
    }

    #[test]
    fn test_remove_active_slot_clamps_index() {
        let (mut object, ids) = mesh_with_slots(3);
        object.set_active_slot_index(2);
        let removed = object.remove_active_slot().unwrap();
        assert_eq!(removed.material, Some(ids[2]));
        assert_eq!(object.slot_count(), 2);
        assert_eq!(object.active_slot_index(), 1);
    }

    #[test]
    fn test_remove_from_empty_object() {
        let mut object = Object::new("Bare", ObjectKind::Mesh);
        assert!(object.remove_active_slot().is_none());
    }

    #[test]
    fn test_set_active_clamps_out_of_range() {
        let (mut object, _) = mesh_with_slots(2);
        object.set_active_slot_index(10);
        assert_eq!(object.active_slot_index(), 1);
    }
}
