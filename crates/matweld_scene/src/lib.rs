// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene store and the BSDF material merge engine for matweld.
//!
//! This crate models the host side of the tool:
//! - Objects with ordered material slots and host-style slot ops
//! - The scene owning all materials and objects, with RON persistence
//! - The merge/sort/dedup slot passes
//! - The "Merge BSDF Materials" orchestration and its error taxonomy

pub mod engine;
pub mod object;
pub mod ops;
pub mod scene;

pub use engine::{
    merge_equivalent_slots, remove_duplicate_slots, sort_slots_by_name, MissingMaterial,
    PassOutcome,
};
pub use object::{MaterialSlot, Object, ObjectId, ObjectKind};
pub use ops::{merge_bsdf_materials, MergeError, MergeOutcome};
pub use scene::{InteractionMode, Scene, SceneError};
