// SPDX-License-Identifier: MIT OR Apache-2.0
//! The "Merge BSDF Materials" action.
//!
//! Orchestrates the full pipeline against one object:
//! pre-check, mode change, merge, sort, dedup. The first failure stops
//! the pipeline and is reported as-is; completed phases are not rolled
//! back. Nothing here retries, every step is deterministic.

use crate::engine::{
    merge_equivalent_slots, remove_duplicate_slots, sort_slots_by_name, MissingMaterial,
    PassOutcome,
};
use crate::object::ObjectId;
use crate::scene::Scene;
use matweld_graph::check_surface_bsdf;

/// Successful result of the merge action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The pipeline ran to completion
    Merged {
        /// Slot count before the action
        slots_before: usize,
        /// Slot count after the action
        slots_after: usize,
    },
    /// The object is not a mesh; nothing was touched
    NotApplicable,
}

/// Error from the merge action
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// No object with the given ID exists in the scene
    #[error("Target object not found")]
    ObjectNotFound,

    /// A slot has no resolvable material behind it
    #[error("Slot {slot} has no resolvable material")]
    MissingMaterial {
        /// Index of the offending slot
        slot: usize,
    },

    /// A slot's material is not driven by a principled BSDF
    #[error("Material `{0}` is not a Principled BSDF material")]
    NotPrincipledBsdf(String),

    /// The host could not switch to object mode
    #[error("Mode change failed")]
    ModeChangeFailed,

    /// The merge pass did not complete
    #[error("Merge failed")]
    MergeFailed(#[source] MissingMaterial),

    /// The sort pass did not complete
    #[error("Sort failed")]
    SortFailed(#[source] MissingMaterial),

    /// The dedup pass did not complete
    #[error("Delete failed")]
    DeleteFailed(#[source] MissingMaterial),
}

/// Merge a mesh object's equivalent BSDF materials into shared slots,
/// then sort the slots by material name and drop duplicates.
///
/// Pre-check: every slot material must resolve to a principled BSDF
/// surface node, otherwise the action aborts before any slot mutation.
/// The caller selects the target; mode switching requires an active
/// object in the scene.
pub fn merge_bsdf_materials(
    scene: &mut Scene,
    object_id: ObjectId,
) -> Result<MergeOutcome, MergeError> {
    // Pre-check every slot before touching anything
    let slot_ids: Vec<_> = scene
        .object(object_id)
        .ok_or(MergeError::ObjectNotFound)?
        .slots()
        .iter()
        .map(|slot| slot.material)
        .collect();
    let slots_before = slot_ids.len();

    for (slot, material_id) in slot_ids.into_iter().enumerate() {
        let material = material_id
            .and_then(|id| scene.material_mut(id))
            .ok_or(MergeError::MissingMaterial { slot })?;
        if !check_surface_bsdf(material) {
            return Err(MergeError::NotPrincipledBsdf(material.name.clone()));
        }
    }

    // Slot edits require object mode
    if !scene.switch_to_object_mode() {
        return Err(MergeError::ModeChangeFailed);
    }

    let (object, materials) = scene
        .object_and_materials_mut(object_id)
        .ok_or(MergeError::ObjectNotFound)?;

    if merge_equivalent_slots(object, materials).map_err(MergeError::MergeFailed)?
        == PassOutcome::NotApplicable
    {
        tracing::debug!(object = %object.name, "not a mesh, nothing to merge");
        return Ok(MergeOutcome::NotApplicable);
    }
    sort_slots_by_name(object, materials).map_err(MergeError::SortFailed)?;
    remove_duplicate_slots(object, materials).map_err(MergeError::DeleteFailed)?;

    let slots_after = object.slot_count();
    tracing::info!(
        object = %object.name,
        slots_before,
        slots_after,
        "merged BSDF material slots"
    );
    Ok(MergeOutcome::Merged {
        slots_before,
        slots_after,
    })
}
