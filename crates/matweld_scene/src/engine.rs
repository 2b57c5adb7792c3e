// SPDX-License-Identifier: MIT OR Apache-2.0
//! Slot merge, sort, and dedup passes.
//!
//! Three sequential passes over one object's slot list:
//! - merge: re-point slots at the earliest equivalent material
//! - sort: bubble slots into ascending material-name order
//! - dedup: drop adjacent slots with equal material names
//!
//! Each pass gates on the object being a mesh and reports
//! [`PassOutcome::NotApplicable`] otherwise, mutating nothing.

use crate::object::{Object, ObjectKind};
use indexmap::IndexMap;
use matweld_graph::{materials_equivalent, Material, MaterialId};

/// Tri-state result of a slot pass (failures are the `Err` side)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The pass ran over the slot list
    Applied,
    /// The object is not a mesh; nothing was touched
    NotApplicable,
}

/// A slot references a material the store cannot produce
#[derive(Debug, thiserror::Error)]
#[error("Slot {slot} has no resolvable material")]
pub struct MissingMaterial {
    /// Index of the offending slot
    pub slot: usize,
}

type Materials = IndexMap<MaterialId, Material>;

fn slot_material(
    object: &Object,
    materials: &Materials,
    index: usize,
) -> Result<MaterialId, MissingMaterial> {
    object.slots()[index]
        .material
        .filter(|id| materials.contains_key(id))
        .ok_or(MissingMaterial { slot: index })
}

/// Re-point each slot at the earliest equivalent material.
///
/// Nested double scan in original slot order. For a fixed slot the inner
/// scan stops without merging once it reaches a slot with the same
/// material name, so a slot never merges with itself or with anything
/// after it. The first equivalent material found before that point wins.
///
/// Single-pass, first-match: a slot re-pointed here is not re-compared,
/// and a merge target may itself be re-pointed later in the same pass.
/// Preserved as-is; callers relying on transitive merges must run the
/// pass again.
pub fn merge_equivalent_slots(
    object: &mut Object,
    materials: &Materials,
) -> Result<PassOutcome, MissingMaterial> {
    if object.kind != ObjectKind::Mesh {
        return Ok(PassOutcome::NotApplicable);
    }

    let slot_count = object.slot_count();
    for check_index in 0..slot_count {
        let check_id = slot_material(object, materials, check_index)?;
        let check_name = &materials[&check_id].name;

        for comp_index in 0..slot_count {
            let comp_id = slot_material(object, materials, comp_index)?;
            let comp_material = &materials[&comp_id];

            // Reached ourselves (or another slot already holding the same
            // material) before any match: leave this slot alone
            if *check_name == comp_material.name {
                break;
            }

            if materials_equivalent(&materials[&check_id], comp_material) {
                tracing::debug!(
                    slot = check_index,
                    material = %check_name,
                    into = %comp_material.name,
                    "merging equivalent material slot"
                );
                object.slots_mut()[check_index].material = Some(comp_id);
                break;
            }
        }
    }

    Ok(PassOutcome::Applied)
}

/// Bubble-sort slots by ascending material name.
///
/// Every swap is a single adjacent move through the host slot ops;
/// passes repeat until one completes without a swap. Equal names end up
/// adjacent no matter how far apart they started.
pub fn sort_slots_by_name(
    object: &mut Object,
    materials: &Materials,
) -> Result<PassOutcome, MissingMaterial> {
    if object.kind != ObjectKind::Mesh {
        return Ok(PassOutcome::NotApplicable);
    }

    let mut changed = true;
    while changed {
        changed = false;
        for index in 0..object.slot_count().saturating_sub(1) {
            let check_id = slot_material(object, materials, index)?;
            let comp_id = slot_material(object, materials, index + 1)?;
            if materials[&check_id].name > materials[&comp_id].name {
                object.set_active_slot_index(index);
                object.move_active_slot_down();
                changed = true;
            }
        }
    }

    Ok(PassOutcome::Applied)
}

/// Remove adjacent slots with equal material names.
///
/// Scans from the end of the list backwards so removals never shift
/// indices the scan has yet to visit. Only adjacent duplicates are
/// removed; run [`sort_slots_by_name`] first to make duplicates adjacent.
pub fn remove_duplicate_slots(
    object: &mut Object,
    materials: &Materials,
) -> Result<PassOutcome, MissingMaterial> {
    if object.kind != ObjectKind::Mesh {
        return Ok(PassOutcome::NotApplicable);
    }

    for index in (0..object.slot_count().saturating_sub(1)).rev() {
        if index + 1 >= object.slot_count() {
            continue;
        }
        let check_id = slot_material(object, materials, index)?;
        let comp_id = slot_material(object, materials, index + 1)?;
        if materials[&check_id].name == materials[&comp_id].name {
            object.set_active_slot_index(index + 1);
            object.remove_active_slot();
        }
    }

    Ok(PassOutcome::Applied)
}
