// SPDX-License-Identifier: MIT OR Apache-2.0
//! Demo scene generation.

use matweld_graph::shader::BSDF_PRINCIPLED;
use matweld_graph::{principled_material, Material, SocketValue};
use matweld_scene::{Object, ObjectKind, Scene};

fn set_bsdf_input(material: &mut Material, name: &str, value: SocketValue) {
    let Some(node_id) = material
        .graph
        .nodes()
        .find(|n| n.kind == BSDF_PRINCIPLED)
        .map(|n| n.id)
    else {
        return;
    };
    let Some(node) = material.graph.node_mut(node_id) else {
        return;
    };
    if let Some(socket) = node.inputs.iter_mut().find(|s| s.name == name) {
        socket.default_value = Some(value);
    }
}

/// A mesh with mergeable duplicate materials, for trying the tool.
///
/// "Red" and "Red.001" share identical values and merge into one slot;
/// "Blue" stays. Running `matweld merge <file> Cube` should leave two
/// slots: Blue, Red.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new("Demo");

    let mut red = principled_material("Red");
    set_bsdf_input(&mut red, "Base Color", SocketValue::Color([1.0, 0.0, 0.0, 1.0]));
    let mut red_dup = principled_material("Red.001");
    set_bsdf_input(&mut red_dup, "Base Color", SocketValue::Color([1.0, 0.0, 0.0, 1.0]));
    let mut blue = principled_material("Blue");
    set_bsdf_input(&mut blue, "Base Color", SocketValue::Color([0.0, 0.0, 1.0, 1.0]));

    let red = scene.add_material(red);
    let red_dup = scene.add_material(red_dup);
    let blue = scene.add_material(blue);

    let mut cube = Object::new("Cube", ObjectKind::Mesh);
    cube.add_slot(red);
    cube.add_slot(blue);
    cube.add_slot(red_dup);
    scene.add_object(cube);

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use matweld_scene::{merge_bsdf_materials, MergeOutcome};

    #[test]
    fn test_demo_scene_merges_down_to_two_slots() {
        let mut scene = demo_scene();
        let cube = scene.object_by_name("Cube").unwrap().id;
        scene.active_object = Some(cube);

        let outcome = merge_bsdf_materials(&mut scene, cube).unwrap();
        assert_eq!(
            outcome,
            MergeOutcome::Merged {
                slots_before: 3,
                slots_after: 2
            }
        );
    }
}
