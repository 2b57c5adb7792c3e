// SPDX-License-Identifier: MIT OR Apache-2.0
//! Surface node resolution.
//!
//! Walks a material's graph from the active output node back to the node
//! feeding its surface input, and classifies that node.

use crate::graph::ShaderGraph;
use crate::material::Material;
use crate::node::Node;
use crate::shader::{BSDF_PRINCIPLED, OUTPUT_MATERIAL};
use crate::socket::Socket;

/// Find the node connected to the active output's surface input.
///
/// Returns `None` when the material does not use nodes, when no output
/// node is flagged active, when the surface input is unlinked, or when
/// the link's source node cannot be found (inconsistent graph).
///
/// When several output nodes are flagged active, the last one in node
/// order wins. Malformed, but tolerated.
pub fn resolve_surface_node(material: &Material) -> Option<&Node> {
    if !material.use_nodes {
        return None;
    }

    let mut output_node = None;
    for node in material.graph.nodes() {
        if node.kind == OUTPUT_MATERIAL && node.is_active_output {
            output_node = Some(node);
        }
    }
    let output_node = output_node?;

    // The surface input is the output node's first input
    let surface_input = output_node.input(0)?;
    let link = material.graph.link_into(surface_input.id)?;

    material.graph.node(link.from_node)
}

/// Check whether a node is a principled BSDF shader
pub fn is_principled_bsdf(node: &Node) -> bool {
    node.kind == BSDF_PRINCIPLED
}

/// Check whether a material's active output is fed by a principled BSDF.
///
/// Enables the material's node graph first (idempotent), then resolves
/// and classifies the surface node.
pub fn check_surface_bsdf(material: &mut Material) -> bool {
    material.ensure_nodes();
    resolve_surface_node(material).is_some_and(is_principled_bsdf)
}

/// Get a named input socket only if its default value is authoritative.
///
/// Returns `None` when the node has no input with that name, or when the
/// input is linked (a linked input's default value is not observable).
pub fn unlinked_input<'a>(graph: &ShaderGraph, node: &'a Node, name: &str) -> Option<&'a Socket> {
    let socket = node.input_named(name)?;
    if graph.is_input_linked(socket.id) {
        return None;
    }
    Some(socket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{image_material, principled_material, shader_registry, TEX_IMAGE};

    #[test]
    fn test_resolves_principled_surface() {
        let material = principled_material("Test");
        let node = resolve_surface_node(&material).unwrap();
        assert!(is_principled_bsdf(node));
    }

    #[test]
    fn test_none_without_active_output() {
        let registry = shader_registry();
        let mut material = Material::new("NoOutput");
        material.ensure_nodes();
        // Output node present but never flagged active
        material
            .graph
            .add_node(registry.create_node(OUTPUT_MATERIAL).unwrap());
        assert!(resolve_surface_node(&material).is_none());
    }

    #[test]
    fn test_none_with_unlinked_surface() {
        let registry = shader_registry();
        let mut material = Material::new("Unlinked");
        material.ensure_nodes();
        material.graph.add_node(
            registry
                .create_node(OUTPUT_MATERIAL)
                .unwrap()
                .with_active_output(true),
        );
        assert!(resolve_surface_node(&material).is_none());
    }

    #[test]
    fn test_none_when_nodes_disabled() {
        let mut material = principled_material("Disabled");
        material.use_nodes = false;
        assert!(resolve_surface_node(&material).is_none());
        // check_surface_bsdf re-enables the graph before resolving
        assert!(check_surface_bsdf(&mut material));
        assert!(material.use_nodes);
    }

    #[test]
    fn test_last_active_output_wins() {
        let registry = shader_registry();
        let mut material = principled_material("TwoOutputs");
        // A second active output with nothing linked shadows the first
        material.graph.add_node(
            registry
                .create_node(OUTPUT_MATERIAL)
                .unwrap()
                .with_active_output(true),
        );
        assert!(resolve_surface_node(&material).is_none());
    }

    #[test]
    fn test_image_texture_is_not_bsdf() {
        let mut material = image_material("Textured");
        let node = resolve_surface_node(&material).unwrap();
        assert_eq!(node.kind, TEX_IMAGE);
        assert!(!is_principled_bsdf(node));
        assert!(!check_surface_bsdf(&mut material));
    }

    #[test]
    fn test_unlinked_input_excludes_linked_sockets() {
        let registry = shader_registry();
        let mut material = principled_material("Linked");
        let tex_id = material
            .graph
            .add_node(registry.create_node(TEX_IMAGE).unwrap());
        let bsdf_id = material
            .graph
            .nodes()
            .find(|n| is_principled_bsdf(n))
            .unwrap()
            .id;
        material
            .graph
            .connect_named(tex_id, "Color", bsdf_id, "Base Color")
            .unwrap();

        let bsdf = material.graph.node(bsdf_id).unwrap();
        assert!(unlinked_input(&material.graph, bsdf, "Base Color").is_none());
        assert!(unlinked_input(&material.graph, bsdf, "Roughness").is_some());
        assert!(unlinked_input(&material.graph, bsdf, "No Such Input").is_none());
    }
}
