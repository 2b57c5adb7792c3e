// SPDX-License-Identifier: MIT OR Apache-2.0
//! Canonical shader node types.
//!
//! Node kinds follow the host application's identifiers
//! (`ShaderNodeBsdfPrincipled`, `ShaderNodeOutputMaterial`, ...), and the
//! principled BSDF carries the stock default values so two untouched
//! materials compare as equivalent.

use crate::material::Material;
use crate::node::{ShaderNodeRegistry, ShaderNodeType};
use crate::socket::{Socket, SocketType, SocketValue};

/// Canonical identifier of the material output node
pub const OUTPUT_MATERIAL: &str = "ShaderNodeOutputMaterial";

/// Canonical identifier of the principled BSDF node
pub const BSDF_PRINCIPLED: &str = "ShaderNodeBsdfPrincipled";

/// Canonical identifier of the image texture node
pub const TEX_IMAGE: &str = "ShaderNodeTexImage";

/// Canonical identifier of the diffuse BSDF node
pub const BSDF_DIFFUSE: &str = "ShaderNodeBsdfDiffuse";

/// Canonical identifier of the emission node
pub const EMISSION: &str = "ShaderNodeEmission";

/// Create the registry of canonical shader node types
pub fn shader_registry() -> ShaderNodeRegistry {
    let mut registry = ShaderNodeRegistry::new();

    registry.register(ShaderNodeType {
        id: OUTPUT_MATERIAL.to_string(),
        name: "Material Output".to_string(),
        description: "Final material output".to_string(),
        inputs: vec![
            // The first input is the surface input; resolution depends on it
            Socket::input("Surface", SocketType::Shader),
            Socket::input("Volume", SocketType::Shader),
            Socket::input("Displacement", SocketType::Vector)
                .with_default(SocketValue::Vector3([0.0, 0.0, 0.0])),
        ],
        outputs: vec![],
    });

    registry.register(ShaderNodeType {
        id: BSDF_PRINCIPLED.to_string(),
        name: "Principled BSDF".to_string(),
        description: "Physically-based shading model".to_string(),
        inputs: vec![
            Socket::input("Base Color", SocketType::Color)
                .with_default(SocketValue::Color([0.8, 0.8, 0.8, 1.0])),
            Socket::input("Subsurface", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Subsurface Radius", SocketType::Vector)
                .with_default(SocketValue::Vector3([1.0, 0.2, 0.1])),
            Socket::input("Subsurface Color", SocketType::Color)
                .with_default(SocketValue::Color([0.8, 0.8, 0.8, 1.0])),
            Socket::input("Metallic", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Specular", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.5)),
            Socket::input("Specular Tint", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Roughness", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.5)),
            Socket::input("Anisotropic", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Anisotropic Rotation", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Sheen", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Sheen Tint", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.5)),
            Socket::input("Clearcoat", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Clearcoat Roughness", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.03)),
            Socket::input("IOR", SocketType::Float).with_default(SocketValue::Float(1.45)),
            Socket::input("Transmission", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Transmission Roughness", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Emission", SocketType::Color)
                .with_default(SocketValue::Color([0.0, 0.0, 0.0, 1.0])),
            Socket::input("Alpha", SocketType::FloatFactor)
                .with_default(SocketValue::Float(1.0)),
            Socket::input("Normal", SocketType::Vector)
                .with_default(SocketValue::Vector3([0.0, 0.0, 0.0])),
            Socket::input("Clearcoat Normal", SocketType::Vector)
                .with_default(SocketValue::Vector3([0.0, 0.0, 0.0])),
            Socket::input("Tangent", SocketType::Vector)
                .with_default(SocketValue::Vector3([0.0, 0.0, 0.0])),
        ],
        outputs: vec![Socket::output("BSDF", SocketType::Shader)],
    });

    registry.register(ShaderNodeType {
        id: TEX_IMAGE.to_string(),
        name: "Image Texture".to_string(),
        description: "Sample a 2D image texture".to_string(),
        inputs: vec![Socket::input("Vector", SocketType::Vector)
            .with_default(SocketValue::Vector3([0.0, 0.0, 0.0]))],
        outputs: vec![
            Socket::output("Color", SocketType::Color),
            Socket::output("Alpha", SocketType::Float),
        ],
    });

    registry.register(ShaderNodeType {
        id: BSDF_DIFFUSE.to_string(),
        name: "Diffuse BSDF".to_string(),
        description: "Lambertian diffuse shading".to_string(),
        inputs: vec![
            Socket::input("Color", SocketType::Color)
                .with_default(SocketValue::Color([0.8, 0.8, 0.8, 1.0])),
            Socket::input("Roughness", SocketType::FloatFactor)
                .with_default(SocketValue::Float(0.0)),
            Socket::input("Normal", SocketType::Vector)
                .with_default(SocketValue::Vector3([0.0, 0.0, 0.0])),
        ],
        outputs: vec![Socket::output("BSDF", SocketType::Shader)],
    });

    registry.register(ShaderNodeType {
        id: EMISSION.to_string(),
        name: "Emission".to_string(),
        description: "Light-emitting shading".to_string(),
        inputs: vec![
            Socket::input("Color", SocketType::Color)
                .with_default(SocketValue::Color([1.0, 1.0, 1.0, 1.0])),
            Socket::input("Strength", SocketType::Float).with_default(SocketValue::Float(1.0)),
        ],
        outputs: vec![Socket::output("Emission", SocketType::Shader)],
    });

    registry
}

/// Create a material with a principled BSDF wired into an active output node
pub fn principled_material(name: impl Into<String>) -> Material {
    let registry = shader_registry();
    let mut material = Material::new(name);
    material.ensure_nodes();

    let output = registry
        .create_node(OUTPUT_MATERIAL)
        .map(|n| n.with_active_output(true));
    let bsdf = registry.create_node(BSDF_PRINCIPLED);
    if let (Some(output), Some(bsdf)) = (output, bsdf) {
        let output_id = material.graph.add_node(output);
        let bsdf_id = material.graph.add_node(bsdf);
        // Both sockets exist on freshly created canonical nodes
        let _ = material
            .graph
            .connect_named(bsdf_id, "BSDF", output_id, "Surface");
    }
    material
}

/// Create a material whose surface input is fed by an image texture
pub fn image_material(name: impl Into<String>) -> Material {
    let registry = shader_registry();
    let mut material = Material::new(name);
    material.ensure_nodes();

    let output = registry
        .create_node(OUTPUT_MATERIAL)
        .map(|n| n.with_active_output(true));
    let tex = registry.create_node(TEX_IMAGE);
    if let (Some(output), Some(tex)) = (output, tex) {
        let output_id = material.graph.add_node(output);
        let tex_id = material.graph.add_node(tex);
        let _ = material
            .graph
            .connect_named(tex_id, "Color", output_id, "Surface");
    }
    material
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_canonical_types() {
        let registry = shader_registry();
        assert!(registry.get(OUTPUT_MATERIAL).is_some());
        assert!(registry.get(BSDF_PRINCIPLED).is_some());
        assert!(registry.get(TEX_IMAGE).is_some());
    }

    #[test]
    fn test_principled_defaults() {
        let registry = shader_registry();
        let bsdf = registry.get(BSDF_PRINCIPLED).unwrap();
        assert_eq!(bsdf.inputs.len(), 22);
        assert_eq!(bsdf.inputs[0].name, "Base Color");
        assert_eq!(
            bsdf.inputs[0].default_value,
            Some(SocketValue::Color([0.8, 0.8, 0.8, 1.0]))
        );
        let roughness = bsdf.inputs.iter().find(|s| s.name == "Roughness").unwrap();
        assert_eq!(roughness.default_value, Some(SocketValue::Float(0.5)));
    }

    #[test]
    fn test_output_surface_is_first_input() {
        let registry = shader_registry();
        let output = registry.get(OUTPUT_MATERIAL).unwrap();
        assert_eq!(output.inputs[0].name, "Surface");
    }

    #[test]
    fn test_principled_material_is_wired() {
        let material = principled_material("Test");
        assert!(material.use_nodes);
        assert_eq!(material.graph.node_count(), 2);
        assert_eq!(material.graph.link_count(), 1);
    }
}
