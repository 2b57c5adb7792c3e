// SPDX-License-Identifier: MIT OR Apache-2.0
//! Material equivalence comparison.
//!
//! Two materials are equivalent when both terminate in a principled BSDF
//! and every compared input is unlinked with an exactly equal default
//! value. Comparison is exact; floating-point noise between visually
//! identical materials makes them non-equivalent. Known limitation.

use crate::material::Material;
use crate::socket::SocketValue;
use crate::surface::{is_principled_bsdf, resolve_surface_node, unlinked_input};

/// Principled BSDF inputs compared for equivalence, in comparison order.
pub const COMPARED_INPUTS: [&str; 22] = [
    "Base Color",
    "Subsurface",
    "Subsurface Radius",
    "Subsurface Color",
    "Metallic",
    "Specular",
    "Specular Tint",
    "Roughness",
    "Anisotropic",
    "Anisotropic Rotation",
    "Sheen",
    "Sheen Tint",
    "Clearcoat",
    "Clearcoat Roughness",
    "IOR",
    "Transmission",
    "Transmission Roughness",
    "Emission",
    "Alpha",
    "Normal",
    "Clearcoat Normal",
    "Tangent",
];

/// Compare two materials' principled BSDF nodes.
///
/// Both materials must resolve to a principled BSDF surface node, else the
/// result is immediately false. Each name in [`COMPARED_INPUTS`] is then
/// checked in order and the comparison stops at the first input that is
/// linked, missing, or unequal.
pub fn materials_equivalent(material_a: &Material, material_b: &Material) -> bool {
    let Some(node_a) = resolve_surface_node(material_a) else {
        return false;
    };
    if !is_principled_bsdf(node_a) {
        return false;
    }
    let Some(node_b) = resolve_surface_node(material_b) else {
        return false;
    };
    if !is_principled_bsdf(node_b) {
        return false;
    }

    for input_name in COMPARED_INPUTS {
        let socket_a = unlinked_input(&material_a.graph, node_a, input_name);
        let socket_b = unlinked_input(&material_b.graph, node_b, input_name);
        let (Some(socket_a), Some(socket_b)) = (socket_a, socket_b) else {
            // Linked or missing on either side: no authoritative value
            return false;
        };
        if socket_a.socket_type != socket_b.socket_type {
            return false;
        }
        if !values_equal(socket_a.default_value.as_ref(), socket_b.default_value.as_ref()) {
            return false;
        }
    }

    true
}

/// Exact equality over the value shapes equivalence understands.
///
/// Shapes outside scalar/3-vector/4-vector make the comparison
/// undecidable and count as unequal.
fn values_equal(a: Option<&SocketValue>, b: Option<&SocketValue>) -> bool {
    match (a, b) {
        (Some(SocketValue::Float(a)), Some(SocketValue::Float(b))) => a == b,
        (Some(SocketValue::Vector3(a)), Some(SocketValue::Vector3(b))) => a == b,
        (Some(SocketValue::Vector4(a)), Some(SocketValue::Vector4(b)))
        | (Some(SocketValue::Color(a)), Some(SocketValue::Color(b))) => a == b,
        _ => false,
    }
}
