// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shader graph model and material equivalence for matweld.
//!
//! This crate provides the material-side half of the tool:
//! - Nodes, sockets, and links forming per-material shader graphs
//! - The canonical shader node registry (principled BSDF, material output, ...)
//! - Surface node resolution and BSDF classification
//! - Value-exact material equivalence over the fixed compared-input list
//!
//! ## Architecture
//!
//! Graphs are owned by materials; scene objects reference materials by ID
//! and are modeled in `matweld_scene`. Everything here is read-only apart
//! from graph construction and the idempotent `ensure_nodes` enable step.

pub mod compare;
pub mod graph;
pub mod link;
pub mod material;
pub mod node;
pub mod shader;
pub mod socket;
pub mod surface;

pub use compare::{materials_equivalent, COMPARED_INPUTS};
pub use graph::{ConnectError, ShaderGraph};
pub use link::{Link, LinkId};
pub use material::{Material, MaterialId};
pub use node::{Node, NodeId, ShaderNodeRegistry, ShaderNodeType};
pub use shader::{
    image_material, principled_material, shader_registry, BSDF_PRINCIPLED, OUTPUT_MATERIAL,
};
pub use socket::{Socket, SocketDirection, SocketId, SocketType, SocketValue};
pub use surface::{check_surface_bsdf, is_principled_bsdf, resolve_surface_node, unlinked_input};
