// SPDX-License-Identifier: MIT OR Apache-2.0
//! Material definitions.
//!
//! A material owns its shader graph. Slots on scene objects refer to
//! materials by [`MaterialId`]; the graph data itself is never copied.

use crate::graph::ShaderGraph;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub Uuid);

impl MaterialId {
    /// Create a new random material ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MaterialId {
    fn default() -> Self {
        Self::new()
    }
}

/// A material backed by a shader node graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Material name
    pub name: String,
    /// Whether the node graph drives this material.
    /// When false the graph is present but not inspectable.
    pub use_nodes: bool,
    /// The shader node graph
    pub graph: ShaderGraph,
}

impl Material {
    /// Create a new material with an empty, disabled node graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            use_nodes: false,
            graph: ShaderGraph::new(),
        }
    }

    /// Enable node-graph inspection. Idempotent.
    pub fn ensure_nodes(&mut self) {
        if !self.use_nodes {
            self.use_nodes = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_nodes_is_idempotent() {
        let mut material = Material::new("Bare");
        assert!(!material.use_nodes);
        material.ensure_nodes();
        assert!(material.use_nodes);
        material.ensure_nodes();
        assert!(material.use_nodes);
    }
}
