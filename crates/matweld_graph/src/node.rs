// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the shader graph.

use crate::socket::{Socket, SocketId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Node type definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaderNodeType {
    /// Canonical type identifier (e.g. `"ShaderNodeBsdfPrincipled"`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Default input sockets
    pub inputs: Vec<Socket>,
    /// Default output sockets
    pub outputs: Vec<Socket>,
}

/// A node instance in a shader graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Canonical node type identifier
    pub kind: String,
    /// Display name (can be customized)
    pub name: String,
    /// Whether this is the graph's active output node.
    /// Only meaningful on output nodes; false everywhere else.
    pub is_active_output: bool,
    /// Input sockets, in definition order
    pub inputs: Vec<Socket>,
    /// Output sockets, in definition order
    pub outputs: Vec<Socket>,
}

impl Node {
    /// Create a new node from a type definition.
    ///
    /// Sockets are cloned from the definition with fresh IDs so that
    /// two instances of the same type never share socket identities.
    pub fn new(node_type: &ShaderNodeType) -> Self {
        let fresh = |socket: &Socket| {
            let mut socket = socket.clone();
            socket.id = SocketId::new();
            socket
        };
        Self {
            id: NodeId::new(),
            kind: node_type.id.clone(),
            name: node_type.name.clone(),
            is_active_output: false,
            inputs: node_type.inputs.iter().map(fresh).collect(),
            outputs: node_type.outputs.iter().map(fresh).collect(),
        }
    }

    /// Mark this node as the active output node
    pub fn with_active_output(mut self, active: bool) -> Self {
        self.is_active_output = active;
        self
    }

    /// Get an input socket by index
    pub fn input(&self, index: usize) -> Option<&Socket> {
        self.inputs.get(index)
    }

    /// Get an input socket by name
    pub fn input_named(&self, name: &str) -> Option<&Socket> {
        self.inputs.iter().find(|s| s.name == name)
    }

    /// Get an output socket by name
    pub fn output_named(&self, name: &str) -> Option<&Socket> {
        self.outputs.iter().find(|s| s.name == name)
    }

    /// Get a socket by ID
    pub fn socket(&self, socket_id: SocketId) -> Option<&Socket> {
        self.inputs
            .iter()
            .find(|s| s.id == socket_id)
            .or_else(|| self.outputs.iter().find(|s| s.id == socket_id))
    }

    /// Get all sockets
    pub fn sockets(&self) -> impl Iterator<Item = &Socket> {
        self.inputs.iter().chain(self.outputs.iter())
    }
}

/// Registry of available shader node types
pub struct ShaderNodeRegistry {
    /// Registered node types by canonical identifier
    types: indexmap::IndexMap<String, ShaderNodeType>,
}

impl ShaderNodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            types: indexmap::IndexMap::new(),
        }
    }

    /// Register a node type
    pub fn register(&mut self, node_type: ShaderNodeType) {
        self.types.insert(node_type.id.clone(), node_type);
    }

    /// Get a node type by canonical identifier
    pub fn get(&self, id: &str) -> Option<&ShaderNodeType> {
        self.types.get(id)
    }

    /// Get all registered types
    pub fn types(&self) -> impl Iterator<Item = &ShaderNodeType> {
        self.types.values()
    }

    /// Create a node instance from a type identifier
    pub fn create_node(&self, type_id: &str) -> Option<Node> {
        self.get(type_id).map(Node::new)
    }
}

impl Default for ShaderNodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
