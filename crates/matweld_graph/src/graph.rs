// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shader graph structure containing nodes and links.

use crate::link::{Link, LinkId};
use crate::node::{Node, NodeId};
use crate::socket::{SocketDirection, SocketId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A shader node graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShaderGraph {
    /// Nodes in the graph, in insertion order
    nodes: IndexMap<NodeId, Node>,
    /// Links between sockets, in insertion order
    links: IndexMap<LinkId, Link>,
}

impl ShaderGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node and its incident links
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.links.retain(|_, l| !l.involves_node(node_id));
        self.nodes.shift_remove(&node_id)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a link between two sockets
    pub fn connect(
        &mut self,
        from_node: NodeId,
        from_socket: SocketId,
        to_node: NodeId,
        to_socket: SocketId,
    ) -> Result<LinkId, ConnectError> {
        let source_node = self
            .nodes
            .get(&from_node)
            .ok_or(ConnectError::NodeNotFound(from_node))?;
        let target_node = self
            .nodes
            .get(&to_node)
            .ok_or(ConnectError::NodeNotFound(to_node))?;

        let source = source_node
            .socket(from_socket)
            .ok_or(ConnectError::SocketNotFound(from_socket))?;
        let target = target_node
            .socket(to_socket)
            .ok_or(ConnectError::SocketNotFound(to_socket))?;

        if source.direction != SocketDirection::Output
            || target.direction != SocketDirection::Input
        {
            return Err(ConnectError::WrongDirection);
        }

        if !source.socket_type.can_connect_to(&target.socket_type) {
            return Err(ConnectError::IncompatibleSockets);
        }

        // An input socket accepts a single link
        if self.is_input_linked(to_socket) {
            return Err(ConnectError::SocketAlreadyLinked(to_socket));
        }

        if from_node == to_node {
            return Err(ConnectError::SelfLoop);
        }

        let link = Link::new(from_node, from_socket, to_node, to_socket);
        let id = link.id;
        self.links.insert(id, link);
        Ok(id)
    }

    /// Add a link between two sockets addressed by name
    pub fn connect_named(
        &mut self,
        from_node: NodeId,
        from_output: &str,
        to_node: NodeId,
        to_input: &str,
    ) -> Result<LinkId, ConnectError> {
        let from_socket = self
            .node(from_node)
            .ok_or(ConnectError::NodeNotFound(from_node))?
            .output_named(from_output)
            .ok_or_else(|| ConnectError::SocketNameNotFound(from_output.to_string()))?
            .id;
        let to_socket = self
            .node(to_node)
            .ok_or(ConnectError::NodeNotFound(to_node))?
            .input_named(to_input)
            .ok_or_else(|| ConnectError::SocketNameNotFound(to_input.to_string()))?
            .id;
        self.connect(from_node, from_socket, to_node, to_socket)
    }

    /// Remove a link
    pub fn disconnect(&mut self, link_id: LinkId) -> Option<Link> {
        self.links.shift_remove(&link_id)
    }

    /// Get all links, in insertion order
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Get the number of links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Check whether an input socket has an incoming link
    pub fn is_input_linked(&self, socket_id: SocketId) -> bool {
        self.links.values().any(|l| l.to_socket == socket_id)
    }

    /// Get the link feeding an input socket, if any
    pub fn link_into(&self, socket_id: SocketId) -> Option<&Link> {
        self.links.values().find(|l| l.to_socket == socket_id)
    }
}

/// Error when creating a link
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Socket not found
    #[error("Socket not found: {0:?}")]
    SocketNotFound(SocketId),

    /// No socket with the given name
    #[error("No socket named `{0}`")]
    SocketNameNotFound(String),

    /// Link does not run output-to-input
    #[error("Links must run from an output socket to an input socket")]
    WrongDirection,

    /// Incompatible socket types
    #[error("Incompatible socket types")]
    IncompatibleSockets,

    /// Input socket already has a link
    #[error("Socket already linked: {0:?}")]
    SocketAlreadyLinked(SocketId),

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, ShaderNodeType};
    use crate::socket::{Socket, SocketType};

    fn shader_source() -> Node {
        Node::new(&ShaderNodeType {
            id: "TestShader".to_string(),
            name: "Test Shader".to_string(),
            description: String::new(),
            inputs: vec![Socket::input("Roughness", SocketType::Float)],
            outputs: vec![Socket::output("BSDF", SocketType::Shader)],
        })
    }

    fn shader_sink() -> Node {
        Node::new(&ShaderNodeType {
            id: "TestOutput".to_string(),
            name: "Test Output".to_string(),
            description: String::new(),
            inputs: vec![Socket::input("Surface", SocketType::Shader)],
            outputs: vec![],
        })
    }

    #[test]
    fn test_connect_and_link_lookup() {
        let mut graph = ShaderGraph::new();
        let source = graph.add_node(shader_source());
        let sink = graph.add_node(shader_sink());

        let surface = graph.node(sink).unwrap().input_named("Surface").unwrap().id;
        graph.connect_named(source, "BSDF", sink, "Surface").unwrap();

        assert!(graph.is_input_linked(surface));
        let link = graph.link_into(surface).unwrap();
        assert_eq!(link.from_node, source);
    }

    #[test]
    fn test_input_accepts_single_link() {
        let mut graph = ShaderGraph::new();
        let one = graph.add_node(shader_source());
        let two = graph.add_node(shader_source());
        let sink = graph.add_node(shader_sink());

        graph.connect_named(one, "BSDF", sink, "Surface").unwrap();
        let err = graph.connect_named(two, "BSDF", sink, "Surface");
        assert!(matches!(err, Err(ConnectError::SocketAlreadyLinked(_))));
    }

    #[test]
    fn test_connect_rejects_wrong_direction() {
        let mut graph = ShaderGraph::new();
        let source = graph.add_node(shader_source());
        let sink = graph.add_node(shader_sink());

        let roughness = graph
            .node(source)
            .unwrap()
            .input_named("Roughness")
            .unwrap()
            .id;
        let surface = graph.node(sink).unwrap().input_named("Surface").unwrap().id;
        let err = graph.connect(source, roughness, sink, surface);
        assert!(matches!(err, Err(ConnectError::WrongDirection)));
    }

    #[test]
    fn test_remove_node_drops_incident_links() {
        let mut graph = ShaderGraph::new();
        let source = graph.add_node(shader_source());
        let sink = graph.add_node(shader_sink());
        graph.connect_named(source, "BSDF", sink, "Surface").unwrap();

        graph.remove_node(source);
        assert_eq!(graph.link_count(), 0);
        assert_eq!(graph.node_count(), 1);
    }
}
