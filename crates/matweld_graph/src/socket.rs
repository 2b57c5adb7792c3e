// SPDX-License-Identifier: MIT OR Apache-2.0
//! Socket definitions for shader node inputs/outputs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocketId(pub Uuid);

impl SocketId {
    /// Create a new random socket ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SocketId {
    fn default() -> Self {
        Self::new()
    }
}

/// Socket direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocketDirection {
    /// Input socket
    Input,
    /// Output socket
    Output,
}

/// Data type that can flow through sockets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocketType {
    /// Floating point value
    Float,
    /// Floating point value clamped to a 0..1 factor
    FloatFactor,
    /// 3D vector
    Vector,
    /// Color (RGBA)
    Color,
    /// Shading closure, only produced by shader nodes
    Shader,
    /// Custom type
    Custom(String),
}

impl SocketType {
    /// Check if this type can connect to another type
    pub fn can_connect_to(&self, other: &SocketType) -> bool {
        // Same types can always connect
        if self == other {
            return true;
        }

        // Implicit conversions
        match (self, other) {
            // Scalar conversions
            (Self::Float, Self::FloatFactor) | (Self::FloatFactor, Self::Float) => true,
            // Scalars fan out into vectors and colors
            (Self::Float | Self::FloatFactor, Self::Vector | Self::Color) => true,
            // Vector/color conversions
            (Self::Vector, Self::Color) | (Self::Color, Self::Vector) => true,
            // Shader inputs accept any upstream terminal; whether the
            // result is a usable closure is the classifier's problem
            (_, Self::Shader) => true,
            // Shading closures never convert to data
            _ => false,
        }
    }
}

/// A socket on a shader node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Socket {
    /// Unique socket ID
    pub id: SocketId,
    /// Socket name
    pub name: String,
    /// Socket direction
    pub direction: SocketDirection,
    /// Data type
    pub socket_type: SocketType,
    /// Literal value used when the socket is unlinked (inputs only)
    pub default_value: Option<SocketValue>,
}

impl Socket {
    /// Create a new input socket
    pub fn input(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            id: SocketId::new(),
            name: name.into(),
            direction: SocketDirection::Input,
            socket_type,
            default_value: None,
        }
    }

    /// Create a new output socket
    pub fn output(name: impl Into<String>, socket_type: SocketType) -> Self {
        Self {
            id: SocketId::new(),
            name: name.into(),
            direction: SocketDirection::Output,
            socket_type,
            default_value: None,
        }
    }

    /// Set the default value
    pub fn with_default(mut self, value: SocketValue) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Literal value carried by an unlinked socket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SocketValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i32),
    /// Float
    Float(f32),
    /// 3D vector
    Vector3([f32; 3]),
    /// 4D vector
    Vector4([f32; 4]),
    /// Color (RGBA)
    Color([f32; 4]),
}

impl SocketValue {
    /// Get the socket type this value naturally fills
    pub fn socket_type(&self) -> SocketType {
        match self {
            Self::Bool(_) => SocketType::Custom("bool".to_string()),
            Self::Int(_) => SocketType::Custom("int".to_string()),
            Self::Float(_) => SocketType::Float,
            Self::Vector3(_) => SocketType::Vector,
            Self::Vector4(_) | Self::Color(_) => SocketType::Color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_type_compatibility() {
        assert!(SocketType::Float.can_connect_to(&SocketType::Float));
        assert!(SocketType::Float.can_connect_to(&SocketType::FloatFactor));
        assert!(SocketType::FloatFactor.can_connect_to(&SocketType::Color));
        assert!(SocketType::Vector.can_connect_to(&SocketType::Color));
        assert!(SocketType::Shader.can_connect_to(&SocketType::Shader));
        assert!(!SocketType::Shader.can_connect_to(&SocketType::Color));
        // Non-shader terminals may still end a shading chain
        assert!(SocketType::Color.can_connect_to(&SocketType::Shader));
    }

    #[test]
    fn test_input_builder_keeps_default() {
        let socket = Socket::input("Roughness", SocketType::FloatFactor)
            .with_default(SocketValue::Float(0.5));
        assert_eq!(socket.direction, SocketDirection::Input);
        assert_eq!(socket.default_value, Some(SocketValue::Float(0.5)));
    }
}
