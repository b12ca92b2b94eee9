use crate::catalog::{NodeCategory, NodePayload};
use serde::{Deserialize, Serialize};

/// Canvas-space position of a node's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node on the canvas.
///
/// `node_type` is kept as the raw tag the node was created with, so nodes
/// dropped with an unknown tag still live on the canvas (with an empty
/// payload) even though no connection rule covers them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    pub data: NodePayload,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

impl Node {
    /// Creates a node of `node_type` carrying that type's default payload.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>, position: Position) -> Self {
        let node_type = node_type.into();
        let data = NodePayload::for_tag(&node_type);
        Self {
            id: id.into(),
            node_type,
            position,
            data,
            selected: false,
        }
    }

    pub fn with_data(mut self, data: NodePayload) -> Self {
        self.data = data;
        self
    }

    pub fn category(&self) -> Option<NodeCategory> {
        NodeCategory::from_tag(&self.node_type)
    }
}
