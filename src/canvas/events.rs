use crate::graph::Position;
use serde::{Deserialize, Serialize};

/// Notification sent to subscribers after the canvas state changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasEvent {
    NodeAdded(String),
    EdgeAdded(String),
    /// Positions, selection, payload flags or membership of nodes changed.
    NodesChanged,
    /// Selection or membership of edges changed.
    EdgesChanged,
}

pub type Listener = Box<dyn FnMut(&CanvasEvent)>;

/// Generic node updates forwarded by the host's node container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    Position { id: String, position: Position },
    Select { id: String, selected: bool },
    Remove { id: String },
}

/// Generic edge updates forwarded by the host's edge container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeChange {
    Select { id: String, selected: bool },
    Remove { id: String },
}
